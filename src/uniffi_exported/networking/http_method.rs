use crate::prelude::*;

#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HTTPMethod {
    Get,
    Post,
}

impl HTTPMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for HTTPMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
