use crate::prelude::*;
use crate::prelude::JSONPathSegment::*;

const NAME: &[JSONPathSegment<'static>] = &[Key("im:name"), Key("label")];
const FIRST_IMAGE: &[JSONPathSegment<'static>] = &[Key("im:image"), Index(0), Key("label")];

/// An app listed in one of the iTunes top charts, as much of it as the list
/// displays.
#[derive(Record, Serialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AppItem {
    pub name: Option<String>,

    /// The smallest artwork, i.e. the first of the `im:image` renditions.
    pub image_url_string: Option<String>,
}

impl AppItem {
    /// Projects a feed `entry` object, any missing field is left `None`.
    pub fn from_entry(entry: &Value) -> Self {
        Self {
            name: entry.string_at(NAME),
            image_url_string: entry.string_at(FIRST_IMAGE),
        }
    }
}
