use crate::prelude::*;

/// Everything FFI side (Swift side) provides for a multipart upload.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct MultipartUpload {
    /// JSON object sent as the first part.
    pub params_json: String,
    pub data: Vec<u8>,
    pub mime_type: String,
    pub field_name: String,
    pub file_name: String,
    pub boundary: String,
}

impl MultipartUpload {
    pub fn form_data(&self) -> Result<MultipartFormData, RustSideError> {
        let parameters = parse_json_parameters(&self.params_json)?;
        Ok(MultipartFormData::new(self.boundary.clone())
            .append_json(&parameters)
            .append_file(&self.field_name, &self.file_name, &self.mime_type, &self.data))
    }
}

pub(crate) fn parse_json_parameters(json: &str) -> Result<Value, RustSideError> {
    serde_json::from_str(json).map_err(|e| RustSideError::InvalidJSONParameters {
        underlying: e.to_string(),
    })
}
