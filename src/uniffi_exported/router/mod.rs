mod endpoints;
mod multipart_form_data;
mod multipart_upload;
mod parameter_encoding;
mod router;

pub use endpoints::*;
pub use multipart_form_data::*;
pub use multipart_upload::*;
pub use parameter_encoding::*;
pub use router::*;
