//! Resolver data models
//!
//! This module contains the value types passed through the resolution pipeline:
//! - `options` - Open-ended query options forwarded verbatim (QueryOptions, OptionValue)
//! - `formats` - Representation names with special handling (file formats, image, twirl)
//! - `request` - The input to the URL builder (ResolutionRequest)
//! - `result` - Normalized service answers (ResolutionResult, ResolvedValue)

mod formats;
mod options;
mod request;
mod result;

pub use formats::{
    is_file_format, FILE_FORMATS, FILE_REPRESENTATION, IMAGE_REPRESENTATION, TWIRL_REPRESENTATION,
};
pub use options::{OptionValue, QueryOptions};
pub use request::ResolutionRequest;
pub use result::{ResolutionResult, ResolvedValue};
