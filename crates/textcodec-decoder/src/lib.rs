#![warn(clippy::pedantic)]

pub mod decoder;
pub mod error;
pub mod options;
pub mod streaming;

mod bom;
mod policy;
mod state;

pub use decoder::TextDecoder;
pub use error::DecodeError;
pub use options::{DecodeOptions, DecoderOptions};
pub use policy::{ErrorMode, REPLACEMENT};
pub use streaming::DecodeStream;
pub use textcodec_types::{Encoding, ErrorKind, LabelError};
