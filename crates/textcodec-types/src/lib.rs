#![warn(clippy::pedantic)]

pub mod encoding;
pub mod error;
pub mod labels;

pub use encoding::{Encoding, Width};
pub use error::{ErrorKind, LabelError};
