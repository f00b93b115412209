#![warn(clippy::pedantic)]

pub mod encoder;

pub use encoder::TextEncoder;
