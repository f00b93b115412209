#![warn(clippy::pedantic)]

pub mod bom;
pub mod sequence;
pub mod utf16;
pub mod utf8;

pub use bom::BomMatch;
pub use sequence::Sequence;
pub use utf16::ByteOrder;
