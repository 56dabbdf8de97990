//! Conversion between raw sudoers lines and records

pub mod parser;
pub mod serializer;
pub mod split;

pub use parser::{is_marker_text, parse_line, MARKER_KEYWORD, MARKER_TAG};
pub use serializer::{marker_line, render, to_line, to_lines};
