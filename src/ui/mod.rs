//! Screen layout and text helpers shared by input handling and drawing

pub mod layout;
pub mod wrap;

pub use layout::MenuAction;
pub use wrap::{ELLIPSIS, FixedWidthFont, TextMeasure, wrap_lines};
