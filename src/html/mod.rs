//! HTML string helpers shared by every widget.

pub mod attributes;
pub mod escape;

pub use attributes::{attribute_to_html, merged_to_html, to_html};
pub use escape::{escape_once, escape_str_once, fix_double_escape};
