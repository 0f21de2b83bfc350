//! Configurable HTML form widgets.
//!
//! A widget holds a validated option set and default HTML attributes and
//! renders itself to an HTML string. Render settings (charset, XHTML output)
//! are passed in a [`RenderContext`] rather than held globally.

pub mod config;
pub mod error;
pub mod form;
pub mod html;
pub mod mapping;
pub mod records;
pub mod value;
pub mod widget;

pub use config::{FieldDefinition, FormDefinition, RenderContext};
pub use error::{Result, WidgetError};
pub use html::{escape_once, fix_double_escape};
pub use value::{Value, ValueMap};
pub use widget::{
    FormWidget, Input, ModelSelect, ModelSelectMany, OptionProvider, OptionSchema, Select, Textarea,
    Widget,
};
