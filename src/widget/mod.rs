//! Form widgets
//!
//! Every control wraps a [`Widget`], which owns the validated option set and
//! the default HTML attributes, and implements [`FormWidget`] to render
//! itself. Widget kinds declare their defaults through ordered
//! [`OptionProvider`]s; a variant is the parent's providers plus its own.

mod core;
pub mod input;
pub mod model_select;
pub mod schema;
pub mod select;
pub mod traits;

pub use self::core::Widget;
pub use input::{Input, Textarea};
pub use model_select::{ModelSelect, ModelSelectMany};
pub use schema::{OptionProvider, OptionSchema};
pub use select::Select;
pub use traits::FormWidget;
