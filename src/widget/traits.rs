//! Widget trait definitions

use crate::config::RenderContext;
use crate::value::{Value, ValueMap};
use crate::widget::Widget;

/// A form control that renders itself to HTML.
pub trait FormWidget: Send + Sync {
    /// Shared option and attribute state
    fn widget(&self) -> &Widget;

    /// Mutable access for the option and attribute setters
    fn widget_mut(&mut self) -> &mut Widget;

    /// Render the control.
    ///
    /// * `name` - the HTML name of the control
    /// * `value` - the current value, `Value::Null` when there is none
    /// * `attributes` - attributes merged over the widget defaults
    /// * `errors` - validation errors attached to the field
    fn render(
        &self,
        ctx: &RenderContext,
        name: &str,
        value: &Value,
        attributes: &ValueMap,
        errors: &[String],
    ) -> String;
}
