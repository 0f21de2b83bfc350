//! Text inputs and text areas.

use crate::config::RenderContext;
use crate::error::Result;
use crate::html::escape_once;
use crate::value::{merge, Value, ValueMap};
use crate::widget::{FormWidget, Widget};

fn configure_input(widget: &mut Widget) -> Result<()> {
    widget.add_option("type", "text");
    Ok(())
}

/// An `<input>` element. The `type` option defaults to `text`.
#[derive(Debug, Clone)]
pub struct Input {
    widget: Widget,
}

impl Input {
    pub fn new(options: ValueMap, attributes: ValueMap) -> Result<Self> {
        let widget = Widget::configured("Input", &[&configure_input], options, attributes)?;
        Ok(Self { widget })
    }
}

impl FormWidget for Input {
    fn widget(&self) -> &Widget {
        &self.widget
    }

    fn widget_mut(&mut self) -> &mut Widget {
        &mut self.widget
    }

    fn render(
        &self,
        ctx: &RenderContext,
        name: &str,
        value: &Value,
        attributes: &ValueMap,
        _errors: &[String],
    ) -> String {
        let mut base = ValueMap::new();
        base.insert(
            "type".into(),
            self.widget.option("type").cloned().unwrap_or(Value::Null),
        );
        base.insert("name".into(), name.into());
        base.insert("value".into(), value.clone());

        self.widget.render_tag(ctx, "input", &merge(&base, attributes))
    }
}

fn configure_textarea(widget: &mut Widget) -> Result<()> {
    widget.set_attribute("rows", "4");
    widget.set_attribute("cols", "30");
    Ok(())
}

/// A `<textarea>` element. The value becomes the escaped element content.
#[derive(Debug, Clone)]
pub struct Textarea {
    widget: Widget,
}

impl Textarea {
    pub fn new(options: ValueMap, attributes: ValueMap) -> Result<Self> {
        let widget =
            Widget::configured("Textarea", &[&configure_textarea], options, attributes)?;
        Ok(Self { widget })
    }
}

impl FormWidget for Textarea {
    fn widget(&self) -> &Widget {
        &self.widget
    }

    fn widget_mut(&mut self) -> &mut Widget {
        &mut self.widget
    }

    fn render(
        &self,
        _ctx: &RenderContext,
        name: &str,
        value: &Value,
        attributes: &ValueMap,
        _errors: &[String],
    ) -> String {
        let mut base = ValueMap::new();
        base.insert("name".into(), name.into());

        self.widget
            .render_content_tag("textarea", &escape_once(value), &merge(&base, attributes))
    }
}
