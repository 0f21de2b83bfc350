//! Choice select boxes.

use std::collections::HashSet;

use crate::config::RenderContext;
use crate::error::Result;
use crate::html::{escape_once, escape_str_once, to_html};
use crate::value::{merge, value_to_string, Value, ValueMap};
use crate::widget::{FormWidget, Widget};

fn configure_select(widget: &mut Widget) -> Result<()> {
    widget.add_required_option("choices");
    widget.add_option("multiple", false);
    Ok(())
}

/// A `<select>` over the `choices` option.
///
/// `choices` is either an object of value to label, or an array whose
/// indexes become the values. A nested object renders as an `<optgroup>`
/// labelled with its key. With `multiple` set, the control accepts several
/// values and its name gets a `[]` suffix.
#[derive(Debug, Clone)]
pub struct Select {
    widget: Widget,
}

impl Select {
    pub fn new(options: ValueMap, attributes: ValueMap) -> Result<Self> {
        let widget = Widget::configured("Select", &[&configure_select], options, attributes)?;
        Ok(Self { widget })
    }
}

impl FormWidget for Select {
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
        let choices = self
            .widget
            .option("choices")
            .map(choices_from_value)
            .unwrap_or_default();

        render_select(&self.widget, name, value, attributes, &choices)
    }
}

/// Normalize a `choices` value into an ordered value-to-label map.
pub(crate) fn choices_from_value(choices: &Value) -> ValueMap {
    match choices {
        Value::Object(map) => map.clone(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, label)| (index.to_string(), label.clone()))
            .collect(),
        Value::Null => ValueMap::new(),
        other => {
            tracing::warn!("Ignoring choices that are neither a map nor a list: {}", other);
            ValueMap::new()
        }
    }
}

/// Render a `<select>` for `widget` with the given choices.
pub(crate) fn render_select(
    widget: &Widget,
    name: &str,
    value: &Value,
    attributes: &ValueMap,
    choices: &ValueMap,
) -> String {
    let mut attributes = attributes.clone();
    let mut name = name.to_string();

    if widget.option("multiple").is_some_and(is_truthy) {
        attributes.insert("multiple".into(), "multiple".into());
        if !name.ends_with("[]") {
            name.push_str("[]");
        }
    }

    let selected = selected_values(value);
    let options = options_for_select(&selected, choices);

    let mut base = ValueMap::new();
    base.insert("name".into(), name.into());

    tracing::trace!("Rendering select with {} choices", choices.len());

    widget.render_content_tag(
        "select",
        &format!("\n{}\n", options.join("\n")),
        &merge(&base, &attributes),
    )
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn selected_values(value: &Value) -> HashSet<String> {
    match value {
        Value::Array(items) => items.iter().map(value_to_string).collect(),
        Value::Object(map) => map.values().map(value_to_string).collect(),
        single => std::iter::once(value_to_string(single)).collect(),
    }
}

// Option tags are rendered without the widget's default attributes.
fn options_for_select(selected: &HashSet<String>, choices: &ValueMap) -> Vec<String> {
    choices
        .iter()
        .map(|(key, label)| match label {
            Value::Object(group) => {
                let mut attrs = ValueMap::new();
                attrs.insert("label".into(), escape_str_once(key).into());
                format!(
                    "<optgroup{}>{}</optgroup>",
                    to_html(&attrs),
                    options_for_select(selected, group).join("\n")
                )
            }
            _ => {
                let mut attrs = ValueMap::new();
                attrs.insert("value".into(), escape_str_once(key).into());
                if selected.contains(key) {
                    attrs.insert("selected".into(), "selected".into());
                }
                format!("<option{}>{}</option>", to_html(&attrs), escape_once(label))
            }
        })
        .collect()
}
