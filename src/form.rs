//! Build widgets from a [`FormDefinition`] and render the whole form.

use std::sync::Arc;

use crate::config::{FieldDefinition, FormDefinition};
use crate::error::{Result, WidgetError};
use crate::records::{InMemoryRecords, RecordSource};
use crate::value::ValueMap;
use crate::widget::{FormWidget, Input, ModelSelect, ModelSelectMany, Select, Textarea};

/// Widget kinds a field definition may name.
pub const WIDGET_KINDS: &[&str] = &[
    "input",
    "textarea",
    "select",
    "model_select",
    "model_select_many",
];

/// Create the widget described by `field`.
pub fn build_widget(
    field: &FieldDefinition,
    source: Arc<dyn RecordSource>,
) -> Result<Box<dyn FormWidget>> {
    let options = field.options.clone();
    let attributes = field.attributes.clone();

    let widget: Box<dyn FormWidget> = match field.widget.as_str() {
        "input" => Box::new(Input::new(options, attributes)?),
        "textarea" => Box::new(Textarea::new(options, attributes)?),
        "select" => Box::new(Select::new(options, attributes)?),
        "model_select" => Box::new(ModelSelect::new(source, options, attributes)?),
        "model_select_many" => Box::new(ModelSelectMany::new(source, options, attributes)?),
        other => {
            return Err(WidgetError::Config(format!(
                "field '{}' uses unknown widget '{}' (expected one of: {})",
                field.name,
                other,
                WIDGET_KINDS.join(", ")
            )))
        }
    };

    Ok(widget)
}

impl FormDefinition {
    /// Record source built from the `[records]` tables
    pub fn record_source(&self) -> InMemoryRecords {
        InMemoryRecords::from(self.records.clone())
    }

    /// Render every field in order, one per line.
    pub fn render(&self) -> Result<String> {
        self.render_with(Arc::new(self.record_source()))
    }

    /// Render using rows from `source` instead of the `[records]` tables.
    pub fn render_with(&self, source: Arc<dyn RecordSource>) -> Result<String> {
        self.render.validate()?;

        // Field attributes become widget defaults, so nothing is passed per render.
        let mut rendered = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let widget = build_widget(field, Arc::clone(&source))?;
            rendered.push(widget.render(
                &self.render,
                &field.name,
                &field.value,
                &ValueMap::new(),
                &field.errors,
            ));
        }

        tracing::debug!("Rendered {} fields", rendered.len());
        Ok(rendered.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(toml_src: &str) -> FieldDefinition {
        toml::from_str(toml_src).unwrap()
    }

    #[test]
    fn test_build_each_kind() {
        let source: Arc<dyn RecordSource> =
            Arc::new(InMemoryRecords::new().with_table("category", vec![]));

        for (kind, options) in [
            ("input", "{}"),
            ("textarea", "{}"),
            ("select", "{ choices = [\"a\"] }"),
            ("model_select", "{ model = \"category\" }"),
            ("model_select_many", "{ model = \"category\" }"),
        ] {
            let def = field(&format!("name = \"f\"\nwidget = \"{kind}\"\noptions = {options}\n"));
            assert!(build_widget(&def, Arc::clone(&source)).is_ok(), "kind: {kind}");
        }
    }

    #[test]
    fn test_unknown_widget_kind() {
        let def = field("name = \"f\"\nwidget = \"slider\"\n");
        let err = build_widget(&def, Arc::new(InMemoryRecords::new())).err().unwrap();

        assert!(matches!(err, WidgetError::Config(ref msg) if msg.contains("slider")));
    }

    #[test]
    fn test_render_form() {
        let definition = FormDefinition::from_toml_str(
            r#"
            [render]
            xhtml = false

            [[fields]]
            name = "title"
            widget = "input"
            value = "Hello"

            [[fields]]
            name = "category_id"
            widget = "model_select"
            value = 1
            options = { model = "category", add_empty = true }

            [[records.category]]
            id = 1
            name = "News"
            "#,
        )
        .unwrap();

        assert_eq!(
            definition.render().unwrap(),
            "<input type=\"text\" name=\"title\" value=\"Hello\"></input>\n\
             <select name=\"category_id\">\n\
             <option></option>\n\
             <option value=\"1\" selected=\"selected\">News</option>\n\
             </select>"
        );
    }

    #[test]
    fn test_render_form_propagates_widget_errors() {
        let definition = FormDefinition::from_toml_str(
            r#"
            [[fields]]
            name = "tags"
            widget = "select"
            "#,
        )
        .unwrap();

        assert!(matches!(
            definition.render(),
            Err(WidgetError::MissingRequiredOption { .. })
        ));
    }
}
