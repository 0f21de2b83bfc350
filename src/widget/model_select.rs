//! Selects whose choices are rows of a model table.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::config::RenderContext;
use crate::error::{Result, WidgetError};
use crate::records::{Record, RecordSource};
use crate::value::{value_to_string, Value, ValueMap};
use crate::widget::select::render_select;
use crate::widget::{FormWidget, OptionProvider, Widget};

const DEFAULT_LABEL_COLUMN: &str = "name";
const DEFAULT_KEY_COLUMN: &str = "id";

fn configure_model_select(widget: &mut Widget) -> Result<()> {
    widget.add_required_option("model");
    widget.add_option("add_empty", false);
    widget.add_option("label_column", DEFAULT_LABEL_COLUMN);
    widget.add_option("key_column", Value::Null);
    widget.add_option("order_by", Value::Null);
    widget.add_option("multiple", false);
    Ok(())
}

fn force_multiple(widget: &mut Widget) -> Result<()> {
    widget.set_option("multiple", true)
}

/// A select listing the rows of the `model` table.
///
/// Options:
/// * `model` (required) - table to read rows from
/// * `add_empty` - `true` prepends a blank choice, a string prepends a
///   blank choice with that label
/// * `label_column` - column shown to the user (`name`)
/// * `key_column` - column used as the option value; defaults to the
///   table's primary key, or `id` when the source has no metadata
/// * `order_by` - `"column"` or `["column", "asc" | "desc"]`
/// * `multiple` - allow several values
pub struct ModelSelect {
    widget: Widget,
    source: Arc<dyn RecordSource>,
}

impl fmt::Debug for ModelSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSelect")
            .field("widget", &self.widget)
            .finish_non_exhaustive()
    }
}

impl ModelSelect {
    pub fn new(
        source: Arc<dyn RecordSource>,
        options: ValueMap,
        attributes: ValueMap,
    ) -> Result<Self> {
        Self::with_providers("ModelSelect", &[&configure_model_select], source, options, attributes)
    }

    fn with_providers(
        kind: &str,
        providers: &[&dyn OptionProvider],
        source: Arc<dyn RecordSource>,
        options: ValueMap,
        attributes: ValueMap,
    ) -> Result<Self> {
        let widget = Widget::configured(kind, providers, options, attributes)?;

        let model = widget.option("model").map(value_to_string).unwrap_or_default();
        if !source.has_table(&model) {
            tracing::warn!("{} refers to unknown table '{}'", kind, model);
            return Err(WidgetError::UnknownTable(model));
        }

        Ok(Self { widget, source })
    }

    fn model(&self) -> String {
        self.widget.option("model").map(value_to_string).unwrap_or_default()
    }

    /// Column whose values become option values, lower-cased to match
    /// record keys
    pub fn key_column(&self) -> String {
        if let Some(column) = self.widget.option("key_column") {
            return value_to_string(column).to_lowercase();
        }

        self.source
            .table_map(&self.model())
            .and_then(|table| table.primary_keys().next())
            .map(|column| column.column_name.to_lowercase())
            .unwrap_or_else(|| DEFAULT_KEY_COLUMN.to_string())
    }

    fn label_column(&self) -> String {
        self.widget
            .option("label_column")
            .map(|column| value_to_string(column).to_lowercase())
            .unwrap_or_else(|| DEFAULT_LABEL_COLUMN.to_string())
    }

    /// The value-to-label map rendered by the select.
    pub fn choices(&self) -> ValueMap {
        let mut choices = ValueMap::new();

        match self.widget.option("add_empty") {
            None | Some(Value::Bool(false)) => {}
            Some(Value::Bool(true)) => {
                choices.insert(String::new(), Value::String(String::new()));
            }
            Some(label) => {
                choices.insert(String::new(), label.clone());
            }
        }

        let model = self.model();
        let Some(mut records) = self.source.records(&model) else {
            tracing::warn!("No rows available for table '{}'", model);
            return choices;
        };

        if let Some((column, descending)) = self.order_by() {
            sort_records(&mut records, &column, descending);
        }

        let key_column = self.key_column();
        let label_column = self.label_column();
        for record in &records {
            let key = record.get(&key_column).map(value_to_string).unwrap_or_default();
            let label = record.get(&label_column).cloned().unwrap_or(Value::Null);
            choices.insert(key, label);
        }

        choices
    }

    fn order_by(&self) -> Option<(String, bool)> {
        match self.widget.option("order_by")? {
            Value::String(column) => Some((column.clone(), false)),
            Value::Array(parts) if !parts.is_empty() => {
                let column = value_to_string(&parts[0]);
                let descending = parts
                    .get(1)
                    .map(|dir| value_to_string(dir).eq_ignore_ascii_case("desc"))
                    .unwrap_or(false);
                Some((column, descending))
            }
            other => {
                tracing::warn!("Ignoring malformed order_by: {}", other);
                None
            }
        }
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        (a, b) => {
            let a = a.map(value_to_string).unwrap_or_default();
            let b = b.map(value_to_string).unwrap_or_default();
            a.cmp(&b)
        }
    }
}

fn sort_records(records: &mut [Record], column: &str, descending: bool) {
    let column = column.to_lowercase();
    records.sort_by(|a, b| {
        let ordering = compare_values(a.get(&column), b.get(&column));
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

impl FormWidget for ModelSelect {
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
        render_select(&self.widget, name, value, attributes, &self.choices())
    }
}

/// A [`ModelSelect`] that accepts several values.
///
/// `multiple` is forced on during configuration, so only an explicit
/// `multiple` option from the caller turns it off again.
#[derive(Debug)]
pub struct ModelSelectMany {
    inner: ModelSelect,
}

impl ModelSelectMany {
    pub fn new(
        source: Arc<dyn RecordSource>,
        options: ValueMap,
        attributes: ValueMap,
    ) -> Result<Self> {
        let inner = ModelSelect::with_providers(
            "ModelSelectMany",
            &[&configure_model_select, &force_multiple],
            source,
            options,
            attributes,
        )?;
        Ok(Self { inner })
    }

    pub fn choices(&self) -> ValueMap {
        self.inner.choices()
    }
}

impl FormWidget for ModelSelectMany {
    fn widget(&self) -> &Widget {
        self.inner.widget()
    }

    fn widget_mut(&mut self) -> &mut Widget {
        self.inner.widget_mut()
    }

    fn render(
        &self,
        ctx: &RenderContext,
        name: &str,
        value: &Value,
        attributes: &ValueMap,
        errors: &[String],
    ) -> String {
        self.inner.render(ctx, name, value, attributes, errors)
    }
}
