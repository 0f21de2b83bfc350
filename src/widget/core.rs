//! The base widget: validated options, default attributes and tag rendering.

use crate::config::RenderContext;
use crate::error::{Result, WidgetError};
use crate::html;
use crate::value::{merge, Value, ValueMap};
use crate::widget::schema::{OptionProvider, OptionSchema};

/// Option and attribute state shared by every form control.
///
/// Options are semantic settings checked against what the widget kind
/// declared. Attributes are free-form HTML and are never checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    kind: String,
    options: ValueMap,
    required_options: Vec<String>,
    attributes: ValueMap,
}

impl Widget {
    /// Build a widget with no declared options.
    pub fn new(kind: impl Into<String>, options: ValueMap, attributes: ValueMap) -> Result<Self> {
        Self::configured(kind, &[], options, attributes)
    }

    /// Build a widget by running `providers` in order, then validating and
    /// merging the caller's `options` and `attributes` over what they set.
    pub fn configured(
        kind: impl Into<String>,
        providers: &[&dyn OptionProvider],
        options: ValueMap,
        attributes: ValueMap,
    ) -> Result<Self> {
        let mut widget = Self::blank(kind);
        for provider in providers {
            provider.configure(&mut widget)?;
        }

        let schema = widget.schema();

        let unknown = schema.unknown(&options);
        if !unknown.is_empty() {
            tracing::warn!("{} rejected unknown options: {:?}", widget.kind, unknown);
            return Err(WidgetError::invalid_option(&widget.kind, unknown));
        }

        let missing = schema.missing(&options);
        if !missing.is_empty() {
            tracing::warn!("{} is missing required options: {:?}", widget.kind, missing);
            return Err(WidgetError::missing_required(&widget.kind, missing));
        }

        widget.options = merge(&widget.options, &options);
        widget.attributes = merge(&widget.attributes, &attributes);

        tracing::debug!(
            "Configured {} with {} options and {} attributes",
            widget.kind,
            widget.options.len(),
            widget.attributes.len()
        );

        Ok(widget)
    }

    fn blank(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            options: ValueMap::new(),
            required_options: Vec::new(),
            attributes: ValueMap::new(),
        }
    }

    /// Name used in error messages
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn schema(&self) -> OptionSchema<'_> {
        OptionSchema::new(&self.options, &self.required_options)
    }

    pub fn add_required_option(&mut self, name: impl Into<String>) {
        self.required_options.push(name.into());
    }

    pub fn required_options(&self) -> &[String] {
        &self.required_options
    }

    /// Declare an option together with its default value.
    pub fn add_option(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.options.insert(name.into(), value.into());
    }

    /// Change the value of a declared or required option.
    pub fn set_option(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        if !self.schema().permits(name) {
            tracing::warn!("{} rejected unknown option '{}'", self.kind, name);
            return Err(WidgetError::invalid_option(&self.kind, vec![name.to_string()]));
        }
        self.options.insert(name.to_string(), value.into());
        Ok(())
    }

    /// Value of an option; `None` when unset or null.
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name).filter(|v| !v.is_null())
    }

    /// True when the option has an entry, even a null one.
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    pub fn options(&self) -> &ValueMap {
        &self.options
    }

    /// Replace every option at once. No validation is performed.
    pub fn set_options(&mut self, options: ValueMap) {
        self.options = options;
    }

    /// Value of a default attribute; `None` when unset or null.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name).filter(|v| !v.is_null())
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn attributes(&self) -> &ValueMap {
        &self.attributes
    }

    pub fn set_attributes(&mut self, attributes: ValueMap) {
        self.attributes = attributes;
    }

    /// Render an empty element, e.g. `<input type="text" />`.
    ///
    /// Returns an empty string for an empty tag name.
    pub fn render_tag(&self, ctx: &RenderContext, tag: &str, attributes: &ValueMap) -> String {
        if tag.is_empty() {
            return String::new();
        }

        let attrs = self.attributes_to_html(attributes);
        if ctx.is_xhtml() {
            format!("<{}{} />", tag, attrs)
        } else {
            format!("<{}{}></{}>", tag, attrs, tag)
        }
    }

    /// Render an element wrapping `content`. The content is inserted as is.
    pub fn render_content_tag(&self, tag: &str, content: &str, attributes: &ValueMap) -> String {
        if tag.is_empty() {
            return String::new();
        }

        format!(
            "<{}{}>{}</{}>",
            tag,
            self.attributes_to_html(attributes),
            content,
            tag
        )
    }

    /// Serialize the default attributes merged with `attributes`.
    pub fn attributes_to_html(&self, attributes: &ValueMap) -> String {
        html::merged_to_html(&self.attributes, attributes)
    }
}
