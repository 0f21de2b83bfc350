//! Render settings and TOML form definitions.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WidgetError};
use crate::value::{Value, ValueMap};

fn default_charset() -> String {
    "UTF-8".to_string()
}

fn default_xhtml() -> bool {
    true
}

/// Settings read by every render call.
///
/// Passed explicitly to rendering instead of living in shared global state,
/// so two forms can be rendered side by side with different settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
    /// Charset reported to callers; Rust strings are always UTF-8 so
    /// escaping does not depend on it.
    #[serde(default = "default_charset")]
    pub charset: String,
    /// Emit self-closing `<tag />` elements instead of `<tag></tag>` pairs.
    #[serde(default = "default_xhtml")]
    pub xhtml: bool,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            charset: default_charset(),
            xhtml: default_xhtml(),
        }
    }
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the charset
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Toggle XHTML output
    pub fn with_xhtml(mut self, xhtml: bool) -> Self {
        self.xhtml = xhtml;
        self
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn is_xhtml(&self) -> bool {
        self.xhtml
    }

    pub fn validate(&self) -> Result<()> {
        if self.charset.trim().is_empty() {
            return Err(WidgetError::Config("charset must not be empty".into()));
        }
        Ok(())
    }
}

/// One field of a [`FormDefinition`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    /// Widget kind: `input`, `textarea`, `select`, `model_select` or
    /// `model_select_many`.
    pub widget: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub options: ValueMap,
    #[serde(default)]
    pub attributes: ValueMap,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// A whole form described in TOML.
///
/// ```toml
/// [render]
/// xhtml = false
///
/// [[fields]]
/// name = "title"
/// widget = "input"
/// value = "Hello"
/// attributes = { class = "wide" }
///
/// [[records.category]]
/// id = 1
/// name = "News"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormDefinition {
    #[serde(default)]
    pub render: RenderContext,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    /// Rows available to model-backed selects, keyed by table name.
    #[serde(default)]
    pub records: BTreeMap<String, Vec<ValueMap>>,
}

impl FormDefinition {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let definition: FormDefinition = toml::from_str(content)?;
        definition.render.validate()?;
        Ok(definition)
    }

    /// Load a form definition from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded form definition from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }
}
