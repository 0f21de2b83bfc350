//! Option schema checks and the configuration extension point.

use crate::error::Result;
use crate::value::ValueMap;
use crate::widget::Widget;

/// Declares the default options, required options and default attributes a
/// widget kind contributes before caller values are merged in.
///
/// Providers run in order on a blank [`Widget`], so a later provider sees
/// (and may override) what earlier ones declared. Any function of shape
/// `fn(&mut Widget) -> Result<()>` is a provider.
pub trait OptionProvider: Send + Sync {
    fn configure(&self, widget: &mut Widget) -> Result<()>;
}

impl<F> OptionProvider for F
where
    F: Fn(&mut Widget) -> Result<()> + Send + Sync,
{
    fn configure(&self, widget: &mut Widget) -> Result<()> {
        self(widget)
    }
}

/// The set of option names a widget accepts and the subset it requires.
#[derive(Debug, Clone, Copy)]
pub struct OptionSchema<'a> {
    known: &'a ValueMap,
    required: &'a [String],
}

impl<'a> OptionSchema<'a> {
    pub fn new(known: &'a ValueMap, required: &'a [String]) -> Self {
        Self { known, required }
    }

    /// True when `name` is a declared or required option.
    pub fn permits(&self, name: &str) -> bool {
        self.known.contains_key(name) || self.required.iter().any(|r| r == name)
    }

    /// Keys of `supplied` the schema does not know, in supplied order.
    pub fn unknown(&self, supplied: &ValueMap) -> Vec<String> {
        supplied
            .keys()
            .filter(|key| !self.permits(key))
            .cloned()
            .collect()
    }

    /// Required names neither declared with a default nor present in
    /// `supplied`. Each name is reported once.
    pub fn missing(&self, supplied: &ValueMap) -> Vec<String> {
        let mut missing: Vec<String> = Vec::new();
        for name in self.required {
            if self.known.contains_key(name) || supplied.contains_key(name) {
                continue;
            }
            if !missing.contains(name) {
                missing.push(name.clone());
            }
        }
        missing
    }
}
