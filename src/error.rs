//! Error types for widget construction and form definitions.

fn quote_list(names: &[String]) -> String {
    names.join("', '")
}

fn unsupported(names: &[String]) -> String {
    match names {
        [single] => format!("option: '{}'", single),
        _ => format!("options: '{}'", quote_list(names)),
    }
}

/// Errors raised while configuring widgets or loading form definitions.
///
/// Rendering itself never fails once a widget has been built; every variant
/// here surfaces at construction, at a setter, or while reading input.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("{widget} does not support the following {}.", unsupported(.options))]
    InvalidOption { widget: String, options: Vec<String> },

    #[error("{widget} requires the following options: '{}'.", quote_list(.options))]
    MissingRequiredOption { widget: String, options: Vec<String> },

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Invalid form definition: {0}")]
    Config(String),

    #[error("Failed to parse form definition: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WidgetError {
    pub(crate) fn invalid_option(widget: &str, options: Vec<String>) -> Self {
        Self::InvalidOption {
            widget: widget.to_string(),
            options,
        }
    }

    pub(crate) fn missing_required(widget: &str, options: Vec<String>) -> Self {
        Self::MissingRequiredOption {
            widget: widget.to_string(),
            options,
        }
    }
}

pub type Result<T> = std::result::Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_message_lists_every_key() {
        let err = WidgetError::invalid_option("Input", vec!["foo".into(), "bar".into()]);
        assert_eq!(
            err.to_string(),
            "Input does not support the following options: 'foo', 'bar'."
        );
    }

    #[test]
    fn test_invalid_option_message_for_single_key() {
        let err = WidgetError::invalid_option("Select", vec!["size".into()]);
        assert_eq!(
            err.to_string(),
            "Select does not support the following option: 'size'."
        );
    }

    #[test]
    fn test_missing_required_message() {
        let err = WidgetError::missing_required("Select", vec!["choices".into()]);
        assert_eq!(
            err.to_string(),
            "Select requires the following options: 'choices'."
        );
    }
}
