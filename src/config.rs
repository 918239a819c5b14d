//! Controller configuration

use serde::{Deserialize, Serialize};

use crate::error::{AccordionError, AccordionResult};

/// Class names and behavior switches for an accordion controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionConfig {
    /// Class identifying header elements
    #[serde(default = "default_header_class")]
    pub header_class: String,
    /// Marker class whose presence means the content is expanded
    #[serde(default = "default_expanded_class")]
    pub expanded_class: String,
    /// Collapse every other open panel before expanding one
    #[serde(default)]
    pub exclusive: bool,
    /// Emit a warning when a clicked header has no content after it
    #[serde(default = "default_log_missing_content")]
    pub log_missing_content: bool,
}

fn default_header_class() -> String { "accordion-header".to_string() }
fn default_expanded_class() -> String { "expanded".to_string() }
fn default_log_missing_content() -> bool { true }

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            header_class: default_header_class(),
            expanded_class: default_expanded_class(),
            exclusive: false,
            log_missing_content: default_log_missing_content(),
        }
    }
}

impl AccordionConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> AccordionResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_header_class(mut self, class: impl Into<String>) -> Self {
        self.header_class = class.into();
        self
    }

    pub fn with_expanded_class(mut self, class: impl Into<String>) -> Self {
        self.expanded_class = class.into();
        self
    }

    pub fn with_exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }

    pub fn with_log_missing_content(mut self, log: bool) -> Self {
        self.log_missing_content = log;
        self
    }

    /// Check that both class names are usable as a single CSS class token
    pub fn validate(&self) -> AccordionResult<()> {
        for class in [&self.header_class, &self.expanded_class] {
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                return Err(AccordionError::InvalidClassName(class.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_markup() {
        let config = AccordionConfig::default();
        assert_eq!(config.header_class, "accordion-header");
        assert_eq!(config.expanded_class, "expanded");
        assert!(!config.exclusive);
        assert!(config.log_missing_content);
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = AccordionConfig::from_json(r#"{"exclusive": true}"#).unwrap();
        assert!(config.exclusive);
        assert_eq!(config.header_class, "accordion-header");
        assert_eq!(config.expanded_class, "expanded");
    }

    #[test]
    fn test_rejects_whitespace_class() {
        let err = AccordionConfig::default()
            .with_expanded_class("is open")
            .validate()
            .unwrap_err();
        assert!(matches!(err, AccordionError::InvalidClassName(ref c) if c == "is open"));
    }

    #[test]
    fn test_rejects_empty_header_class() {
        let result = AccordionConfig::from_json(r#"{"header_class": ""}"#);
        assert!(matches!(result, Err(AccordionError::InvalidClassName(_))));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let result = AccordionConfig::from_json("{not json");
        assert!(matches!(result, Err(AccordionError::Serialization(_))));
    }
}
