use crate::error::{ChatError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/chat";
const CONFIG_FILE: &str = "chatbox.json";

/// Construction-time options for the chat widget. Passed into the
/// controller explicitly rather than read from global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Full URL of the backend chat endpoint.
    pub endpoint: String,
    /// Whether to render a clickable Send button next to the input line.
    pub enable_send_button: bool,
    /// Language selector options; the first entry is the initial selection.
    pub languages: Vec<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            enable_send_button: false,
            languages: vec!["English".to_string(), "Hindi".to_string()],
        }
    }
}

impl WidgetConfig {
    /// Loads config from an explicit path, else from `chatbox.json` in the
    /// working directory if present, else falls back to defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config = match path {
            Some(p) => Self::from_file(Path::new(p))?,
            None if Path::new(CONFIG_FILE).exists() => Self::from_file(Path::new(CONFIG_FILE))?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(ChatError::Config("endpoint must not be empty".to_string()));
        }
        if self.languages.is_empty() {
            return Err(ChatError::Config(
                "at least one language option is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_is_valid() {
        let config = WidgetConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(!config.enable_send_button);
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        let config = WidgetConfig {
            endpoint: "  ".to_string(),
            ..WidgetConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_language_list_is_rejected() {
        let config = WidgetConfig {
            languages: Vec::new(),
            ..WidgetConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn loads_from_file_with_partial_fields() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"endpoint": "http://example.test/api/chat", "enable_send_button": true}}"#
        )
        .unwrap();

        let config = WidgetConfig::load(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(config.endpoint, "http://example.test/api/chat");
        assert!(config.enable_send_button);
        // Unspecified fields keep their defaults.
        assert_eq!(config.languages, vec!["English", "Hindi"]);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(WidgetConfig::load(Some(file.path().to_str().unwrap())).is_err());
    }
}
