//! Configuration from environment: reasoning block markers.

use std::env;

use crate::app::ENV_PREFIX;
use crate::markup::ReasoningExtractor;
use crate::markup::reasoning::{DEFAULT_CLOSE_MARKER, DEFAULT_OPEN_MARKER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub reasoning_open: String,
    pub reasoning_close: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    EmptyMarker(String),
    #[error("reasoning open and close markers must differ (both are {0:?})")]
    IdenticalMarkers(String),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reasoning_open: DEFAULT_OPEN_MARKER.to_string(),
            reasoning_close: DEFAULT_CLOSE_MARKER.to_string(),
        }
    }
}

impl Config {
    /// Extractor for the configured markers.
    pub fn extractor(&self) -> ReasoningExtractor {
        ReasoningExtractor::new(&self.reasoning_open, &self.reasoning_close)
    }
}

fn open_var() -> String {
    format!("{}_REASONING_OPEN", ENV_PREFIX)
}

fn close_var() -> String {
    format!("{}_REASONING_CLOSE", ENV_PREFIX)
}

/// Load configuration from environment. Unset variables fall back to `<think>` / `</think>`.
pub fn load() -> Result<Config, ConfigError> {
    load_from(|key| env::var(key).ok())
}

/// Same as [`load`], reading variables through `lookup`.
pub fn load_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = Config::default();
    let open_key = open_var();
    let close_key = close_var();

    let reasoning_open = lookup(open_key.as_str()).unwrap_or(defaults.reasoning_open);
    let reasoning_close = lookup(close_key.as_str()).unwrap_or(defaults.reasoning_close);

    if reasoning_open.is_empty() {
        return Err(ConfigError::EmptyMarker(open_key));
    }
    if reasoning_close.is_empty() {
        return Err(ConfigError::EmptyMarker(close_key));
    }
    if reasoning_open == reasoning_close {
        return Err(ConfigError::IdenticalMarkers(reasoning_open));
    }

    Ok(Config {
        reasoning_open,
        reasoning_close,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn load_defaults_to_think_markers() {
        let config = load_from(lookup_in(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.reasoning_open, "<think>");
        assert_eq!(config.reasoning_close, "</think>");
    }

    #[test]
    fn load_custom_markers() {
        let config = load_from(lookup_in(&[
            ("TEXT_MARKUP_REASONING_OPEN", "<reasoning>"),
            ("TEXT_MARKUP_REASONING_CLOSE", "</reasoning>"),
        ]))
        .unwrap();
        assert_eq!(config.reasoning_open, "<reasoning>");
        assert_eq!(config.reasoning_close, "</reasoning>");

        let result = config.extractor().extract("<reasoning>plan</reasoning>answer");
        assert_eq!(result.reasoning.as_deref(), Some("plan"));
        assert_eq!(result.remaining, "answer");
    }

    #[test]
    fn load_rejects_empty_marker() {
        let err = load_from(lookup_in(&[("TEXT_MARKUP_REASONING_CLOSE", "")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::EmptyMarker("TEXT_MARKUP_REASONING_CLOSE".to_string())
        );
        assert!(err.to_string().contains("TEXT_MARKUP_REASONING_CLOSE"));
    }

    #[test]
    fn load_rejects_identical_markers() {
        let err = load_from(lookup_in(&[
            ("TEXT_MARKUP_REASONING_OPEN", "###"),
            ("TEXT_MARKUP_REASONING_CLOSE", "###"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::IdenticalMarkers(ref m) if m == "###"));
    }
}
