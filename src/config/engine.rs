//! Engine configuration

use serde::Deserialize;

use crate::domain::keywords::{KeywordDetector, MatchMode, DEFAULT_MAX_KEYWORD_CHARS};

use super::error::ValidationError;

/// Smallest accepted keyword input cap.
pub const MIN_KEYWORD_CHARS: usize = 1;

/// Largest accepted keyword input cap.
pub const MAX_KEYWORD_CHARS: usize = 2000;

/// Spec engine configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Characters of keyword input kept after sanitizing
    #[serde(default = "default_max_keyword_chars")]
    pub max_keyword_chars: usize,

    /// How keyword triggers are matched against input
    #[serde(default)]
    pub keyword_matching: MatchMode,
}

fn default_max_keyword_chars() -> usize {
    DEFAULT_MAX_KEYWORD_CHARS
}

impl EngineConfig {
    /// Builds a keyword detector with these settings
    pub fn keyword_detector(&self) -> KeywordDetector {
        KeywordDetector::new(self.max_keyword_chars, self.keyword_matching)
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_KEYWORD_CHARS..=MAX_KEYWORD_CHARS).contains(&self.max_keyword_chars) {
            return Err(ValidationError::InvalidKeywordLimit {
                min: MIN_KEYWORD_CHARS,
                max: MAX_KEYWORD_CHARS,
                actual: self.max_keyword_chars,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_keyword_chars: default_max_keyword_chars(),
            keyword_matching: MatchMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_keyword_chars, 500);
        assert_eq!(config.keyword_matching, MatchMode::Substring);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let config = EngineConfig {
            max_keyword_chars: 0,
            ..EngineConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidKeywordLimit {
                min: 1,
                max: 2000,
                actual: 0
            })
        );
    }

    #[test]
    fn test_limit_above_maximum_is_rejected() {
        let config = EngineConfig {
            max_keyword_chars: 2001,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_detector_uses_configured_mode() {
        let config = EngineConfig {
            max_keyword_chars: 40,
            keyword_matching: MatchMode::WordBoundary,
        };
        assert_eq!(config.keyword_detector().mode(), MatchMode::WordBoundary);
    }

    #[test]
    fn test_engine_deserialization() {
        let json = r#"{"max_keyword_chars": 120, "keyword_matching": "word_boundary"}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_keyword_chars, 120);
        assert_eq!(config.keyword_matching, MatchMode::WordBoundary);
    }
}
