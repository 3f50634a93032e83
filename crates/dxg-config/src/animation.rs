//! Visibility animation configuration.

use dxg_core::ChildSelector;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_selector() -> String {
    String::from("section > div > *")
}

const fn default_threshold() -> f64 {
    0.1
}

fn default_marker_class() -> String {
    String::from("animate-in")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnimationConfig {
    /// Child-combinator selector for the observed elements.
    #[serde(default = "default_selector")]
    pub selector: String,

    /// Visible fraction at which an element counts as entered.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Class added to an element once it has entered the viewport.
    #[serde(default = "default_marker_class")]
    pub marker_class: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            selector: default_selector(),
            threshold: default_threshold(),
            marker_class: default_marker_class(),
        }
    }
}

impl AnimationConfig {
    /// Parse the configured selector.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the selector uses syntax
    /// beyond tag names, `*` and `>`.
    pub fn parsed_selector(&self) -> Result<ChildSelector, ConfigError> {
        self.selector
            .parse()
            .map_err(|e: dxg_core::CoreError| ConfigError::InvalidValue {
                field: "animation.selector".to_string(),
                reason: e.to_string(),
            })
    }

    /// Check threshold range, marker class and selector syntax.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidValue {
                field: "animation.threshold".to_string(),
                reason: format!("{} is outside [0, 1]", self.threshold),
            });
        }
        let class = &self.marker_class;
        if class.trim().is_empty() || class.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                field: "animation.marker_class".to_string(),
                reason: format!("'{class}' is not a single class name"),
            });
        }
        self.parsed_selector().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected_field(config: &AnimationConfig) -> String {
        match config.validate() {
            Err(ConfigError::InvalidValue { field, .. }) => field,
            other => panic!("expected invalid value, got {other:?}"),
        }
    }

    #[test]
    fn defaults_are_valid() {
        let config = AnimationConfig::default();
        assert_eq!(config.selector, "section > div > *");
        assert!((config.threshold - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.marker_class, "animate-in");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn threshold_out_of_range_rejected() {
        let config = AnimationConfig {
            threshold: 1.5,
            ..AnimationConfig::default()
        };
        assert_eq!(rejected_field(&config), "animation.threshold");
    }

    #[test]
    fn nan_threshold_rejected() {
        let config = AnimationConfig {
            threshold: f64::NAN,
            ..AnimationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn marker_class_with_space_rejected() {
        let config = AnimationConfig {
            marker_class: "animate in".to_string(),
            ..AnimationConfig::default()
        };
        assert_eq!(rejected_field(&config), "animation.marker_class");
    }

    #[test]
    fn unsupported_selector_rejected() {
        let config = AnimationConfig {
            selector: "section .card".to_string(),
            ..AnimationConfig::default()
        };
        assert_eq!(rejected_field(&config), "animation.selector");
    }
}
