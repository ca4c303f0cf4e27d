//! Layered Rubric configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Default comment keyword the marker detector anchors on.
pub const DEFAULT_MARKER_KEYWORD: &str = "MARKER";

/// Default distinct-class threshold for the custom-classes check.
pub const DEFAULT_MIN_CUSTOM_CLASSES: usize = 3;

/// Report format names the engine ships with.
pub const KNOWN_FORMATS: &[&str] = &["text", "json"];

/// Marker detection settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MarkerConfig {
    /// Comment keyword, e.g. `MARKER` in `<!-- MARKER: AB12 -->`.
    /// Must be alphanumeric.
    pub keyword: Option<String>,
}

impl MarkerConfig {
    pub fn effective_keyword(&self) -> &str {
        self.keyword.as_deref().unwrap_or(DEFAULT_MARKER_KEYWORD)
    }
}

/// Evaluation settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Distinct class tokens required by the custom-classes check.
    pub min_custom_classes: Option<usize>,
}

impl EvaluationConfig {
    pub fn effective_min_custom_classes(&self) -> usize {
        self.min_custom_classes.unwrap_or(DEFAULT_MIN_CUSTOM_CLASSES)
    }
}

/// Report output settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format name, one of [`KNOWN_FORMATS`].
    pub format: Option<String>,
}

impl ReportConfig {
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or("text")
    }
}

/// Top-level configuration aggregating all sections.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RUBRIC_*`)
/// 2. Project config (`rubric.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RubricConfig {
    pub marker: MarkerConfig,
    pub evaluation: EvaluationConfig,
    pub report: ReportConfig,
}

impl RubricConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("rubric.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &RubricConfig) -> Result<(), ConfigError> {
        if let Some(ref keyword) = config.marker.keyword {
            if keyword.is_empty() || !keyword.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ConfigError::ValidationFailed {
                    field: "marker.keyword".to_string(),
                    message: "must be non-empty and alphanumeric".to_string(),
                });
            }
        }
        if config.evaluation.min_custom_classes == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "evaluation.min_custom_classes".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(ref format) = config.report.format {
            if !KNOWN_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "report.format".to_string(),
                    message: format!("must be one of: {}", KNOWN_FORMATS.join(", ")),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut RubricConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: RubricConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut RubricConfig, other: &RubricConfig) {
        if other.marker.keyword.is_some() {
            base.marker.keyword = other.marker.keyword.clone();
        }
        if other.evaluation.min_custom_classes.is_some() {
            base.evaluation.min_custom_classes = other.evaluation.min_custom_classes;
        }
        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `RUBRIC_MARKER_KEYWORD`, `RUBRIC_REPORT_FORMAT`, etc.
    fn apply_env_overrides(config: &mut RubricConfig) {
        if let Ok(val) = std::env::var("RUBRIC_MARKER_KEYWORD") {
            config.marker.keyword = Some(val);
        }
        if let Ok(val) = std::env::var("RUBRIC_EVALUATION_MIN_CUSTOM_CLASSES") {
            if let Ok(v) = val.parse::<usize>() {
                config.evaluation.min_custom_classes = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RUBRIC_REPORT_FORMAT") {
            config.report.format = Some(val);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
