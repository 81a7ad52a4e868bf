//! Conversion Context: read-only settings shared by all stages
use serde::{Deserialize, Serialize};

/// Environment variable that toggles dual-notation output
pub const SHOW_SOURCE_ENV: &str = "MWDJ_SHOW_SOURCE";

/// Converter configuration, fixed when the converter is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Prefix the output with the original transcription and " | "
    #[serde(default = "default_show_source")]
    pub show_source: bool,
}

fn default_show_source() -> bool {
    true
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            show_source: default_show_source(),
        }
    }
}

impl ConverterConfig {
    /// Target notation only, without the original transcription
    pub fn target_only() -> Self {
        Self { show_source: false }
    }

    /// Read `MWDJ_SHOW_SOURCE`; unset or unrecognised values keep the default
    pub fn from_env() -> Self {
        let value = std::env::var(SHOW_SOURCE_ENV).ok();
        Self::from_env_value(value.as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let show_source = value
            .and_then(parse_flag)
            .unwrap_or_else(default_show_source);
        Self { show_source }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Context handed to every stage during one pipeline run
#[derive(Debug, Clone)]
pub struct ConversionContext {
    pub config: ConverterConfig,
    /// Trimmed original transcription
    pub source: String,
}

impl ConversionContext {
    pub fn new(config: ConverterConfig, source: impl Into<String>) -> Self {
        Self {
            config,
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shows_source() {
        assert!(ConverterConfig::default().show_source);
        assert!(!ConverterConfig::target_only().show_source);
    }

    #[test]
    fn test_env_values() {
        assert!(!ConverterConfig::from_env_value(Some("off")).show_source);
        assert!(!ConverterConfig::from_env_value(Some(" FALSE ")).show_source);
        assert!(ConverterConfig::from_env_value(Some("Yes")).show_source);
        assert!(ConverterConfig::from_env_value(Some("maybe")).show_source);
        assert!(ConverterConfig::from_env_value(None).show_source);
    }

    #[test]
    fn test_config_from_yaml() {
        let config: ConverterConfig = serde_yaml::from_str("show_source: false").unwrap();
        assert_eq!(config, ConverterConfig::target_only());

        let config: ConverterConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ConverterConfig::default());
    }
}
