//! Resolved logging settings.

use std::str::FromStr;

use crate::domain::models::LoggingConfig;

/// Console output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Human-readable lines
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(format!("Invalid log format: {other}")),
        }
    }
}

/// When the log file rolls over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationPolicy {
    /// New file each day
    #[default]
    Daily,
    /// New file each hour
    Hourly,
    /// Single file
    Never,
}

impl FromStr for RotationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "hourly" => Ok(Self::Hourly),
            "never" => Ok(Self::Never),
            other => Err(format!("Invalid log rotation: {other}")),
        }
    }
}

/// Logging settings with the string fields of `LoggingConfig` resolved.
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Default level when `RUST_LOG` is unset
    pub level: String,
    /// Console format
    pub format: LogFormat,
    /// Directory for JSON log files; none disables file output
    pub log_dir: Option<std::path::PathBuf>,
    /// File rotation
    pub rotation: RotationPolicy,
}

impl TryFrom<&LoggingConfig> for LogSettings {
    type Error = String;

    fn try_from(config: &LoggingConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            level: config.level.clone(),
            format: config.format.parse()?,
            log_dir: config.log_dir.clone(),
            rotation: config.rotation.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format_and_rotation() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("pretty".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert!("xml".parse::<LogFormat>().is_err());

        assert_eq!("hourly".parse::<RotationPolicy>(), Ok(RotationPolicy::Hourly));
        assert!("weekly".parse::<RotationPolicy>().is_err());
    }

    #[test]
    fn test_settings_from_default_config() {
        let settings = LogSettings::try_from(&LoggingConfig::default()).unwrap();
        assert_eq!(settings.format, LogFormat::Pretty);
        assert_eq!(settings.rotation, RotationPolicy::Daily);
        assert!(settings.log_dir.is_none());
    }
}
