/// Construction-time configuration of the networking logger
use crate::plugin::logger::log_field::LogField;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable holding a comma separated field list.
pub const FIELDS_ENV: &str = "NETWORKING_LOGGER_FIELDS";
/// Environment variable switching logging on or off.
pub const ENABLED_ENV: &str = "NETWORKING_LOGGER_ENABLED";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("unknown log field: {0}")]
    UnknownField(String),
    #[error("invalid value for {name}: {value}")]
    InvalidFlag { name: String, value: String },
}

/// Which fields to log, in which order, and whether to log at all.
///
/// Field order and duplicates are kept verbatim: every entry produces its own
/// slot on the line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggerConfiguration {
    fields: Vec<LogField>,
    logging_enabled: bool,
}

impl Default for LoggerConfiguration {
    fn default() -> Self {
        Self {
            fields: LogField::DEFAULT_ORDER.to_vec(),
            logging_enabled: cfg!(debug_assertions),
        }
    }
}

impl LoggerConfiguration {
    pub fn new(fields: impl Into<Vec<LogField>>) -> Self {
        Self {
            fields: fields.into(),
            ..Self::default()
        }
    }

    /// Overrides the build-mode default (on in debug builds, off in release).
    pub fn with_logging_enabled(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }

    pub fn fields(&self) -> &[LogField] {
        &self.fields
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.logging_enabled
    }

    /// Parses a list such as `"timestamp, url, http_method"`.
    ///
    /// Empty segments are skipped, so an empty string yields no fields.
    pub fn from_fields_str(fields: &str) -> Result<Self, ConfigurationError> {
        Ok(Self::new(parse_fields(fields)?))
    }

    /// Reads [`FIELDS_ENV`] and [`ENABLED_ENV`], keeping defaults for unset
    /// variables.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut configuration = match lookup(FIELDS_ENV) {
            Some(fields) => Self::from_fields_str(&fields)?,
            None => Self::default(),
        };

        if let Some(value) = lookup(ENABLED_ENV) {
            configuration.logging_enabled = parse_flag(ENABLED_ENV, &value)?;
        }

        log::debug!(
            "Logger configuration: fields={:?}, enabled={}",
            configuration.fields,
            configuration.logging_enabled
        );
        Ok(configuration)
    }
}

fn parse_fields(fields: &str) -> Result<Vec<LogField>, ConfigurationError> {
    fields
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            LogField::from_str(name).map_err(|_| ConfigurationError::UnknownField(name.to_string()))
        })
        .collect()
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigurationError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigurationError::InvalidFlag {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
