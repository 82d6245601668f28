//! Global paws configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ATTACHMENT_NAME, DEFAULT_DATE_FORMAT, DEFAULT_LOG_LEVEL, DEFAULT_MAILBOX_DIR,
    DEFAULT_TIME_FORMAT,
};
use crate::datetime::DisplayFormat;
use crate::error::{PawsError, PawsResult};

fn default_mailbox_dir() -> PathBuf {
    PathBuf::from(DEFAULT_MAILBOX_DIR)
}

fn default_attachment_name() -> String {
    DEFAULT_ATTACHMENT_NAME.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Global configuration at ~/.config/paws/config.toml
///
/// Every key is optional, and `PAWS_<KEY>` environment variables take
/// precedence over the file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PawsConfig {
    /// Directory holding stored messages (`.eml` files)
    #[serde(default = "default_mailbox_dir")]
    pub mailbox_dir: PathBuf,

    /// Filename of the calendar attachment to look for
    #[serde(default = "default_attachment_name")]
    pub attachment_name: String,

    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Tracing filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for PawsConfig {
    fn default() -> Self {
        PawsConfig {
            mailbox_dir: default_mailbox_dir(),
            attachment_name: default_attachment_name(),
            date_format: default_date_format(),
            time_format: default_time_format(),
            log_level: default_log_level(),
        }
    }
}

impl PawsConfig {
    pub fn config_path() -> PawsResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PawsError::Config("Could not determine config directory".into()))?
            .join("paws");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file is not an error.
    pub fn load() -> PawsResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> PawsResult<Self> {
        let config: PawsConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("PAWS"))
            .build()
            .map_err(|e| PawsError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PawsError::Config(e.to_string()))?;

        config.display_format()?;
        Ok(config)
    }

    /// The mailbox directory with `~` expanded.
    pub fn mailbox_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.mailbox_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn display_format(&self) -> PawsResult<DisplayFormat> {
        DisplayFormat::new(self.date_format.as_str(), self.time_format.as_str())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PawsResult<()> {
        let contents = format!(
            "\
# paws configuration

# Directory of stored messages (.eml files) to scan:
# mailbox_dir = \"{DEFAULT_MAILBOX_DIR}\"

# Attachment filename that carries the invitation:
# attachment_name = \"{DEFAULT_ATTACHMENT_NAME}\"

# Display formats (strftime):
# date_format = \"{DEFAULT_DATE_FORMAT}\"
# time_format = \"{DEFAULT_TIME_FORMAT}\"

# Log filter when RUST_LOG is unset:
# log_level = \"{DEFAULT_LOG_LEVEL}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PawsConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.attachment_name, "invite.ics");
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_default_config_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paws").join("config.toml");
        PawsConfig::create_default_config(&path).unwrap();

        let config = PawsConfig::load_from(&path).unwrap();
        assert_eq!(config.mailbox_dir, PathBuf::from(DEFAULT_MAILBOX_DIR));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "mailbox_dir = \"/var/mail/alice\"\nattachment_name = \"meeting.ics\"\ntime_format = \"%H:%M\"\n",
        )
        .unwrap();

        let config = PawsConfig::load_from(&path).unwrap();
        assert_eq!(config.mailbox_path(), PathBuf::from("/var/mail/alice"));
        assert_eq!(config.attachment_name, "meeting.ics");
        assert_eq!(config.display_format().unwrap().time(), "%H:%M");
    }

    #[test]
    fn test_invalid_format_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "date_format = \"%Q\"\n").unwrap();

        let err = PawsConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, PawsError::Config(_)));
    }
}
