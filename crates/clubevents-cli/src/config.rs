//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/clubevents/config.toml` by default. Every field is optional;
//! command-line flags override whatever the file says.

use std::path::{Path, PathBuf};

use clubevents_core::export::DEFAULT_PRODID;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Configuration for the clubevents client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Debug mode.
    pub debug: bool,

    /// Content file holding `events` and `gallery` entries.
    pub events_file: Option<PathBuf>,

    /// Listing settings.
    #[serde(default)]
    pub display: DisplaySettings,

    /// RSVP settings.
    #[serde(default)]
    pub rsvp: RsvpSettings,

    /// Calendar export settings.
    #[serde(default)]
    pub export: ExportSettings,
}

/// Listing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// How many events `next` shows when no count is given.
    pub next_count: usize,

    /// Text to show when a query finds nothing.
    pub no_events_text: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            next_count: 3,
            no_events_text: "No events scheduled.".to_string(),
        }
    }
}

/// RSVP settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RsvpSettings {
    /// Address RSVP emails are sent to.
    pub contact_email: String,
}

impl Default for RsvpSettings {
    fn default() -> Self {
        Self {
            contact_email: "info@example.org".to_string(),
        }
    }
}

/// Calendar export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// `PRODID` written into exported `.ics` documents.
    pub prodid: String,

    /// Directory `.ics` files are written to when `--output` is not given.
    pub output_dir: Option<PathBuf>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            prodid: DEFAULT_PRODID.to_string(),
            output_dir: None,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default path, or defaults if it is absent.
    pub fn load() -> ClientResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> ClientResult<Self> {
        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            ClientError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Checks values that deserialize fine but cannot work.
    pub fn validate(&self) -> ClientResult<()> {
        let email = self.rsvp.contact_email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ClientError::Config(format!(
                "rsvp.contact_email {:?} is not an email address",
                self.rsvp.contact_email
            )));
        }
        if self.export.prodid.trim().is_empty() {
            return Err(ClientError::Config("export.prodid must not be empty".into()));
        }
        if self.display.next_count == 0 {
            return Err(ClientError::Config(
                "display.next_count must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// The content file to load: the configured one or the default.
    pub fn events_path(&self) -> PathBuf {
        self.events_file
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join("events.toml"))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("clubevents")
    }

    /// Returns the default data directory path.
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("clubevents")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert!(!config.debug);
        assert_eq!(config.display.next_count, 3);
        assert_eq!(config.rsvp.contact_email, "info@example.org");
        assert_eq!(config.export.prodid, DEFAULT_PRODID);
        assert!(config.validate().is_ok());
        assert!(config.events_path().ends_with("clubevents/events.toml"));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config(
            r#"
events_file = "/srv/club/events.toml"

[rsvp]
contact_email = "rsvp@club.example"
"#,
        );
        let config = ClientConfig::load_from(file.path()).unwrap();
        assert_eq!(config.events_path(), PathBuf::from("/srv/club/events.toml"));
        assert_eq!(config.rsvp.contact_email, "rsvp@club.example");
        assert_eq!(config.display.next_count, 3);
        assert_eq!(config.export.prodid, DEFAULT_PRODID);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let file = write_config("events_file = [");
        let err = ClientConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = ClientConfig::default();
        config.rsvp.contact_email = "not-an-address".into();
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.export.prodid = " ".into();
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.display.next_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn dump_round_trips() {
        let config = ClientConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: ClientConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.display.next_count, config.display.next_count);
        assert_eq!(parsed.rsvp.contact_email, config.rsvp.contact_email);
    }
}
