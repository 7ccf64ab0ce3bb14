//! TOML configuration for the embedding host.
//!
//! Softboard is an embedded component, so it never hunts for a config file
//! itself: the host hands [`HostConfig::load`] a path of its choosing. An
//! absent file yields the defaults, and every field is individually
//! defaulted so older config files keep working as fields are added.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use softboard_core::DispatchPolicy;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level host configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostConfig {
    #[serde(default)]
    pub session: SessionSection,
}

/// Session behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionSection {
    /// `tracing` log level used by the demo binary when `RUST_LOG` is
    /// unset: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Reset caps to off when the active screen changes.
    #[serde(default)]
    pub reset_caps_on_screen_switch: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            reset_caps_on_screen_switch: false,
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            session: SessionSection::default(),
        }
    }
}

impl HostConfig {
    /// Loads the configuration from `path`, returning defaults if the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] for file-system errors other than "not
    /// found" and [`ConfigError::Parse`] if the TOML is malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Maps the configured session behavior onto the core dispatch policy.
    pub fn dispatch_policy(&self) -> DispatchPolicy {
        DispatchPolicy {
            reset_caps_on_screen_switch: self.session.reset_caps_on_screen_switch,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn test_default_log_level_is_info() {
        let cfg = HostConfig::default();
        assert_eq!(cfg.session.log_level, "info");
    }

    #[test]
    fn test_default_preserves_caps_across_screen_switches() {
        let cfg = HostConfig::default();
        assert!(!cfg.session.reset_caps_on_screen_switch);
        assert!(!cfg.dispatch_policy().reset_caps_on_screen_switch);
    }

    // ── TOML parsing ──────────────────────────────────────────────────────────

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let cfg: HostConfig = toml::from_str("").expect("deserialize empty");
        assert_eq!(cfg, HostConfig::default());
    }

    #[test]
    fn test_deserialize_partial_session_keeps_other_defaults() {
        let toml_str = r#"
[session]
reset_caps_on_screen_switch = true
"#;
        let cfg: HostConfig = toml::from_str(toml_str).expect("deserialize partial");
        assert!(cfg.session.reset_caps_on_screen_switch);
        assert_eq!(cfg.session.log_level, "info");
    }

    #[test]
    fn test_deserialize_invalid_toml_is_a_parse_error() {
        let result: Result<HostConfig, toml::de::Error> = toml::from_str("[[[ not valid toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut cfg = HostConfig::default();
        cfg.session.log_level = "debug".to_string();
        cfg.session.reset_caps_on_screen_switch = true;

        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: HostConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(cfg, restored);
    }

    // ── load from disk ────────────────────────────────────────────────────────

    #[test]
    fn test_load_returns_defaults_when_file_absent() {
        let path = Path::new("/nonexistent/path/softboard.toml");
        let cfg = HostConfig::load(path).expect("absent file yields defaults");
        assert_eq!(cfg, HostConfig::default());
    }

    #[test]
    fn test_load_reads_file_from_disk() {
        let dir = std::env::temp_dir().join(format!("softboard_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("softboard.toml");
        std::fs::write(&path, "[session]\nlog_level = \"trace\"\n").unwrap();

        let cfg = HostConfig::load(&path).unwrap();
        assert_eq!(cfg.session.log_level, "trace");

        std::fs::remove_dir_all(&dir).ok();
    }

    // ── Policy mapping ────────────────────────────────────────────────────────

    #[test]
    fn test_dispatch_policy_mapping_carries_the_reset_flag() {
        let toml_str = r#"
[session]
reset_caps_on_screen_switch = true
"#;
        let cfg: HostConfig = toml::from_str(toml_str).unwrap();
        assert!(cfg.dispatch_policy().reset_caps_on_screen_switch);
    }
}
