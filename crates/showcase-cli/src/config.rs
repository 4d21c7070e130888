//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `SHOWCASE_*` environment variables, `__` between nested keys
//!    (`SHOWCASE_DELIVERY__API_BASE`)
//! 3. Config file (`--config`, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use showcase_adapters::EmailJsConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where site content comes from.
    pub site: SiteConfig,
    /// HTTP delivery transport settings for `replay --live`.
    pub delivery: DeliveryConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    pub api_base: String,
    pub timeout_secs: u64,
    /// Replaces the site file's public key when set.
    pub public_key: Option<String>,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        let http = EmailJsConfig::default();
        Self {
            api_base: http.api_base,
            timeout_secs: http.timeout_secs,
            public_key: None,
        }
    }
}

impl DeliveryConfig {
    pub fn http(&self) -> EmailJsConfig {
        EmailJsConfig {
            api_base: self.api_base.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration by layering defaults, file, and environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let settings = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path).required(required))
            .add_source(
                Environment::with_prefix("SHOWCASE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.showcase.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "showcase", "showcase")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".showcase.toml"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_point_at_public_endpoint() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.delivery.api_base, "https://api.emailjs.com");
        assert_eq!(cfg.delivery.timeout_secs, 10);
        assert!(cfg.site.file.is_none());
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let cfg = AppConfig::load_from(Path::new("/no/such/showcase.toml"), false).unwrap();
        assert_eq!(cfg.output, OutputConfig::default());
    }

    #[test]
    fn missing_required_file_is_an_error() {
        assert!(AppConfig::load(Some(&PathBuf::from("/no/such/showcase.toml"))).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[delivery]\napi_base = \"http://localhost:9000\"\n\n[site]\nfile = \"site.toml\""
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.delivery.api_base, "http://localhost:9000");
        assert_eq!(cfg.delivery.timeout_secs, 10);
        assert_eq!(cfg.site.file, Some(PathBuf::from("site.toml")));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
