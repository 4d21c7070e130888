//! Site file loader.
//!
//! A site file carries the page content and, optionally, interaction
//! settings. Both TOML and JSON are accepted, chosen by extension.
//!
//! # `site.toml` format
//!
//! ```toml
//! featured_project = 0
//! sections = ["home", "about", "projects", "contact"]
//!
//! [[projects]]
//! title         = "FocusQuest"
//! description   = "Gamified focus timer"
//! image_ref     = "focusquest.png"
//! external_link = "https://example.com/focusquest"
//!
//! [[gallery]]
//! image_ref = "workly-1.png"
//! alt_text  = "Dashboard"
//!
//! [[counters]]
//! element = "stat-projects"
//! target  = 6
//! plus    = true
//!
//! [settings.delivery]
//! service_id = "service_abc"
//! ```
//!
//! Omitted content fields fall back to the stock site; omitted settings
//! fall back to the stock tunables.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use showcase_core::{
    domain::{DomainValidator, InteractionSettings, SiteContent},
    error::{ShowcaseError, ShowcaseResult},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteFile {
    #[serde(flatten)]
    pub site: SiteContent,
    #[serde(default)]
    pub settings: InteractionSettings,
}

impl SiteFile {
    /// Parse from text, picking the format from `extension`.
    pub fn parse(text: &str, extension: &str) -> ShowcaseResult<Self> {
        let file: Self = match extension.to_ascii_lowercase().as_str() {
            "toml" => toml::from_str(text).map_err(|e| ShowcaseError::Configuration {
                message: format!("invalid TOML site file: {e}"),
            })?,
            "json" => serde_json::from_str(text).map_err(|e| ShowcaseError::Configuration {
                message: format!("invalid JSON site file: {e}"),
            })?,
            other => {
                return Err(ShowcaseError::Configuration {
                    message: format!("unsupported site file extension '{other}' (use .toml or .json)"),
                });
            }
        };
        file.validate()?;
        Ok(file)
    }

    /// Read and validate a site file.
    #[instrument]
    pub fn load(path: &Path) -> ShowcaseResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| ShowcaseError::Configuration {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        let file = Self::parse(&text, extension)?;
        debug!(
            projects = file.site.projects.len(),
            gallery = file.site.gallery.len(),
            "Site file loaded"
        );
        Ok(file)
    }

    pub fn validate(&self) -> ShowcaseResult<()> {
        DomainValidator::validate(&self.site, &self.settings)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use showcase_core::domain::DomainError;
    use tempfile::NamedTempFile;

    use super::*;

    fn write(suffix: &str, body: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_toml_with_overrides() {
        let file = write(
            ".toml",
            r#"
featured_project = 1

[[projects]]
title = "A"
description = "first"
image_ref = "a.png"
external_link = "https://a"

[[projects]]
title = "B"
description = "second"
image_ref = "b.png"
external_link = "https://b"

[settings]
toast_lifetime_ms = 5000

[settings.delivery]
service_id = "service_abc"
"#,
        );

        let site = SiteFile::load(file.path()).unwrap();
        assert_eq!(site.site.projects.len(), 2);
        assert_eq!(site.site.featured().unwrap().title, "B");
        assert_eq!(site.settings.toast_lifetime_ms, 5_000);
        assert_eq!(site.settings.delivery.service_id, "service_abc");
        // Unspecified content keeps the stock gallery.
        assert!(!site.site.gallery.is_empty());
    }

    #[test]
    fn empty_gallery_is_rejected() {
        let file = write(".json", r#"{ "gallery": [] }"#);
        let err = SiteFile::load(file.path()).unwrap_err();
        assert_eq!(err, ShowcaseError::Domain(DomainError::EmptyGallery));
    }

    #[test]
    fn unknown_extension_is_a_configuration_error() {
        let err = SiteFile::parse("", "yaml").unwrap_err();
        assert!(matches!(err, ShowcaseError::Configuration { .. }));
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let err = SiteFile::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
