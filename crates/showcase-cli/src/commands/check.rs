//! `showcase check`: load and validate a site file.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use showcase_adapters::SiteFile;

use crate::{
    cli::{GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Summary printed by `check`.
#[derive(Debug, Serialize)]
struct CheckReport {
    source: String,
    projects: usize,
    gallery: usize,
    sections: Vec<String>,
    counters: Vec<String>,
    reveal_containers: Vec<String>,
    featured: Option<String>,
}

impl CheckReport {
    fn new(source: String, file: &SiteFile) -> Self {
        let site = &file.site;
        Self {
            source,
            projects: site.projects.len(),
            gallery: site.gallery.len(),
            sections: site.sections.iter().map(ToString::to_string).collect(),
            counters: site.counters.iter().map(|c| c.element.to_string()).collect(),
            reveal_containers: site.reveal_containers.iter().map(ToString::to_string).collect(),
            featured: site.featured().map(|p| p.title.clone()),
        }
    }
}

#[instrument(skip_all)]
pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (source, file) = load_site(&global, &config)?;
    info!(%source, "Site content valid");

    let report = CheckReport::new(source, &file);
    if output.format() == OutputFormat::Json {
        output.json(&report)?;
        return Ok(());
    }

    output.success(&format!("Site content is valid ({})", report.source))?;
    output.field("projects", report.projects)?;
    output.field("gallery images", report.gallery)?;
    output.field("sections", report.sections.join(", "))?;
    output.field("counters", report.counters.join(", "))?;
    output.field("reveal containers", report.reveal_containers.join(", "))?;
    output.field("featured", report.featured.unwrap_or_default())?;
    Ok(())
}

/// Resolve the site file: `--site`, then `site.file`, then stock content.
///
/// Returns a label for the source alongside the validated file.
pub(crate) fn load_site(global: &GlobalArgs, config: &AppConfig) -> CliResult<(String, SiteFile)> {
    let path: Option<PathBuf> = global.site.clone().or_else(|| config.site.file.clone());

    let Some(path) = path else {
        debug!("No site file given; using stock content");
        let file = SiteFile::default();
        file.validate()?;
        return Ok(("built-in".into(), file));
    };

    if !path.exists() {
        return Err(CliError::FileNotFound { path });
    }
    let file = SiteFile::load(&path)?;
    Ok((path.display().to_string(), file))
}
