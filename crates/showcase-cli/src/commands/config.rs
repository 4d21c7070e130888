//! `showcase config`: inspect the effective configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let mut shown = config.clone();
            if shown.delivery.public_key.is_some() {
                shown.delivery.public_key = Some("<set>".into());
            }
            let serialised =
                toml::to_string_pretty(&shown).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "site.file" => Ok(config
            .site
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "delivery.api_base" => Ok(config.delivery.api_base.clone()),
        "delivery.timeout_secs" => Ok(config.delivery.timeout_secs.to_string()),
        // Never echo the key itself.
        "delivery.public_key" => Ok(match config.delivery.public_key {
            Some(_) => "<set>".into(),
            None => String::new(),
        }),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "delivery.api_base").unwrap(),
            "https://api.emailjs.com"
        );
        assert_eq!(get_config_value(&cfg, "delivery.timeout_secs").unwrap(), "10");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn public_key_is_masked() {
        let mut cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "delivery.public_key").unwrap(), "");
        cfg.delivery.public_key = Some("pk_live_secret".into());
        assert_eq!(get_config_value(&cfg, "delivery.public_key").unwrap(), "<set>");
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }
}
