//! `showcase replay`: drive the controller with a recorded event script.
//!
//! Offline replays run on a paused tokio clock: `wait` events and every
//! timer inside the controller (toast expiry, counter ticks, animation
//! playback) advance virtual time, so a minute-long session replays
//! instantly and deterministically. `--live` swaps in the HTTP transport
//! and a wall clock.

use std::{fs, path::Path, sync::Arc};

use serde::Serialize;
use tracing::{debug, info, instrument};

use showcase_adapters::{
    EmailJsTransport, MemoryVisibility, Playback, RecordingAnimator, ScriptedTransport,
};
use showcase_core::{
    application::{Adapters, DeliveryTransport, ShowcaseController, UiEvent, ViewModel},
    domain::ToastKind,
};

use crate::{
    cli::{GlobalArgs, OutputFormat, ReplayArgs},
    commands::check::load_site,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Everything a replay produces.
#[derive(Debug, Serialize)]
struct ReplayReport {
    events: usize,
    view: ViewModel,
    observed: Vec<String>,
    /// Requests accepted or rejected by the scripted transport.
    #[serde(skip_serializing_if = "Option::is_none")]
    deliveries: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    animations: Option<Vec<&'static str>>,
}

#[instrument(skip_all, fields(script = %args.script.display()))]
pub fn execute(
    args: ReplayArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let events = read_script(&args.script)?;
    let (source, mut file) = load_site(&global, &config)?;
    debug!(%source, events = events.len(), "Replay starting");

    let animator = Arc::new(RecordingAnimator::new(Playback::Timed));
    let watcher = Arc::new(MemoryVisibility::new());
    let scripted = (!args.live).then(|| Arc::new(ScriptedTransport::failing_on(&args.fail_stage)));
    let transport: Arc<dyn DeliveryTransport> = match &scripted {
        Some(scripted) => scripted.clone(),
        None => {
            if let Some(key) = &config.delivery.public_key {
                file.settings.delivery.public_key = key.clone();
            }
            let http = EmailJsTransport::new(&config.delivery.http()).map_err(|e| {
                CliError::ConfigError {
                    message: format!("cannot build the HTTP transport: {e}"),
                    source: Some(Box::new(e)),
                }
            })?;
            Arc::new(http)
        }
    };
    let adapters = Adapters {
        animator: animator.clone(),
        watcher: watcher.clone(),
        transport,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .start_paused(!args.live)
        .build()?;

    let count = events.len();
    let view = runtime.block_on(async move {
        let controller = ShowcaseController::new(file.site, file.settings, adapters)?;
        for event in events {
            controller.dispatch(event).await;
        }
        Ok::<_, CliError>(controller.snapshot())
    })?;
    info!(events = count, "Replay finished");

    let report = ReplayReport {
        events: count,
        view,
        observed: watcher.observed().iter().map(ToString::to_string).collect(),
        deliveries: scripted.as_ref().map(|s| s.call_count()),
        animations: args.animations.then(|| animator.names()),
    };
    render(&report, &output)
}

/// Parse a script file into events.
fn read_script(path: &Path) -> CliResult<Vec<UiEvent>> {
    if !path.exists() {
        return Err(CliError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path)?;
    parse_script(&text).map_err(|e| CliError::InvalidScript {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn parse_script(text: &str) -> Result<Vec<UiEvent>, serde_json::Error> {
    serde_json::from_str(text)
}

fn render(report: &ReplayReport, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(report)?;
        return Ok(());
    }

    let view = &report.view;
    output.success(&format!("Replayed {} events", report.events))?;

    output.header("Navigation")?;
    output.field(
        "active section",
        view.active_section_id.as_deref().unwrap_or("-"),
    )?;
    output.field("call to action", &view.cta_label)?;
    output.field("start index", view.current_page_index)?;
    output.field(
        "layout",
        format!("{} per view, {}", view.items_per_view, view.breakpoint),
    )?;
    output.field("total pages", view.total_pages)?;
    output.field("carousel offset", view.carousel_scroll_offset)?;
    output.field("drag hint", view.show_drag_hint)?;

    output.header("Panel")?;
    output.field("state", view.panel_state)?;
    output.field(
        "project",
        view.selected_project
            .map(|i| i.to_string())
            .unwrap_or_else(|| "-".into()),
    )?;
    output.field("scroll locked", view.background_scroll_locked)?;
    output.field(
        "image",
        match &view.current_image {
            Some(image) => format!("{} ({})", view.current_image_index, image.alt_text),
            None => view.current_image_index.to_string(),
        },
    )?;

    output.header("Counters")?;
    for (element, text) in &view.counter_text {
        output.field(element, text)?;
    }

    output.header("Contact")?;
    output.field("busy", view.submission_busy)?;
    if let Some(count) = report.deliveries {
        output.field("delivery calls", count)?;
    }
    if view.toast.visible {
        match view.toast.kind {
            ToastKind::Error => output.error(&view.toast.message)?,
            ToastKind::Success => output.success(&view.toast.message)?,
            ToastKind::None => output.info(&view.toast.message)?,
        }
    }

    if let Some(names) = &report.animations {
        output.header("Animations")?;
        for name in names {
            output.print(&format!("  {name}"))?;
        }
    }

    if report.observed.is_empty() {
        output.warning("No elements under observation")?;
    } else {
        output.field("still observed", report.observed.join(", "))?;
    }
    Ok(())
}
