use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use geonote_core::calendar::ics::{ExportedEvent, parse_exported};
use geonote_core::calendar::{CalendarEvent, CalendarExport, EventWindow, ProviderLinks, export_event};
use geonote_core::config::{CalendarSettings, GeoNoteConfig, parse_duration};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, info};

use crate::render::Render;

#[derive(Serialize)]
struct LinksOutput<'a> {
    window: &'a EventWindow,
    links: &'a ProviderLinks,
}

pub fn links(event: &CalendarEvent, duration: Option<&str>, json: bool) -> Result<()> {
    let settings = load_settings(duration)?;
    let export = export_event(event, &settings);

    if json {
        println!("{}", links_json(&export)?);
        return Ok(());
    }

    print_fallback_note(&export.window);
    println!("{} {}", event.summary(&settings).bold(), export.window.render());
    println!();
    println!("{}", "Google Calendar".bold());
    println!("  {}", export.links.google);
    println!("{}", "Outlook".bold());
    println!("  {}", export.links.outlook);

    Ok(())
}

pub fn ics(
    event: &CalendarEvent,
    duration: Option<&str>,
    output: Option<PathBuf>,
    data_uri: bool,
) -> Result<()> {
    let settings = load_settings(duration)?;
    let export = export_event(event, &settings);

    if data_uri {
        print_fallback_note(&export.window);
        println!("{}", export.data_uri);
        return Ok(());
    }

    let path = write_ics(&export, output.as_deref())?;

    print_fallback_note(&export.window);
    println!(
        "{}",
        format!("  Wrote: {} {}", path.display(), export.window.render()).green()
    );

    Ok(())
}

pub fn inspect(file: &Path) -> Result<()> {
    let event = read_exported(file)?;

    println!("{}", event.render());
    Ok(())
}

fn links_json(export: &CalendarExport) -> Result<String> {
    let output = LinksOutput {
        window: &export.window,
        links: &export.links,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Write the payload. `output` may be a file path or an existing directory;
/// without it the file lands in the current directory. Either way a
/// directory gets the export's `<title>.ics` name.
fn write_ics(export: &CalendarExport, output: Option<&Path>) -> Result<PathBuf> {
    let path = match output {
        Some(dir) if dir.is_dir() => dir.join(&export.filename),
        Some(file) => file.to_path_buf(),
        None => PathBuf::from(&export.filename),
    };

    std::fs::write(&path, &export.ics)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = export.ics.len(), "calendar file written");

    Ok(path)
}

fn read_exported(file: &Path) -> Result<ExportedEvent> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    debug!(path = %file.display(), bytes = content.len(), "inspecting calendar file");

    parse_exported(&content).with_context(|| {
        format!(
            "{} does not contain a VEVENT with UTC start and end times",
            file.display()
        )
    })
}

/// Calendar settings from the config file, with the duration overridden
/// from the command line.
fn load_settings(duration: Option<&str>) -> Result<CalendarSettings> {
    let settings = GeoNoteConfig::load()
        .context("Failed to load config")?
        .calendar;

    with_duration(settings, duration)
}

fn with_duration(mut settings: CalendarSettings, duration: Option<&str>) -> Result<CalendarSettings> {
    if let Some(duration) = duration {
        parse_duration(duration)?;
        debug!(duration, "event duration overridden");
        settings.default_duration = duration.to_string();
    }

    Ok(settings)
}

fn print_fallback_note(window: &EventWindow) {
    if window.used_fallback() {
        eprintln!(
            "{}",
            "  Note: no valid start time given, using the current time".yellow()
        );
    }
}
