mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use geonote_core::calendar::{CalendarEvent, RawStart};
use geonote_core::coords::{Axis, CoordinateFormat};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "geonote")]
#[command(about = "Convert coordinates and export GeoNote meetings to your calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert decimal degrees to DMS (e.g. 41.291111 -> 41°17'28"N)
    #[command(allow_negative_numbers = true)]
    Dms {
        /// Signed decimal degrees
        value: f64,

        /// Axis of the value: lat or lng
        #[arg(short, long, default_value = "lat")]
        axis: Axis,
    },
    /// Convert DMS text to decimal degrees
    Decimal {
        /// DMS text, e.g. 41°17'28"N or "69 14 26 E"
        text: String,
    },
    /// Convert a latitude/longitude pair between decimal and DMS
    #[command(allow_negative_numbers = true)]
    Convert {
        latitude: String,
        longitude: String,

        /// Format the pair is written in (defaults to the configured one)
        #[arg(long)]
        from: Option<CoordinateFormat>,

        /// Format to convert to (defaults to the other one)
        #[arg(long)]
        to: Option<CoordinateFormat>,
    },
    /// Centre of a set of points, given as "lat,lng"
    Center {
        #[arg(allow_hyphen_values = true)]
        points: Vec<String>,
    },
    /// Export a meeting to Google Calendar, Outlook or an .ics file
    Calendar {
        #[command(subcommand)]
        command: CalendarCommands,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum CalendarCommands {
    /// Print "add to calendar" links
    Links {
        #[command(flatten)]
        event: EventArgs,

        /// Print the links and the event window as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the meeting as an .ics file
    Ics {
        #[command(flatten)]
        event: EventArgs,

        /// File or directory to write to (defaults to <title>.ics here)
        #[arg(short, long, conflicts_with = "data_uri")]
        output: Option<PathBuf>,

        /// Print a data: URI instead of writing a file
        #[arg(long)]
        data_uri: bool,
    },
    /// Read an exported .ics file back
    Inspect { file: PathBuf },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a commented default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show where the config file lives
    Path,
}

/// The meeting fields shared by the calendar commands.
#[derive(Args, Debug, Default)]
struct EventArgs {
    /// Meeting title
    #[arg(short, long)]
    title: Option<String>,

    /// Start date/time (e.g. "2025-03-01T10:00" or "2025-03-01T10:00:00Z")
    #[arg(short, long)]
    start: Option<String>,

    /// Event description
    #[arg(long)]
    description: Option<String>,

    /// Meeting notes, used when there is no description
    #[arg(long)]
    notes: Option<String>,

    /// Event location
    #[arg(short, long)]
    location: Option<String>,

    /// Meeting id, used for the event UID
    #[arg(long)]
    id: Option<String>,

    /// Duration (e.g. "30m", "1h", "2h30m"), overrides the configured one
    #[arg(short, long)]
    duration: Option<String>,
}

impl EventArgs {
    fn to_event(&self) -> CalendarEvent {
        CalendarEvent {
            title: self.title.clone(),
            description: self.description.clone(),
            notes: self.notes.clone(),
            location: self.location.clone(),
            start: self.start.clone().map(RawStart::from),
            identifier: self.id.clone(),
        }
    }
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dms { value, axis } => commands::coords::dms(value, axis),
        Commands::Decimal { text } => commands::coords::decimal(&text),
        Commands::Convert {
            latitude,
            longitude,
            from,
            to,
        } => commands::coords::convert(&latitude, &longitude, from, to),
        Commands::Center { points } => commands::coords::center(&points),
        Commands::Calendar { command } => match command {
            CalendarCommands::Links { event, json } => {
                commands::calendar::links(&event.to_event(), event.duration.as_deref(), json)
            }
            CalendarCommands::Ics {
                event,
                output,
                data_uri,
            } => commands::calendar::ics(
                &event.to_event(),
                event.duration.as_deref(),
                output,
                data_uri,
            ),
            CalendarCommands::Inspect { file } => commands::calendar::inspect(&file),
        },
        Commands::Config { command } => match command {
            ConfigCommands::Init { force } => commands::config::init(force),
            ConfigCommands::Path => commands::config::path(),
        },
    }
}

/// Logs go to stderr so they never mix with command output. `RUST_LOG`
/// overrides the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry().with(filter).with(fmt).init();
}
