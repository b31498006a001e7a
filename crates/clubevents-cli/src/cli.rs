//! Command-line interface definition.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clubevents_core::{OutputFormat, parse_iso_date};

/// clubevents - the club calendar from the command line
#[derive(Debug, Parser)]
#[command(name = "clubevents")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "CLUBEVENTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the content file (overrides `events_file` in the config)
    #[arg(long, short, env = "CLUBEVENTS_EVENTS")]
    pub events: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Reference date for "upcoming" queries (defaults to the local date)
    #[arg(long, value_parser = parse_date_arg)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Returns the output format based on CLI flags.
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every event from today on, soonest first
    Upcoming,

    /// Show the next few events (the default command)
    Next {
        /// How many events to show (defaults to `display.next_count`)
        count: Option<usize>,
    },

    /// List events happening on a date
    On {
        /// Date in YYYY-MM-DD form
        #[arg(value_parser = parse_date_arg)]
        date: NaiveDate,
    },

    /// Show the color-coded event markers for a date
    Dots {
        /// Date in YYYY-MM-DD form
        #[arg(value_parser = parse_date_arg)]
        date: NaiveDate,
    },

    /// Print a month calendar with event markers
    Month {
        /// Month in YYYY-MM form (defaults to the current month)
        month: Option<YearMonth>,
    },

    /// Show one event in full
    Show {
        /// Event id
        id: String,
    },

    /// Export an event to a calendar application
    Export {
        #[command(subcommand)]
        target: ExportTarget,
    },

    /// Show or open the RSVP action for an event
    Rsvp {
        /// Event id
        id: String,

        /// Open the mailto link in the default mail client
        #[arg(long)]
        open: bool,
    },

    /// Validate the content file and report what it holds
    Validate,

    /// List gallery items
    Gallery {
        /// Only this category ("all" for every category)
        #[arg(long)]
        category: Option<String>,

        /// Only items dated on or after this date
        #[arg(long, value_parser = parse_date_arg)]
        from: Option<NaiveDate>,

        /// Only items dated on or before this date
        #[arg(long, value_parser = parse_date_arg)]
        to: Option<NaiveDate>,

        /// Only items whose title, description or tags contain this text
        #[arg(long)]
        search: Option<String>,

        /// List the categories instead of the items
        #[arg(long, conflicts_with_all = ["category", "from", "to", "search"])]
        categories: bool,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Calendar export targets.
#[derive(Debug, Subcommand)]
pub enum ExportTarget {
    /// Print a Google Calendar "add event" link
    Google {
        /// Event id
        id: String,

        /// Open the link in the default browser
        #[arg(long)]
        open: bool,

        /// Copy the link to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Print or write an iCalendar (.ics) file
    Ical {
        /// Event id
        id: String,

        /// Write `<id>.ics` into this directory instead of printing it
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print a `data:` URL instead of the document
        #[arg(long, conflicts_with = "output")]
        data_url: bool,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration and content file paths
    Path,
}

/// A calendar month given as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("expected a YYYY-MM month, got {:?}", s);
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_iso_date(value).map_err(|e| e.to_string())
}
