//! clubevents CLI entry point.

use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::Parser;
use clubevents_core::{GalleryFilter, OutputFormat, TracingConfig, init_tracing};
use tracing::debug;

use clubevents_cli::cli::{Cli, Command, ConfigAction, ExportTarget, YearMonth};
use clubevents_cli::commands::{self, export::IcalOutput};
use clubevents_cli::config::ClientConfig;
use clubevents_cli::content::Content;
use clubevents_cli::error::ClientResult;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{}", output);
            } else if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> ClientResult<String> {
    // Load configuration
    let mut config = match cli.config {
        Some(ref path) => ClientConfig::load_from(path)?,
        None => ClientConfig::load()?,
    };
    if let Some(ref events) = cli.events {
        config.events_file = Some(events.clone());
    }

    if let Err(e) = init_tracing(TracingConfig::for_cli(cli.debug || config.debug)) {
        eprintln!("warning: {}", e);
    }

    let format = cli.output_format();
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    debug!(%today, events = %config.events_path().display(), "starting");

    let command = cli.command.unwrap_or(Command::Next { count: None });
    dispatch(command, &config, today, format)
}

fn dispatch(
    command: Command,
    config: &ClientConfig,
    today: NaiveDate,
    format: OutputFormat,
) -> ClientResult<String> {
    // Configuration commands never touch the content file
    let load = || Content::load(&config.events_path());
    let empty = config.display.no_events_text.as_str();

    match command {
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(config),
            ConfigAction::Validate => commands::config::validate(config),
            ConfigAction::Path => commands::config::path(config),
        },
        Command::Upcoming => commands::events::upcoming(&load()?.directory, today, format, empty),
        Command::Next { count } => {
            let count = count.unwrap_or(config.display.next_count);
            commands::events::next(&load()?.directory, today, count, format, empty)
        }
        Command::On { date } => commands::events::on(&load()?.directory, date, format, empty),
        Command::Dots { date } => commands::events::dots(&load()?.directory, date, format, empty),
        Command::Month { month } => {
            let month = month.unwrap_or_else(|| YearMonth::of(today));
            commands::events::month(&load()?.directory, month, format)
        }
        Command::Show { id } => commands::events::show(
            &load()?.directory,
            &id,
            &config.rsvp.contact_email,
            format,
        ),
        Command::Export { target } => match target {
            ExportTarget::Google { id, open, copy } => {
                commands::export::google(&load()?.directory, &id, open, copy)
            }
            ExportTarget::Ical {
                id,
                output,
                data_url,
            } => {
                let dir = output.or_else(|| config.export.output_dir.clone());
                let output = match (data_url, dir.as_deref()) {
                    (true, _) => IcalOutput::DataUrl,
                    (false, Some(dir)) => IcalOutput::Directory(dir),
                    (false, None) => IcalOutput::Document,
                };
                commands::export::ical(&load()?.directory, &id, output, &config.export.prodid)
            }
        },
        Command::Rsvp { id, open } => commands::export::rsvp(
            &load()?.directory,
            &id,
            &config.rsvp.contact_email,
            open,
            format,
        ),
        Command::Validate => commands::events::validate(&load()?, today, format),
        Command::Gallery {
            category,
            from,
            to,
            search,
            categories,
        } => {
            let gallery = load()?.gallery;
            if categories {
                return commands::gallery::categories(&gallery, format);
            }
            let mut filter = GalleryFilter::new();
            if let Some(category) = category {
                filter = filter.with_category(category);
            }
            if let Some(from) = from {
                filter = filter.with_from(from);
            }
            if let Some(to) = to {
                filter = filter.with_to(to);
            }
            if let Some(search) = search {
                filter = filter.with_search(search);
            }
            commands::gallery::list(&gallery, &filter, format, empty)
        }
    }
}
