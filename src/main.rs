// Attendance Calendar
// Command line entry point

use anyhow::{Context, Result};
use attendance_calendar::models::attendance::StatusMap;
use attendance_calendar::models::calendar::{CalendarCell, MonthCursor};
use attendance_calendar::models::settings::AppConfig;
use attendance_calendar::services::attendance::{load_status_file, AttendanceSummary};
use attendance_calendar::services::calendar::CalendarGridBuilder;
use attendance_calendar::services::database::Database;
use attendance_calendar::services::preferences::SqlitePreferenceStore;
use attendance_calendar::services::settings::SettingsService;
use attendance_calendar::services::theme::{MarkerSet, ThemePreference};
use attendance_calendar::ui_text::{MonthView, ThemeView};
use lexopt::{Arg, Parser, ValueExt};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Month {
        month: Option<MonthCursor>,
        statuses: Option<PathBuf>,
        json: bool,
    },
    Theme {
        toggle: bool,
    },
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Cli {
    config: Option<PathBuf>,
    command: Command,
}

#[derive(Serialize)]
struct MonthReport<'a> {
    title: String,
    cells: &'a [CalendarCell],
    summary: AttendanceSummary,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut config = None;
        let mut statuses = None;
        let mut json = false;
        let mut words: Vec<String> = Vec::new();

        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => {
                    return Ok(Cli {
                        config,
                        command: Command::Help,
                    })
                }
                Arg::Short('V') | Arg::Long("version") => {
                    return Ok(Cli {
                        config,
                        command: Command::Version,
                    })
                }
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('s') | Arg::Long("statuses") => {
                    statuses = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("json") => json = true,
                Arg::Value(value) if words.len() < 2 => words.push(value.string()?),
                _ => return Err(arg.unexpected()),
            }
        }

        let command = match words.first().map(String::as_str) {
            None | Some("month") => {
                let month = match words.get(1) {
                    Some(text) => Some(MonthCursor::parse(text).ok_or_else(|| {
                        lexopt::Error::UnexpectedValue {
                            option: "month".to_string(),
                            value: text.into(),
                        }
                    })?),
                    None => None,
                };
                Command::Month {
                    month,
                    statuses,
                    json,
                }
            }
            Some("theme") => match words.get(1).map(String::as_str) {
                None => Command::Theme { toggle: false },
                Some("toggle") => Command::Theme { toggle: true },
                Some(other) => return Err(lexopt::Error::UnexpectedArgument(other.into())),
            },
            Some(other) => return Err(lexopt::Error::UnexpectedArgument(other.into())),
        };

        Ok(Cli { config, command })
    }

    fn run(self) -> Result<()> {
        match self.command {
            Command::Help => print_help(),
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            }
            Command::Month {
                month,
                statuses,
                json,
            } => {
                init_app(self.config.as_deref())?;
                show_month(month.unwrap_or_else(MonthCursor::today), statuses, json)?;
            }
            Command::Theme { toggle } => {
                let (settings, config) = init_app(self.config.as_deref())?;
                show_theme(&settings, &config, toggle)?;
            }
        }

        Ok(())
    }
}

/// Load configuration and start logging with its default filter.
fn init_app(config_path: Option<&Path>) -> Result<(SettingsService, AppConfig)> {
    let settings = SettingsService::new();
    let config = settings.load(config_path)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();
    log::info!("Starting Attendance Calendar");
    match settings.resolve_config_path(config_path) {
        Some(path) if path.exists() => log::debug!("Loaded config from {}", path.display()),
        Some(path) => log::debug!("No config at {}, using defaults", path.display()),
        None => log::debug!("No config directory available, using defaults"),
    }

    Ok((settings, config))
}

fn show_month(cursor: MonthCursor, statuses: Option<PathBuf>, json: bool) -> Result<()> {
    let statuses = match statuses {
        Some(path) => load_status_file(&path)?,
        None => StatusMap::new(),
    };
    let cells = CalendarGridBuilder::build_for(cursor, &statuses)
        .with_context(|| format!("Failed to build calendar for {}", cursor.title()))?;
    let summary = AttendanceSummary::from_cells(&cells);

    if json {
        let report = MonthReport {
            title: cursor.title(),
            cells: &cells,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", MonthView::render(cursor, &cells));
        println!();
        println!("{}", MonthView::render_summary(&summary));
        println!("{}", MonthView::legend());
    }

    Ok(())
}

fn show_theme(settings: &SettingsService, config: &AppConfig, toggle: bool) -> Result<()> {
    let db_path = settings.database_path(config)?;
    let db_path = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    let db = Database::new(db_path)?;
    db.initialize_schema()?;

    let mut theme = ThemePreference::load(SqlitePreferenceStore::new(&db), MarkerSet::new());
    if toggle {
        theme.toggle();
    }
    println!("{}", ThemeView::render(theme.mode()));

    Ok(())
}

fn print_help() {
    println!("Usage: attendance-calendar [OPTIONS] [month [YYYY-MM] | theme [toggle]]");
    println!();
    println!("Student attendance calendar with a persisted dark-mode preference");
    println!();
    println!("Commands:");
    println!("  month [YYYY-MM]       Show the attendance grid (default: current month)");
    println!("  theme                 Print the current theme");
    println!("  theme toggle          Switch between light and dark mode");
    println!();
    println!("Options:");
    println!("  -c, --config FILE     Read configuration from FILE");
    println!("  -s, --statuses FILE   JSON object of YYYY-MM-DD -> status");
    println!("      --json            Print the month as JSON");
    println!("  -h, --help            Display this help message and exit");
    println!("  -V, --version         Show the program version and exit");
}

fn main() -> Result<()> {
    Cli::from_parser(Parser::from_env())?.run()
}
