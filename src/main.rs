mod app;
mod calendar;
mod color;
mod event;
mod help;
mod jumpto;
mod schedule;
mod theme;
#[cfg(test)]
mod testing;
use crate::app::App;
use crate::calendar::{ViewState, WeekStart, YearMonth};
use crate::event::{load_events, YMD_FMT};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use time::{Date, OffsetDateTime};

/// Environment variable consulted for the events file when `--events` is not
/// given
static EVENTS_ENV: &str = "MONTHCAL_EVENTS";

static DEFAULT_EVENTS_PATH: &str = "events.json";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        events: Option<PathBuf>,
        week_start: WeekStart,
        date: Option<Date>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut events = None;
        let mut week_start = WeekStart::default();
        let mut date = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('e') | Arg::Long("events") => {
                    events = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('w') | Arg::Long("week-start") => {
                    week_start = parser.value()?.parse()?;
                }
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match parse_start_date(&value) {
                        Ok(d) => date = Some(d),
                        Err(error) => return Err(lexopt::Error::ParsingFailed { value, error }),
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            events,
            week_start,
            date,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                events,
                week_start,
                date,
            } => {
                let path = events
                    .or_else(|| std::env::var_os(EVENTS_ENV).map(PathBuf::from))
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_EVENTS_PATH));
                let events = load_events(&path)?;
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let view = ViewState::new(date.unwrap_or(today));
                log::debug!(
                    "Starting at {} with weeks starting on {week_start:?}",
                    view.displayed_month()
                );
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(events, today, week_start, view)
                        .run(terminal)
                        .context("terminal I/O failed")
                })
            }
            Command::Help => {
                println!("Usage: monthcal [options] [YYYY-MM-DD]");
                println!();
                println!("Terminal month calendar that overlays events and flags same-day time conflicts");
                println!();
                println!("Options:");
                println!("  -e, --events <FILE>       Read events from the given JSON file");
                println!("                            [default: ${EVENTS_ENV} or {DEFAULT_EVENTS_PATH}]");
                println!("  -w, --week-start <DAY>    Start weeks on \"sunday\" or \"monday\" [default: sunday]");
                println!("  -h, --help                Display this help message and exit");
                println!("  -V, --version             Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn parse_start_date(value: &str) -> Result<Date, Box<dyn std::error::Error + Send + Sync>> {
    let date = Date::parse(value, &YMD_FMT)?;
    YearMonth::of(date).navigable()?;
    Ok(date)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
