use crate::color::EventColor;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use time::{
    format_description::BorrowedFormatItem, macros::format_description, Date, Duration,
    PrimitiveDateTime, Time,
};

pub(crate) static YMD_FMT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

static HM_FMT: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]");

/// A scheduled event.  Events are loaded once and never modified.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Event {
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) date: Date,
    pub(crate) time: Time,
    /// Length in minutes
    pub(crate) duration: u32,
    pub(crate) color: EventColor,
}

impl Event {
    pub(crate) fn start(&self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.date, self.time)
    }

    pub(crate) fn end(&self) -> PrimitiveDateTime {
        self.start()
            .saturating_add(Duration::minutes(i64::from(self.duration)))
    }

    /// Two events overlap if each starts strictly before the other ends.
    /// Events that merely touch (one ends as the other starts) do not
    /// overlap.  A zero-length event overlaps any event running across its
    /// instant, but not another zero-length event at the same instant.
    pub(crate) fn overlaps(&self, other: &Event) -> bool {
        self.start() < other.end() && other.start() < self.end()
    }

    pub(crate) fn time_label(&self) -> String {
        format!("{:02}:{:02}", self.time.hour(), self.time.minute())
    }
}

// The on-disk shape of an event, before any validation
#[derive(Clone, Debug, Deserialize)]
struct EventRecord {
    id: u64,
    title: String,
    date: String,
    time: String,
    duration: i64,
    color: String,
}

impl TryFrom<EventRecord> for Event {
    type Error = EventError;

    fn try_from(record: EventRecord) -> Result<Event, EventError> {
        let date = Date::parse(&record.date, &YMD_FMT).map_err(|source| EventError::Date {
            id: record.id,
            value: record.date.clone(),
            source,
        })?;
        let time = Time::parse(&record.time, &HM_FMT).map_err(|source| EventError::Time {
            id: record.id,
            value: record.time.clone(),
            source,
        })?;
        let duration = u32::try_from(record.duration).map_err(|_| EventError::Duration {
            id: record.id,
            duration: record.duration,
        })?;
        Ok(Event {
            id: record.id,
            title: record.title,
            date,
            time,
            duration,
            color: EventColor::from_tag(&record.color),
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum EventError {
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("event {id}: invalid date {value:?}")]
    Date {
        id: u64,
        value: String,
        source: time::error::Parse,
    },
    #[error("event {id}: invalid time {value:?}")]
    Time {
        id: u64,
        value: String,
        source: time::error::Parse,
    },
    #[error("event {id}: duration {duration} is out of range")]
    Duration { id: u64, duration: i64 },
    #[error("event {0}: duplicate id")]
    DuplicateId(u64),
}

/// Parse a JSON array of event records.  Records that cannot be turned into
/// valid events are logged and skipped; only a document that is not a JSON
/// array at all is an error.
pub(crate) fn parse_events(src: &str) -> Result<Vec<Event>, serde_json::Error> {
    let records: Vec<serde_json::Value> = serde_json::from_str(src)?;
    let mut events = Vec::with_capacity(records.len());
    let mut seen = HashSet::new();
    for (i, value) in records.into_iter().enumerate() {
        let r = serde_json::from_value::<EventRecord>(value)
            .map_err(EventError::from)
            .and_then(Event::try_from)
            .and_then(|ev| {
                if seen.insert(ev.id) {
                    Ok(ev)
                } else {
                    Err(EventError::DuplicateId(ev.id))
                }
            });
        match r {
            Ok(ev) => events.push(ev),
            Err(e) => log::warn!("Skipping event record #{i}: {e}"),
        }
    }
    Ok(events)
}

pub(crate) fn load_events(path: &Path) -> anyhow::Result<Vec<Event>> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    let events = parse_events(&src)
        .with_context(|| format!("failed to parse events from {}", path.display()))?;
    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}
