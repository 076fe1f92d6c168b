use crate::event::Event;
use time::Date;

/// Returns the events that fall on `date`, in source order
pub(crate) fn events_on_date(events: &[Event], date: Date) -> Vec<&Event> {
    events.iter().filter(|ev| ev.date == date).collect()
}

/// Returns `true` if any two of the given events overlap in time.
///
/// The events are expected to have already been narrowed down to a single
/// day with [`events_on_date`]; this function compares every pair regardless
/// of date.
pub(crate) fn has_conflict(events: &[&Event]) -> bool {
    events
        .iter()
        .enumerate()
        .any(|(i, a)| events.iter().skip(i + 1).any(|b| a.overlaps(b)))
}
