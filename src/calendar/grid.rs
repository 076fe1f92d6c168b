use std::iter::successors;
use std::str::FromStr;
use thiserror::Error;
use time::{Date, Weekday};

pub(super) const DAYS_IN_WEEK: usize = 7;

/// Which day a calendar week begins on
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub(crate) fn first_weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sunday,
            WeekStart::Monday => Weekday::Monday,
        }
    }

    /// The days of the week in display order
    pub(crate) fn weekdays(self) -> impl Iterator<Item = Weekday> {
        successors(Some(self.first_weekday()), |wd| Some(wd.next())).take(DAYS_IN_WEEK)
    }

    /// Number of days from the start of the week to `wd`
    pub(crate) fn offset(self, wd: Weekday) -> u8 {
        match self {
            WeekStart::Sunday => wd.number_days_from_sunday(),
            WeekStart::Monday => wd.number_days_from_monday(),
        }
    }
}

impl FromStr for WeekStart {
    type Err = ParseWeekStartError;

    fn from_str(s: &str) -> Result<WeekStart, ParseWeekStartError> {
        if s.eq_ignore_ascii_case("sunday") || s.eq_ignore_ascii_case("sun") {
            Ok(WeekStart::Sunday)
        } else if s.eq_ignore_ascii_case("monday") || s.eq_ignore_ascii_case("mon") {
            Ok(WeekStart::Monday)
        } else {
            Err(ParseWeekStartError(s.to_owned()))
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error(r#"invalid week start {0:?}; expected "sunday" or "monday""#)]
pub(crate) struct ParseWeekStartError(String);

/// A single cell of the month grid, as seen from the current view
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct CalendarDay {
    pub(crate) date: Date,
    pub(crate) in_displayed_month: bool,
    pub(crate) is_today: bool,
    pub(crate) is_selected: bool,
}

/// Returns every date to show for the month containing `reference`, starting
/// on the first day of the week that contains the first of the month and
/// ending on the last day of the week that contains the last of the month.
///
/// The result always has a multiple of seven elements, except for the
/// earliest and latest months that `time` can represent, where the padding
/// runs out of days and is cut short.
pub(crate) fn build_grid(reference: Date, week_start: WeekStart) -> Vec<Date> {
    let month_start = first_of_month(reference);
    let month_end = last_of_month(reference);
    let lead = usize::from(week_start.offset(month_start.weekday()));
    let trail = DAYS_IN_WEEK - 1 - usize::from(week_start.offset(month_end.weekday()));
    let grid_start = iter_days_before(month_start)
        .take(lead)
        .last()
        .unwrap_or(month_start);
    let grid_end = iter_days_after(month_end)
        .take(trail)
        .last()
        .unwrap_or(month_end);
    successors(Some(grid_start), |&d| d.next_day().filter(|&d2| d2 <= grid_end)).collect()
}

pub(super) fn first_of_month(date: Date) -> Date {
    date.replace_day(1).unwrap_or(date)
}

pub(super) fn last_of_month(date: Date) -> Date {
    iter_days_after(date)
        .take_while(|d| d.month() == date.month())
        .last()
        .unwrap_or(date)
}

fn iter_days_after(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day()).skip(1)
}

fn iter_days_before(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.previous_day()).skip(1)
}
