use super::grid::{build_grid, first_of_month, CalendarDay, WeekStart};
use std::fmt;
use thiserror::Error;
use time::{Date, Duration, Month};

/// Earliest year that can be navigated to.  The first year representable by
/// `time` is excluded so that every displayed month can be padded out to
/// whole weeks.
const MIN_YEAR: i32 = Date::MIN.year() + 1;

/// Latest year that can be navigated to
const MAX_YEAR: i32 = Date::MAX.year() - 1;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    pub(crate) fn of(date: Date) -> YearMonth {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    pub(crate) fn contains(self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub(crate) fn first_day(self) -> Option<Date> {
        Date::from_calendar_date(self.year, self.month, 1).ok()
    }

    pub(crate) fn next(self) -> Result<YearMonth, OutOfTimeError> {
        let year = if self.month == Month::December {
            self.year + 1
        } else {
            self.year
        };
        YearMonth {
            year,
            month: self.month.next(),
        }
        .navigable()
    }

    pub(crate) fn previous(self) -> Result<YearMonth, OutOfTimeError> {
        let year = if self.month == Month::January {
            self.year - 1
        } else {
            self.year
        };
        YearMonth {
            year,
            month: self.month.previous(),
        }
        .navigable()
    }

    /// Returns `self` if the month can be shown and navigated away from
    pub(crate) fn navigable(self) -> Result<YearMonth, OutOfTimeError> {
        if (MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            Ok(self)
        } else {
            Err(OutOfTimeError)
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

/// The mutable part of the calendar view: which month is on screen and which
/// day, if any, the user has picked.  The selected day need not lie within
/// the displayed month.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ViewState {
    displayed_month: YearMonth,
    selected: Option<Date>,
}

impl ViewState {
    pub(crate) fn new(date: Date) -> ViewState {
        ViewState {
            displayed_month: YearMonth::of(date),
            selected: None,
        }
    }

    pub(crate) fn displayed_month(&self) -> YearMonth {
        self.displayed_month
    }

    pub(crate) fn selected(&self) -> Option<Date> {
        self.selected
    }

    pub(crate) fn next_month(&mut self) -> Result<(), OutOfTimeError> {
        self.displayed_month = self.displayed_month.next()?;
        Ok(())
    }

    pub(crate) fn previous_month(&mut self) -> Result<(), OutOfTimeError> {
        self.displayed_month = self.displayed_month.previous()?;
        Ok(())
    }

    pub(crate) fn select(&mut self, date: Date) {
        self.selected = Some(date);
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Select `date` and show the month it falls in.  Fails without
    /// changing anything if that month is outside the navigable range.
    pub(crate) fn jump_to(&mut self, date: Date) -> Result<(), OutOfTimeError> {
        self.displayed_month = YearMonth::of(date).navigable()?;
        self.selected = Some(date);
        Ok(())
    }

    /// Move the selection `days` days forwards (or backwards, if negative),
    /// bringing the month of the new selection into view.
    ///
    /// If nothing is selected yet, the first move just selects `today` when
    /// it lies in the displayed month, or else the first of the displayed
    /// month.
    pub(crate) fn move_selection(&mut self, days: i64, today: Date) -> Result<(), OutOfTimeError> {
        let Some(current) = self.selected else {
            let anchor = if self.displayed_month.contains(today) {
                today
            } else {
                self.displayed_month.first_day().ok_or(OutOfTimeError)?
            };
            self.select(anchor);
            return Ok(());
        };
        let date = current
            .checked_add(Duration::days(days))
            .ok_or(OutOfTimeError)?;
        self.displayed_month = YearMonth::of(date).navigable()?;
        self.select(date);
        Ok(())
    }

    /// Returns the cells of the displayed month's grid
    pub(crate) fn calendar_days(&self, today: Date, week_start: WeekStart) -> Vec<CalendarDay> {
        let reference = self
            .displayed_month
            .first_day()
            .unwrap_or_else(|| first_of_month(today));
        build_grid(reference, week_start)
            .into_iter()
            .map(|date| CalendarDay {
                date,
                in_displayed_month: self.displayed_month.contains(date),
                is_today: date == today,
                is_selected: self.selected == Some(date),
            })
            .collect()
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;
