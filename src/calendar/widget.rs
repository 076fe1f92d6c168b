use super::grid::{CalendarDay, WeekStart, DAYS_IN_WEEK};
use super::state::{ViewState, YearMonth};
use crate::event::Event;
use crate::schedule::{events_on_date, has_conflict};
use crate::theme::{
    BASE_STYLE, CELL_BORDER_STYLE, CHIP_STYLE, CONFLICT_STYLE, DAY_NUMBER_STYLE, HINT_STYLE,
    MORE_STYLE, OUTSIDE_MONTH_STYLE, SELECTED_BORDER_STYLE, TITLE_STYLE, TODAY_BORDER_STYLE,
    TODAY_NUMBER_STYLE, WEEKDAY_STYLE,
};
use ratatui::{prelude::*, widgets::*};
use std::rc::Rc;
use time::{Date, Weekday};

/// Maximum number of events listed in a single day's cell; any more are
/// summarized with a "+N more" line
const MAX_CHIPS: usize = 3;

/// Number of lines taken up by the month title
const TITLE_LINES: u16 = 1;

/// Number of lines taken up by the weekday names
const HEADER_LINES: u16 = 1;

static CONFLICT_LABEL: &str = "! Conflicts";

/// The month grid: a title, a row of weekday names, and one bordered cell per
/// day showing that day's events
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthView<'a> {
    events: &'a [Event],
    today: Date,
    week_start: WeekStart,
}

impl<'a> MonthView<'a> {
    pub(crate) fn new(events: &'a [Event], today: Date, week_start: WeekStart) -> Self {
        MonthView {
            events,
            today,
            week_start,
        }
    }

    fn draw_weekdays(&self, area: Rect, buf: &mut Buffer) {
        for (wd, col) in self.week_start.weekdays().zip(columns(area).iter()) {
            Line::styled(short_name(wd), WEEKDAY_STYLE)
                .centered()
                .render(*col, buf);
        }
    }

    fn draw_day(&self, day: CalendarDay, area: Rect, buf: &mut Buffer) {
        let day_events = events_on_date(self.events, day.date);
        let conflict = has_conflict(&day_events);
        let border_style = if day.is_selected {
            SELECTED_BORDER_STYLE
        } else if day.is_today {
            TODAY_BORDER_STYLE
        } else {
            CELL_BORDER_STYLE
        };
        let block = Block::bordered()
            .border_style(border_style)
            .style(BASE_STYLE);
        let inner = block.inner(area);
        block.render(area, buf);
        let width = usize::from(inner.width);
        let mut lines = Vec::with_capacity(MAX_CHIPS + 3);
        lines.push(Line::styled(day.date.day().to_string(), number_style(day)));
        lines.extend(
            day_events
                .iter()
                .take(MAX_CHIPS)
                .map(|ev| chip(ev, width, conflict)),
        );
        if let Some(extra) = day_events.len().checked_sub(MAX_CHIPS).filter(|&n| n > 0) {
            lines.push(Line::styled(format!("+{extra} more"), MORE_STYLE));
        }
        if conflict {
            lines.push(Line::styled(CONFLICT_LABEL, CONFLICT_STYLE));
        }
        Paragraph::new(lines).render(inner, buf);
    }
}

impl StatefulWidget for MonthView<'_> {
    type State = ViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ViewState) {
        let [title_area, header_area, grid_area] = Layout::vertical([
            Constraint::Length(TITLE_LINES),
            Constraint::Length(HEADER_LINES),
            Constraint::Min(0),
        ])
        .areas(area);
        draw_title(title_area, buf, state.displayed_month());
        self.draw_weekdays(header_area, buf);
        let days = state.calendar_days(self.today, self.week_start);
        let week_qty = days.len().div_ceil(DAYS_IN_WEEK);
        let rows = Layout::vertical(vec![Constraint::Fill(1); week_qty]).split(grid_area);
        for (week, row) in days.chunks(DAYS_IN_WEEK).zip(rows.iter()) {
            for (day, cell) in week.iter().zip(columns(*row).iter()) {
                self.draw_day(*day, *cell, buf);
            }
        }
    }
}

/// Key to the markers used in the grid
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Legend;

impl Widget for Legend {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from(vec![
            Span::styled("■", TODAY_BORDER_STYLE),
            Span::styled(" Today    ", BASE_STYLE),
            Span::styled("■", CONFLICT_STYLE),
            Span::styled(" Time Conflicts    ", BASE_STYLE),
            Span::styled("? Help", HINT_STYLE),
        ])
        .centered()
        .render(area, buf);
    }
}

fn draw_title(area: Rect, buf: &mut Buffer, month: YearMonth) {
    Line::styled("◀ p", HINT_STYLE)
        .left_aligned()
        .render(area, buf);
    Line::styled("n ▶", HINT_STYLE)
        .right_aligned()
        .render(area, buf);
    Line::styled(month.to_string(), TITLE_STYLE)
        .centered()
        .render(area, buf);
}

// Splits a row into seven equal-width day columns
fn columns(area: Rect) -> Rc<[Rect]> {
    Layout::horizontal([Constraint::Fill(1); DAYS_IN_WEEK]).split(area)
}

fn number_style(day: CalendarDay) -> Style {
    if day.is_today {
        TODAY_NUMBER_STYLE
    } else if day.in_displayed_month {
        DAY_NUMBER_STYLE
    } else {
        OUTSIDE_MONTH_STYLE
    }
}

fn chip(event: &Event, width: usize, conflict: bool) -> Line<'static> {
    let mut style = CHIP_STYLE.bg(event.color.display_color());
    if conflict {
        style = style.add_modifier(Modifier::SLOW_BLINK);
    }
    let title = &event.title;
    Line::styled(format!("{title:<width$}"), style)
}

fn short_name(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Sunday => "Sun",
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::EventColor;
    use crate::testing::{buffer_lines, contains_text};
    use time::macros::{date, time};
    use time::Time;

    fn event(id: u64, title: &str, date: Date, time: Time, duration: u32) -> Event {
        Event {
            id,
            title: title.to_owned(),
            date,
            time,
            duration,
            color: EventColor::Green,
        }
    }

    fn render(events: &[Event], state: &mut ViewState, week_start: WeekStart) -> Buffer {
        let area = Rect::new(0, 0, 98, 52);
        let mut buffer = Buffer::empty(area);
        MonthView::new(events, date!(2024 - 03 - 15), week_start).render(area, &mut buffer, state);
        buffer
    }

    #[test]
    fn test_title_and_weekdays() {
        let mut state = ViewState::new(date!(2024 - 03 - 15));
        let buffer = render(&[], &mut state, WeekStart::Sunday);
        let lines = buffer_lines(&buffer);
        assert!(lines[0].contains("March 2024"), "title line: {:?}", lines[0]);
        assert!(lines[0].starts_with("◀ p"), "title line: {:?}", lines[0]);
        assert!(lines[0].trim_end().ends_with("n ▶"), "title line: {:?}", lines[0]);
        let sun = lines[1].find("Sun").expect("header should name Sunday");
        let sat = lines[1].find("Sat").expect("header should name Saturday");
        assert!(sun < sat, "header line: {:?}", lines[1]);
    }

    #[test]
    fn test_monday_start_header() {
        let mut state = ViewState::new(date!(2024 - 03 - 15));
        let buffer = render(&[], &mut state, WeekStart::Monday);
        let lines = buffer_lines(&buffer);
        let mon = lines[1].find("Mon").expect("header should name Monday");
        let sun = lines[1].find("Sun").expect("header should name Sunday");
        assert!(mon < sun, "header line: {:?}", lines[1]);
    }

    #[test]
    fn test_busy_day_is_truncated_and_flagged() {
        let events = vec![
            event(1, "Standup", date!(2024 - 03 - 15), time!(9:00), 60),
            event(2, "Review", date!(2024 - 03 - 15), time!(9:30), 30),
            event(3, "Lunch", date!(2024 - 03 - 15), time!(12:00), 60),
            event(4, "Gym", date!(2024 - 03 - 15), time!(18:00), 60),
            event(5, "Dentist", date!(2024 - 03 - 20), time!(14:00), 30),
        ];
        let mut state = ViewState::new(date!(2024 - 03 - 15));
        let buffer = render(&events, &mut state, WeekStart::Sunday);
        assert!(contains_text(&buffer, "Standup"));
        assert!(contains_text(&buffer, "Review"));
        assert!(contains_text(&buffer, "Lunch"));
        assert!(!contains_text(&buffer, "Gym"));
        assert!(contains_text(&buffer, "+1 more"));
        assert!(contains_text(&buffer, "Dentist"));
        let flagged = buffer_lines(&buffer)
            .iter()
            .filter(|line| line.contains(CONFLICT_LABEL))
            .count();
        assert_eq!(flagged, 1);
    }

    #[test]
    fn test_back_to_back_day_is_not_flagged() {
        let events = vec![
            event(1, "Standup", date!(2024 - 03 - 15), time!(9:00), 60),
            event(2, "Review", date!(2024 - 03 - 15), time!(10:00), 30),
        ];
        let mut state = ViewState::new(date!(2024 - 03 - 15));
        let buffer = render(&events, &mut state, WeekStart::Sunday);
        assert!(contains_text(&buffer, "Review"));
        assert!(!contains_text(&buffer, CONFLICT_LABEL));
    }

    #[test]
    fn test_padding_days_show_events() {
        let events = vec![event(1, "Leap", date!(2024 - 02 - 29), time!(9:00), 60)];
        let mut state = ViewState::new(date!(2024 - 03 - 15));
        let buffer = render(&events, &mut state, WeekStart::Sunday);
        assert!(contains_text(&buffer, "Leap"));
    }

    #[test]
    fn test_conflicting_chips_blink() {
        let a = event(1, "A", date!(2024 - 03 - 15), time!(9:00), 60);
        let b = event(2, "B", date!(2024 - 03 - 15), time!(9:30), 60);
        assert!(chip(&a, 5, true).style.add_modifier.contains(Modifier::SLOW_BLINK));
        assert!(!chip(&b, 5, false).style.add_modifier.contains(Modifier::SLOW_BLINK));
        assert_eq!(chip(&a, 5, false).to_string(), "A    ");
    }

    #[test]
    fn test_legend() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buffer = Buffer::empty(area);
        Legend.render(area, &mut buffer);
        assert!(contains_text(&buffer, "Today"));
        assert!(contains_text(&buffer, "Time Conflicts"));
    }
}
