use crate::calendar::{DayAgenda, Legend, MonthView, ViewState, WeekStart};
use crate::event::Event;
use crate::help::Help;
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::schedule::events_on_date;
use crate::theme::BASE_STYLE;
use crossterm::event::{read, Event as InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::Date;

/// Number of lines taken up by the legend at the bottom of the screen
const LEGEND_LINES: u16 = 1;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    events: Vec<Event>,
    today: Date,
    week_start: WeekStart,
    view: ViewState,
    state: AppState,
}

impl App {
    pub(crate) fn new(
        events: Vec<Event>,
        today: Date,
        week_start: WeekStart,
        view: ViewState,
    ) -> App {
        App {
            events,
            today,
            week_start,
            view,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let InputEvent::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = read()?
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key or tried to move
    // past the end of time
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Calendar => match key {
                KeyCode::Char('n' | ']') | KeyCode::PageDown => self.view.next_month().is_ok(),
                KeyCode::Char('p' | '[') | KeyCode::PageUp => self.view.previous_month().is_ok(),
                KeyCode::Char('h') | KeyCode::Left => self.move_selection(-1),
                KeyCode::Char('l') | KeyCode::Right => self.move_selection(1),
                KeyCode::Char('k') | KeyCode::Up => self.move_selection(-7),
                KeyCode::Char('j') | KeyCode::Down => self.move_selection(7),
                KeyCode::Char('0') | KeyCode::Home => self.jump_to(self.today),
                KeyCode::Char('x') | KeyCode::Backspace => {
                    self.view.clear_selection();
                    true
                }
                KeyCode::Char('g') => {
                    self.state = AppState::Jumping(JumpToState::new());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Jumping(state) => {
                if matches!(key, KeyCode::Char('q' | 'g') | KeyCode::Esc) {
                    self.state = AppState::Calendar;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char('-') => state.handle_input(JumpToInput::Negative),
                        KeyCode::Char('+') => state.handle_input(JumpToInput::Positive),
                        KeyCode::Char(c) => match c.to_digit(10).and_then(|d| u8::try_from(d).ok())
                        {
                            Some(d) => state.handle_input(JumpToInput::Digit(d)),
                            None => JumpToOutput::Invalid,
                        },
                        KeyCode::Backspace | KeyCode::Delete => {
                            state.handle_input(JumpToInput::Backspace)
                        }
                        KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                        _ => JumpToOutput::Invalid,
                    };
                    match output {
                        JumpToOutput::Ok => true,
                        JumpToOutput::Invalid => false,
                        JumpToOutput::Jump(date) => {
                            // Leave the dialog open on a refused date so that
                            // it can be corrected
                            let ok = self.jump_to(date);
                            if ok {
                                self.state = AppState::Calendar;
                            }
                            ok
                        }
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn jump_to(&mut self, date: Date) -> bool {
        match self.view.jump_to(date) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("Cannot jump to {date}: {e}");
                false
            }
        }
    }

    fn move_selection(&mut self, days: i64) -> bool {
        match self.view.move_selection(days, self.today) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("Cannot move selection by {days} days: {e}");
                false
            }
        }
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let agenda = self
            .view
            .selected()
            .map(|date| DayAgenda::new(date, events_on_date(&self.events, date)));
        let agenda_height = agenda.as_ref().map_or(0, DayAgenda::height);
        let [grid_area, agenda_area, legend_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(agenda_height),
            Constraint::Length(LEGEND_LINES),
        ])
        .areas(area);
        MonthView::new(&self.events, self.today, self.week_start).render(
            grid_area,
            buf,
            &mut self.view,
        );
        if let Some(agenda) = agenda {
            agenda.render(agenda_area, buf);
        }
        Legend.render(legend_area, buf);
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        } else if let AppState::Jumping(ref mut state) = self.state {
            JumpTo.render(area, buf, state);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Jumping(JumpToState),
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::EventColor;
    use crate::testing::{buffer_lines, contains_text};
    use time::macros::{date, time};

    fn sample_events() -> Vec<Event> {
        vec![
            Event {
                id: 1,
                title: String::from("Standup"),
                date: date!(2024 - 03 - 15),
                time: time!(9:00),
                duration: 60,
                color: EventColor::Blue,
            },
            Event {
                id: 2,
                title: String::from("Review"),
                date: date!(2024 - 03 - 15),
                time: time!(9:30),
                duration: 30,
                color: EventColor::Purple,
            },
            Event {
                id: 3,
                title: String::from("Offsite"),
                date: date!(2024 - 04 - 10),
                time: time!(10:00),
                duration: 240,
                color: EventColor::Red,
            },
        ]
    }

    fn sample_app() -> App {
        let today = date!(2024 - 03 - 15);
        App::new(sample_events(), today, WeekStart::Sunday, ViewState::new(today))
    }

    fn render(app: &mut App) -> Buffer {
        let area = Rect::new(0, 0, 98, 64);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        buffer
    }

    #[test]
    fn test_initial_screen() {
        let mut app = sample_app();
        let buffer = render(&mut app);
        let lines = buffer_lines(&buffer);
        assert!(lines[0].contains("March 2024"), "title line: {:?}", lines[0]);
        assert!(contains_text(&buffer, "Standup"));
        assert!(contains_text(&buffer, "! Conflicts"));
        assert!(!contains_text(&buffer, "Events for"));
        assert!(lines[63].contains("Time Conflicts"), "legend line: {:?}", lines[63]);
    }

    #[test]
    fn test_month_navigation() {
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::Char('n')));
        let buffer = render(&mut app);
        assert!(buffer_lines(&buffer)[0].contains("April 2024"));
        assert!(contains_text(&buffer, "Offsite"));
        assert!(app.handle_key(KeyCode::PageUp));
        assert!(app.handle_key(KeyCode::Char('[')));
        let buffer = render(&mut app);
        assert!(buffer_lines(&buffer)[0].contains("February 2024"));
    }

    #[test]
    fn test_select_day_shows_agenda() {
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::Right));
        assert_eq!(app.view.selected(), Some(date!(2024 - 03 - 15)));
        let buffer = render(&mut app);
        assert!(contains_text(&buffer, "Events for March 15, 2024"));
        assert!(contains_text(&buffer, "Standup  09:00 • 60 minutes"));
        assert!(contains_text(&buffer, "Review  09:30 • 30 minutes"));
        assert!(app.handle_key(KeyCode::Right));
        let buffer = render(&mut app);
        assert!(contains_text(&buffer, "Events for March 16, 2024"));
        assert!(contains_text(&buffer, "No events scheduled"));
        assert!(app.handle_key(KeyCode::Char('x')));
        let buffer = render(&mut app);
        assert!(!contains_text(&buffer, "Events for"));
    }

    #[test]
    fn test_home_returns_to_today() {
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::Char('n')));
        assert!(app.handle_key(KeyCode::Char('n')));
        assert!(app.handle_key(KeyCode::Home));
        assert_eq!(app.view, {
            let mut view = ViewState::new(date!(2024 - 03 - 15));
            view.select(date!(2024 - 03 - 15));
            view
        });
    }

    #[test]
    fn test_jump_to_date() {
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::Char('g')));
        for c in "20240410".chars() {
            assert!(app.handle_key(KeyCode::Char(c)));
        }
        assert!(!app.handle_key(KeyCode::Char('5')));
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Calendar);
        assert_eq!(app.view.selected(), Some(date!(2024 - 04 - 10)));
        let buffer = render(&mut app);
        assert!(buffer_lines(&buffer)[0].contains("April 2024"));
        assert!(contains_text(&buffer, "Offsite  10:00 • 240 minutes"));
    }

    #[test]
    fn test_jump_past_end_of_time_is_refused() {
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::Char('g')));
        for c in "99991215".chars() {
            assert!(app.handle_key(KeyCode::Char(c)));
        }
        assert!(!app.handle_key(KeyCode::Enter));
        assert!(matches!(app.state, AppState::Jumping(_)));
        assert_eq!(app.view, ViewState::new(date!(2024 - 03 - 15)));
        assert!(app.handle_key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Calendar);
    }

    #[test]
    fn test_jump_cancelled() {
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::Char('g')));
        let buffer = render(&mut app);
        assert!(contains_text(&buffer, "Jump To…"));
        assert!(app.handle_key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Calendar);
        assert_eq!(app.view.selected(), None);
    }

    #[test]
    fn test_help() {
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::Char('?')));
        let buffer = render(&mut app);
        assert!(contains_text(&buffer, " Commands "));
        assert!(app.handle_key(KeyCode::Char('z')));
        assert_eq!(app.state, AppState::Calendar);
    }

    #[test]
    fn test_invalid_key_and_quit() {
        let mut app = sample_app();
        assert!(!app.handle_key(KeyCode::Char('z')));
        assert!(!app.quitting());
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.quitting());
    }
}
