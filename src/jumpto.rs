use crate::theme::{
    jumpto::{READY_ENTER_STYLE, UNFILLED_CELL_STYLE},
    BASE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Margin, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, StatefulWidget, Widget},
};
use time::{Date, Month};

const OUTER_WIDTH: u16 = 17;
const OUTER_HEIGHT: u16 = 8;

/// Number of digits in a full date; once this many have been entered the
/// cursor rests on the `[ENTER]` button
const ENTER_POS: usize = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct JumpTo;

impl StatefulWidget for JumpTo {
    type State = JumpToState;

    /*
     * .................
     * .┌─ Jump To… ──┐.
     * .│             │.
     * .│ -YYYY-MM-DD │.
     * .│             │.
     * .│   [ENTER]   │.
     * .└─────────────┘.
     * .................
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [outer_area] = Layout::horizontal([OUTER_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [outer_area] = Layout::vertical([OUTER_HEIGHT])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        let block_area = outer_area.inner(Margin::new(1, 1));
        Block::bordered()
            .title(" Jump To… ")
            .title_alignment(Alignment::Center)
            .render(block_area, buf);
        let text_area = block_area.inner(Margin::new(1, 1));
        state.to_text().render(text_area, buf);
    }
}

/// Digits entered so far in the jump-to dialog
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct JumpToState {
    negative: bool,
    digits: [Option<u8>; ENTER_POS],
    pos: usize,
}

impl JumpToState {
    pub(crate) fn new() -> JumpToState {
        JumpToState::default()
    }

    fn year_digits(&self) -> &[Option<u8>] {
        &self.digits[..4]
    }

    fn month_digits(&self) -> &[Option<u8>] {
        &self.digits[4..6]
    }

    fn day_digits(&self) -> &[Option<u8>] {
        &self.digits[6..]
    }

    fn to_text(self) -> Text<'static> {
        Text::from_iter([
            Line::styled("", BASE_STYLE),
            self.to_line(),
            Line::styled("", BASE_STYLE),
            // Style a span and convert it to a line rather than creating a
            // styled line directly so that only the "[ENTER]" text and not any
            // of its centering padding will be underlined:
            Line::from(Span::styled(
                "[ENTER]",
                if self.pos == ENTER_POS {
                    READY_ENTER_STYLE
                } else {
                    BASE_STYLE
                },
            )),
        ])
        .centered()
    }

    fn to_line(self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            if self.negative { "-" } else { " " },
            BASE_STYLE,
        )];
        for (i, (fallback, digits)) in [
            ("Y", self.year_digits()),
            ("M", self.month_digits()),
            ("D", self.day_digits()),
        ]
        .into_iter()
        .enumerate()
        {
            if i > 0 {
                spans.push(Span::styled("-", BASE_STYLE));
            }
            spans.extend(digits.iter().map(|dg| match dg {
                Some(d) => Span::styled(d.to_string(), BASE_STYLE),
                None => Span::styled(fallback, UNFILLED_CELL_STYLE),
            }));
        }
        Line::from_iter(spans)
    }

    pub(crate) fn handle_input(&mut self, input: JumpToInput) -> JumpToOutput {
        match (input, self.pos) {
            (JumpToInput::Negative, 0) => {
                self.negative = !self.negative;
                JumpToOutput::Ok
            }
            (JumpToInput::Positive, 0) => {
                self.negative = false;
                JumpToOutput::Ok
            }
            (JumpToInput::Digit(d), 0..ENTER_POS) if d < 10 => {
                self.digits[self.pos] = Some(d);
                self.pos += 1;
                JumpToOutput::Ok
            }
            (JumpToInput::Backspace, 1..) => {
                self.pos -= 1;
                self.digits[self.pos] = None;
                JumpToOutput::Ok
            }
            (JumpToInput::Enter, ENTER_POS) => match self.to_date() {
                Some(date) => JumpToOutput::Jump(date),
                None => JumpToOutput::Invalid,
            },
            _ => JumpToOutput::Invalid,
        }
    }

    fn to_date(self) -> Option<Date> {
        let year = i32::try_from(number(self.year_digits())?).ok()?;
        let year = if self.negative { -year } else { year };
        let month = Month::try_from(u8::try_from(number(self.month_digits())?).ok()?).ok()?;
        let day = u8::try_from(number(self.day_digits())?).ok()?;
        Date::from_calendar_date(year, month, day).ok()
    }
}

// Returns `None` if any digit has not been entered yet
fn number(digits: &[Option<u8>]) -> Option<u32> {
    digits
        .iter()
        .try_fold(0u32, |acc, &d| Some(acc * 10 + u32::from(d?)))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToInput {
    Negative,
    Positive,
    Digit(u8),
    Backspace,
    Enter,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToOutput {
    Ok,
    Invalid,
    Jump(Date),
}
