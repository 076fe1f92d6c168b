use crate::event::Event;
use crate::theme::{
    agenda::{DETAIL_STYLE, EMPTY_STYLE, TITLE_STYLE},
    BASE_STYLE, MORE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use time::Date;

/// Tallest the panel is allowed to grow, borders included
const MAX_HEIGHT: u16 = 10;

/// Panel listing the events on the selected day, with a `+N more` line when
/// they do not all fit
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DayAgenda<'a> {
    date: Date,
    events: Vec<&'a Event>,
}

impl<'a> DayAgenda<'a> {
    pub(crate) fn new(date: Date, events: Vec<&'a Event>) -> Self {
        DayAgenda { date, events }
    }

    /// Number of lines the panel wants, borders included
    pub(crate) fn height(&self) -> u16 {
        u16::try_from(self.events.len().max(1))
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(MAX_HEIGHT)
    }

    fn title(&self) -> String {
        format!(
            " Events for {} {}, {} ",
            self.date.month(),
            self.date.day(),
            self.date.year()
        )
    }
}

impl Widget for DayAgenda<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Line::styled(self.title(), TITLE_STYLE))
            .style(BASE_STYLE);
        let lines = if self.events.is_empty() {
            vec![Line::styled("No events scheduled", EMPTY_STYLE)]
        } else {
            let rows = usize::from(block.inner(area).height).max(1);
            // One row goes to the overflow line when not everything fits
            let shown = if self.events.len() > rows {
                rows - 1
            } else {
                self.events.len()
            };
            let mut lines = self.events[..shown]
                .iter()
                .map(|ev| {
                    Line::from(vec![
                        Span::styled("● ", BASE_STYLE.fg(ev.color.display_color())),
                        Span::styled(ev.title.clone(), TITLE_STYLE),
                        Span::styled(
                            format!("  {} • {} minutes", ev.time_label(), ev.duration),
                            DETAIL_STYLE,
                        ),
                    ])
                })
                .collect::<Vec<_>>();
            if shown < self.events.len() {
                lines.push(Line::styled(
                    format!("+{} more", self.events.len() - shown),
                    MORE_STYLE,
                ));
            }
            lines
        };
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
