use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

static BINDINGS: &[(&str, &str)] = &[
    ("n, ], PAGE DOWN", "Show the next month"),
    ("p, [, PAGE UP", "Show the previous month"),
    ("ARROWS, h/j/k/l", "Move the selected day"),
    ("0, HOME", "Select today"),
    ("x, BACKSPACE", "Clear the selection"),
    ("g", "Input date to jump to"),
    ("?", "Show this help"),
    ("q, ESC", "Quit"),
];

static FOOTER: &str = "Press the Any Key to dismiss.";

/// Width of the key column
const KEYS_WIDTH: usize = 17;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Help {
    fn text() -> Text<'static> {
        let mut lines = BINDINGS
            .iter()
            .map(|(keys, action)| Line::raw(format!("{keys:<KEYS_WIDTH$}{action}")))
            .collect::<Vec<_>>();
        lines.push(Line::raw(""));
        lines.push(Line::raw(FOOTER));
        Text::from(lines)
    }
}

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Help::text();
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .min(area.height)
            .saturating_add(2);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .min(area.width)
            .saturating_add(2);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(help_area);
        // Leave a column of blank padding on either side of the border
        let outer_area = Rect {
            x: help_area.x.saturating_sub(1),
            y: help_area.y,
            width: help_area.width.saturating_add(2),
            height: help_area.height,
        }
        .intersection(area);
        Clear.render(outer_area, buf);
        Block::new().style(self.0).render(outer_area, buf);
        Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Commands ")
                    .title_alignment(Alignment::Center),
            )
            .style(self.0)
            .render(help_area, buf);
    }
}
