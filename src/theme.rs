use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const HINT_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE
    .fg(Color::Gray)
    .add_modifier(Modifier::BOLD);

pub(crate) const CELL_BORDER_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const TODAY_COLOR: Color = Color::Rgb(0x63, 0x66, 0xf1);

pub(crate) const TODAY_BORDER_STYLE: Style = BASE_STYLE.fg(TODAY_COLOR);

pub(crate) const SELECTED_BORDER_STYLE: Style = BASE_STYLE
    .fg(Color::LightBlue)
    .add_modifier(Modifier::BOLD);

pub(crate) const DAY_NUMBER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const TODAY_NUMBER_STYLE: Style = BASE_STYLE
    .fg(TODAY_COLOR)
    .add_modifier(Modifier::BOLD);

pub(crate) const OUTSIDE_MONTH_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const CHIP_STYLE: Style = Style::new().fg(Color::White);

pub(crate) const MORE_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub(crate) const CONFLICT_COLOR: Color = Color::Rgb(0xdc, 0x26, 0x26);

pub(crate) const CONFLICT_STYLE: Style = BASE_STYLE
    .fg(CONFLICT_COLOR)
    .add_modifier(Modifier::BOLD);

pub(crate) mod agenda {
    use super::*;

    pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const DETAIL_STYLE: Style = BASE_STYLE.fg(Color::Gray);

    pub(crate) const EMPTY_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);
}

pub(crate) mod jumpto {
    use super::*;

    pub(crate) const UNFILLED_CELL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}
