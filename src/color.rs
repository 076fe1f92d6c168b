use ratatui::style::Color;

/// The fixed palette an event can be tagged with.  Tags outside the palette
/// resolve to [`EventColor::Gray`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) enum EventColor {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Indigo,
    Pink,
    #[default]
    Gray,
}

impl EventColor {
    pub(crate) fn from_tag(tag: &str) -> EventColor {
        match tag {
            "blue" => EventColor::Blue,
            "green" => EventColor::Green,
            "purple" => EventColor::Purple,
            "orange" => EventColor::Orange,
            "red" => EventColor::Red,
            "indigo" => EventColor::Indigo,
            "pink" => EventColor::Pink,
            _ => EventColor::Gray,
        }
    }

    pub(crate) fn display_color(self) -> Color {
        match self {
            EventColor::Blue => Color::Rgb(0x3b, 0x82, 0xf6),
            EventColor::Green => Color::Rgb(0x22, 0xc5, 0x5e),
            EventColor::Purple => Color::Rgb(0xa8, 0x55, 0xf7),
            EventColor::Orange => Color::Rgb(0xf9, 0x73, 0x16),
            EventColor::Red => Color::Rgb(0xef, 0x44, 0x44),
            EventColor::Indigo => Color::Rgb(0x63, 0x66, 0xf1),
            EventColor::Pink => Color::Rgb(0xec, 0x48, 0x99),
            EventColor::Gray => Color::Rgb(0x6b, 0x72, 0x80),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert_eq!(EventColor::from_tag("blue"), EventColor::Blue);
        assert_eq!(EventColor::from_tag("indigo"), EventColor::Indigo);
        assert_eq!(EventColor::from_tag("pink"), EventColor::Pink);
        assert_eq!(
            EventColor::from_tag("blue").display_color(),
            Color::Rgb(0x3b, 0x82, 0xf6)
        );
    }

    #[test]
    fn test_unknown_tag_falls_back() {
        assert_eq!(EventColor::from_tag("unknown-tag"), EventColor::Gray);
        assert_eq!(
            EventColor::from_tag("unknown-tag").display_color(),
            EventColor::default().display_color()
        );
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert_eq!(EventColor::from_tag("Blue"), EventColor::Gray);
        assert_eq!(EventColor::from_tag(""), EventColor::Gray);
    }
}
