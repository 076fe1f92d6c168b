use ratatui::buffer::{Buffer, Cell};

/// Returns the text of each row of `buf`, with styling discarded
pub(crate) fn buffer_lines(buf: &Buffer) -> Vec<String> {
    buf.content()
        .chunks(usize::from(buf.area.width).max(1))
        .map(|row| row.iter().map(Cell::symbol).collect::<String>())
        .collect()
}

pub(crate) fn contains_text(buf: &Buffer, needle: &str) -> bool {
    buffer_lines(buf).iter().any(|line| line.contains(needle))
}
