//! Glue between ratatui buffers and a plain `Write` sink.
//!
//! Views are drawn into an off-screen [`Buffer`] and then written row by row, so the
//! output scrolls like ordinary text instead of taking over the terminal.

use std::io::Write;

use crossterm::style::{Attribute, ContentStyle};
use oikonomia_common::Result;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier};

use super::theme::Theme;

/// Converts a text width to terminal columns, saturating.
pub fn cols(width: usize) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// A `width`-column slice of `area`, horizontally centred.
pub fn centered(area: Rect, width: u16) -> Rect {
    let [slot] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    slot
}

/// Writes every row of `buf` to `out` with trailing blanks trimmed.
///
/// Consecutive cells sharing a foreground colour and modifier are emitted as one
/// styled run. With an uncoloured theme the text is written bare.
pub fn write_buffer(buf: &Buffer, theme: &Theme, out: &mut dyn Write) -> Result<()> {
    let area = buf.area;
    for y in area.top()..area.bottom() {
        let mut runs: Vec<(String, Color, Modifier)> = Vec::new();
        for x in area.left()..area.right() {
            let Some(cell) = buf.cell((x, y)) else {
                continue;
            };
            match runs.last_mut() {
                Some((text, fg, modifier)) if *fg == cell.fg && *modifier == cell.modifier => {
                    text.push_str(cell.symbol())
                }
                _ => runs.push((cell.symbol().to_string(), cell.fg, cell.modifier)),
            }
        }
        trim_trailing_blanks(&mut runs);

        let line: String = runs
            .iter()
            .map(|(text, fg, modifier)| styled(text, *fg, *modifier, theme))
            .collect();
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn trim_trailing_blanks(runs: &mut Vec<(String, Color, Modifier)>) {
    while let Some((text, ..)) = runs.last_mut() {
        let kept = text.trim_end().len();
        if kept > 0 {
            text.truncate(kept);
            return;
        }
        runs.pop();
    }
}

fn styled(text: &str, fg: Color, modifier: Modifier, theme: &Theme) -> String {
    if !theme.colored || (fg == Color::Reset && modifier.is_empty()) {
        return text.to_string();
    }
    let mut style = ContentStyle::new();
    if fg != Color::Reset {
        style.foreground_color = Some(fg.into());
    }
    if modifier.contains(Modifier::BOLD) {
        style.attributes.set(Attribute::Bold);
    }
    if modifier.contains(Modifier::ITALIC) {
        style.attributes.set(Attribute::Italic);
    }
    style.apply(text).to_string()
}
