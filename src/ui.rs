//! Rendering of the document and the status bar.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::App;
use crate::document;

/// Render the text area and the status bar, and place the terminal cursor
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Text
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());
    let text_area = chunks[0];

    let buffer = app.buffer();
    let position = buffer.position();
    let height = text_area.height as usize;
    let scroll = scroll_offset(position.line, height);
    let tab_width = app.settings().tab_size.max(1);

    let lines: Vec<Line> = buffer
        .lines()
        .skip(scroll)
        .take(height)
        .map(|line| Line::raw(display_line(line, tab_width)))
        .collect();
    frame.render_widget(Paragraph::new(lines), text_area);

    let status = Paragraph::new(status_line(app))
        .style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_widget(status, chunks[1]);

    if text_area.width == 0 || text_area.height == 0 {
        return;
    }
    let column = buffer
        .lines()
        .nth(position.line)
        .map(|line| display_column(line, position.column, tab_width))
        .unwrap_or(0);
    let x = column.min(text_area.width as usize - 1) as u16;
    let y = (position.line - scroll) as u16;
    frame.set_cursor_position(Position::new(text_area.x + x, text_area.y + y));
}

/// First visible line so that `cursor_line` stays on screen
fn scroll_offset(cursor_line: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    cursor_line.saturating_sub(height - 1)
}

/// Decode a line for display, expanding tabs to the next multiple of
/// `tab_width`, which must be non-zero.
///
/// Invalid UTF-8 is shown as replacement characters.
fn display_line(line: &[u8], tab_width: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut width = 0;
    for ch in String::from_utf8_lossy(line).chars() {
        if ch == '\t' {
            let spaces = tab_width - width % tab_width;
            out.extend(std::iter::repeat(' ').take(spaces));
            width += spaces;
        } else {
            out.push(ch);
            width += ch.width().unwrap_or(0);
        }
    }
    out
}

/// Screen column of the byte offset `column` within `line`
fn display_column(line: &[u8], column: usize, tab_width: usize) -> usize {
    let prefix = display_line(&line[..column.min(line.len())], tab_width);
    prefix.chars().map(|ch| ch.width().unwrap_or(0)).sum()
}

fn status_line(app: &App) -> String {
    let position = app.buffer().position();
    let modified = if app.is_modified() { " [+]" } else { "" };
    let message = app.status().unwrap_or("Ctrl+S save | Esc quit");
    format!(
        " {}{} | {}:{} | {}",
        document::title(app.file_path()),
        modified,
        position.line + 1,
        position.column + 1,
        message
    )
}
