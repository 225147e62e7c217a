//! Small rendering helpers shared by the form widgets

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draw option rows with the cursor row highlighted while the picker has focus.
///
/// The list scrolls so the cursor row stays inside `area`.
pub fn render_option_rows(
    frame: &mut Frame,
    area: Rect,
    rows: Vec<ListItem>,
    cursor: usize,
    is_active: bool,
) {
    let highlight = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(List::new(rows).highlight_style(highlight), area, &mut state);
}

/// One-line colored status text in place of a list
pub fn render_notice(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(color))),
        area,
    );
}
