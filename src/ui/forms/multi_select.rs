//! Multi-select picker rendering

use crate::state::{MultiSelect, OptionList};
use crate::ui::widgets::{render_notice, render_option_rows};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw a picker: current selection on top, option list below
pub fn draw_multi_select(
    frame: &mut Frame,
    area: Rect,
    select: &MultiSelect,
    list: &OptionList,
    is_active: bool,
) {
    let border_color = if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!(" {} ", select.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let summary = if select.is_empty() {
        Line::from(Span::styled(
            select.placeholder.as_str(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            select.selected.join(", "),
            Style::default().fg(Color::Green),
        ))
    };
    frame.render_widget(
        Paragraph::new(summary).wrap(Wrap { trim: true }),
        chunks[0],
    );

    match list {
        OptionList::Loading => {
            render_notice(frame, chunks[1], "Carregando...", Color::Yellow);
        }
        OptionList::Unavailable(_) => {
            render_notice(frame, chunks[1], "Lista indisponível", Color::Red);
        }
        OptionList::Loaded(options) if options.is_empty() => {
            render_notice(frame, chunks[1], "Nenhuma opção", Color::DarkGray);
        }
        OptionList::Loaded(options) => {
            let items: Vec<ListItem> = options
                .iter()
                .map(|option| {
                    let mark = if select.is_selected(option) { "[x] " } else { "[ ] " };
                    ListItem::new(format!("{mark}{}", option.label()))
                })
                .collect();
            render_option_rows(frame, chunks[1], items, select.cursor, is_active);
        }
    }
}
