//! Layout components (header, status bar)

use crate::app::App;
use crate::state::{FlowPhase, FormFocus, OptionList};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, body and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = 3u16.min(area.height);
    let header = Rect {
        height: header_height,
        ..area
    };
    let status = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1.min(area.height),
        ..area
    };
    let body = Rect {
        y: area.y + header_height,
        height: area.height.saturating_sub(header_height + 1),
        ..area
    };
    (header, body, status)
}

/// Draw the title banner
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "TO GO",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(title, area);
}

fn list_indicator(label: &str, list: &OptionList) -> Span<'static> {
    let (symbol, color) = match list {
        OptionList::Loading => ("…", Color::Yellow),
        OptionList::Loaded(_) => ("●", Color::Green),
        OptionList::Unavailable(_) => ("○", Color::Red),
    };
    Span::styled(format!(" {symbol} {label} "), Style::default().fg(color))
}

/// Key hints for whatever currently has focus
fn focus_hints(app: &App) -> &'static str {
    if app.state.phase == FlowPhase::Submitted {
        return "Enter/Esc: fechar";
    }
    match app.state.form.focus() {
        FormFocus::Countries | FormFocus::Cities => {
            "↑↓: navegar  Espaço: selecionar  Tab: próximo  ^S: enviar"
        }
        FormFocus::Submit => "Enter: enviar  Shift+Tab: voltar",
        _ => "Tab: próximo  Shift+Tab: anterior  ^S: enviar",
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let spans = vec![
        list_indicator("Países", &app.state.countries),
        list_indicator("Cidades", &app.state.cities),
        Span::raw("| "),
        Span::styled(focus_hints(app), Style::default().fg(Color::Gray)),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C: sair ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
