//! Submission confirmation dialog

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

pub const SUCCESS_MESSAGE: &str = "Dados enviados com sucesso!";

/// Render the success dialog; dismissing it resets the form
pub fn render_success_dialog(frame: &mut Frame) {
    let hint = vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" / "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" para fechar"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "TO GO",
            border_color: Color::Green,
            message: SUCCESS_MESSAGE,
            button: Some("OK"),
            hint: Some(hint),
            max_width: 50,
        },
    );
}
