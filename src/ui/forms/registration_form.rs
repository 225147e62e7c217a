//! Registration form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use super::multi_select::draw_multi_select;
use crate::app::App;
use crate::state::{Form, FormFocus, OptionKind};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

/// Shown while the submit button is disabled
const INCOMPLETE_HINT: &str = "Preencha todos os campos para enviar o formulário.";

/// Draw the full form: text fields, pickers, hint and submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(FIELD_HEIGHT * 4), // Fields and pickers
            Constraint::Length(1),             // Hint
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .margin(1)
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    draw_text_fields(frame, columns[0], app);
    draw_pickers(frame, columns[1], app);

    let disabled = app.state.is_submit_disabled();
    if disabled {
        let hint = Paragraph::new(Span::styled(
            INCOMPLETE_HINT,
            Style::default().fg(Color::Yellow),
        ));
        frame.render_widget(hint, rows[1]);
    }

    let button_area = Rect {
        width: rows[2].width.min(14),
        ..rows[2]
    };
    render_button(
        frame,
        button_area,
        "Enviar",
        app.state.form.focus() == FormFocus::Submit,
        !disabled,
    );
}

fn draw_text_fields(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let errors = form.visible_errors();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    for (index, chunk) in chunks.iter().take(4).enumerate() {
        if let Some(field) = form.get_field(index) {
            let focus = FormFocus::from_index(index);
            draw_field(
                frame,
                *chunk,
                field,
                form.focus() == focus,
                errors.for_focus(focus),
            );
        }
    }
}

fn draw_pickers(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_multi_select(
        frame,
        chunks[0],
        &form.countries,
        app.state.option_list(OptionKind::Countries),
        form.focus() == FormFocus::Countries,
    );
    draw_multi_select(
        frame,
        chunks[1],
        &form.cities,
        app.state.option_list(OptionKind::Cities),
        form.focus() == FormFocus::Cities,
    );
}
