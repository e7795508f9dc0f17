//! Framed signup screen: title, the form itself, help text and status

use crate::app::App;
use crate::state::FormValues;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the signup form inside a titled frame
pub fn draw_signup_form<T: FormValues>(frame: &mut Frame, area: Rect, app: &App<T>) {
    let block = Block::default()
        .title(" Sign up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.controller.height()), // Fields, button, form error
            Constraint::Length(1),                       // Status
            Constraint::Length(2),                       // Help text
        ])
        .margin(1)
        .split(area);

    app.controller.render(frame, chunks[0], app.focus);

    if let Some(message) = &app.status_message {
        let status = Paragraph::new(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Green),
        ));
        frame.render_widget(status, chunks[1]);
    }

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next  "),
        Span::styled("Ctrl+S", Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(if app.is_submitting() {
            ": cancel"
        } else {
            ": quit"
        }),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}

/// Rows the framed form needs, borders and margins included
pub fn signup_form_height<T: FormValues>(app: &App<T>) -> u16 {
    app.controller.height() + 1 + 2 + 2
}
