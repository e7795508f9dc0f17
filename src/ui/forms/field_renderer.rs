//! Field rendering strategies

use crate::state::{FieldKey, FormState, FormValues};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bordered input (3 rows) plus one row for the inline error
pub const FIELD_HEIGHT: u16 = 4;

const MASK: char = '•';

/// Draws one field from a read-only snapshot
pub trait FieldRenderer<T: FormValues>: Send + Sync {
    /// Rows needed for `field`, including its error line
    fn height(&self, _field: T::Field) -> u16 {
        FIELD_HEIGHT
    }

    fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &FormState<T>,
        field: T::Field,
        is_active: bool,
    );
}

/// Default renderer: labelled box, masked secrets, choice arrows, error beneath
#[derive(Debug, Clone, Copy, Default)]
pub struct BorderedFieldRenderer;

impl<T: FormValues> FieldRenderer<T> for BorderedFieldRenderer {
    fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &FormState<T>,
        field: T::Field,
        is_active: bool,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let error = state.errors.get(field);
        let border_style = if error.is_some() {
            Style::default().fg(Color::Red)
        } else if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_style(border_style);

        let value = state.values.text(field);
        let input = Paragraph::new(field_line(field, &value, is_active, state.loading));
        frame.render_widget(input.block(block), chunks[0]);

        if let Some(message) = error {
            let line = Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)));
            frame.render_widget(line, chunks[1]);
        }
    }
}

fn field_line<F: FieldKey>(field: F, value: &str, is_active: bool, disabled: bool) -> Line<'static> {
    let text_style = if disabled {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    if field.choices().is_some() {
        let arrow = Style::default().fg(if is_active { Color::Cyan } else { Color::DarkGray });
        return Line::from(vec![
            Span::styled("< ", arrow),
            Span::styled(value.to_string(), text_style.add_modifier(Modifier::BOLD)),
            Span::styled(" >", arrow),
        ]);
    }

    let mut spans = if value.is_empty() && !is_active {
        vec![Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        )]
    } else if field.is_secret() {
        let masked: String = std::iter::repeat(MASK).take(value.chars().count()).collect();
        vec![Span::styled(masked, text_style)]
    } else {
        vec![Span::styled(value.to_string(), text_style)]
    };

    if is_active && !disabled {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}
