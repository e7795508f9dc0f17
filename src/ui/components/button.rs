//! Button component for TUI

use crate::state::{FormState, FormValues};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if is_selected && is_enabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Draws the submit control from a read-only snapshot
pub trait SubmitControlRenderer<T: FormValues>: Send + Sync {
    fn height(&self) -> u16 {
        BUTTON_HEIGHT
    }

    /// `enabled` is false while loading, or while invalid for eagerly-disabled forms
    fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &FormState<T>,
        is_selected: bool,
        enabled: bool,
    );
}

/// Default submit control: a bordered button whose label tracks `loading`
#[derive(Debug, Clone)]
pub struct ButtonRenderer {
    pub label: String,
    pub busy_label: String,
}

impl Default for ButtonRenderer {
    fn default() -> Self {
        Self {
            label: "Submit".to_string(),
            busy_label: "Submitting...".to_string(),
        }
    }
}

impl<T: FormValues> SubmitControlRenderer<T> for ButtonRenderer {
    fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &FormState<T>,
        is_selected: bool,
        enabled: bool,
    ) {
        let content = if state.loading {
            &self.busy_label
        } else {
            &self.label
        };
        render_button(frame, area, content, is_selected, enabled);
    }
}
