//! UI module for rendering the TUI

mod components;
mod forms;

pub use components::{render_button, ButtonRenderer, SubmitControlRenderer, BUTTON_HEIGHT};
pub use forms::{BorderedFieldRenderer, FieldRenderer, FIELD_HEIGHT};

use crate::app::App;
use crate::state::FormValues;
use ratatui::{layout::Rect, Frame};

/// Widest the form is drawn, like a narrow page column
const MAX_FORM_WIDTH: u16 = 44;

/// Main draw function
pub fn draw<T: FormValues>(frame: &mut Frame, app: &App<T>) {
    let area = frame.area();
    let width = area.width.min(MAX_FORM_WIDTH);
    let height = area.height.min(forms::signup_form_height(app));
    let form_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    forms::draw_signup_form(frame, form_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormController;
    use crate::state::{GenderedSignupValues, SignupValues};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen<T: FormValues>(app: &App<T>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draws_signup_form() {
        let app = App::new(FormController::new(SignupValues::default()));
        let out = screen(&app);
        assert!(out.contains("Sign up"));
        assert!(out.contains("Username"));
        assert!(out.contains("Password"));
        assert!(out.contains("Submit"));
        assert!(!out.contains("Gender"));
    }

    #[test]
    fn test_draws_gender_field_for_gendered_shape() {
        let app = App::new(FormController::new(GenderedSignupValues::default()));
        let out = screen(&app);
        assert!(out.contains("Gender"));
        assert!(out.contains("< male >"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = App::new(FormController::new(SignupValues::default()));
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}
