//! Reusable UI components

mod button;

pub use button::{render_button, ButtonRenderer, SubmitControlRenderer, BUTTON_HEIGHT};
