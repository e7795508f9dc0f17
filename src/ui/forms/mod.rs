//! Form rendering module
//!
//! - `field_renderer`: field rendering strategies
//! - `signup_form`: the framed signup screen

mod field_renderer;
mod signup_form;

pub use field_renderer::{BorderedFieldRenderer, FieldRenderer, FIELD_HEIGHT};
pub use signup_form::{draw_signup_form, signup_form_height};
