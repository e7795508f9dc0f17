//! Form state module
//!
//! - `field`: value-shape, field-key and error-map contracts
//! - `shapes`: the signup and signup-with-gender value shapes
//! - `form_state`: the snapshot type and the store that owns it

mod field;
mod form_state;
mod shapes;

pub use field::*;
pub use form_state::*;
pub use shapes::*;
