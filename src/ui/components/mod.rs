//! Reusable form components.

mod input_field;
mod select_field;

pub use input_field::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
pub use select_field::{render_select_field, SelectFieldConfig, SELECT_FIELD_HEIGHT};
