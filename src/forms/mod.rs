pub mod controller;
pub mod validation;

pub use controller::FormController;
pub use validation::{FieldError, FieldValues, Schema, ValidationResult};
