pub mod common;
pub mod error;
pub mod grid;
pub mod guard;
pub mod layout;
pub mod text_field;
pub mod toast;
