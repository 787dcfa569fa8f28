//! Common reusable UI components

pub mod form;
pub mod message;

pub use form::{FormField, TextAreaField};
pub use message::StatusMessage;
