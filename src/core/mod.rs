//! Framework-independent page state: sections, visibility, theme and the contact form

pub mod catalog;
pub mod config;
pub mod contact;
pub mod delivery;
mod section;
pub mod theme;
mod visibility;
#[cfg(test)]
mod tests;

pub use section::*;
pub use visibility::*;
