//! Application pages
//!
//! - Portfolio (the whole site, one scrolling page)
//! - Not found

mod not_found;
mod portfolio;

pub use not_found::NotFoundPage;
pub use portfolio::PortfolioPage;
