pub mod common;
pub mod dom;
pub mod navbar;
pub mod page_state;
pub mod pages;
pub mod scroll;
pub mod sections;
pub mod theme;
pub mod visibility;

pub use navbar::Navbar;
pub use page_state::{PortfolioState, provide_portfolio_state, use_portfolio_state};
pub use theme::{ThemeContext, ThemeToggle, provide_theme_context, use_theme_context};
