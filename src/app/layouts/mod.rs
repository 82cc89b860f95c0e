pub mod footer;
pub mod navbar;

pub use footer::AppFooter;
pub use navbar::AppHeader;
