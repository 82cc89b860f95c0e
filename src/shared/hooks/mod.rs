// Custom Dioxus hooks
pub mod use_query_state;
pub mod use_theme;

pub use use_query_state::{use_query_state, QueryController};
pub use use_theme::{use_theme, Theme};
