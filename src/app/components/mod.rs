pub mod answer_view;
pub mod collection_selector;
pub mod common;
pub mod query_form;
pub mod theme_toggle;

pub use answer_view::AnswerView;
pub use collection_selector::CollectionSelector;
pub use common::LoadingText;
pub use query_form::QueryForm;
pub use theme_toggle::ThemeToggle;
