pub mod query_page;

pub use query_page::{App, QueryPage};
