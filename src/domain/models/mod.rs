// Domain models (backend contract + selection rules)
// Pure Rust, no framework dependencies

pub mod collection;
pub mod query;

pub use collection::{
    collection_badge_modifier, collection_label, CollectionPolicy, CollectionsResponse,
};
pub use query::{QueryRequest, QueryResult};
