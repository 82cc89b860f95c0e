// Shared services
// Backend access, query drivers and preference storage

pub mod api_service;
pub mod preferences;
pub mod query_flow;

use async_trait::async_trait;

use crate::domain::models::{QueryRequest, QueryResult};
use crate::shared::errors::Result;

pub use api_service::ApiService;
pub use preferences::{BrowserStorage, PreferenceStore};
pub use query_flow::{fetch_collections, run_query};

/// Backend endpoints consumed by the client
///
/// Not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait KnowledgeBaseApi {
    /// `GET /collections`
    async fn list_collections(&self) -> Result<Vec<String>>;

    /// `POST /query`
    async fn query(&self, request: &QueryRequest) -> Result<QueryResult>;
}
