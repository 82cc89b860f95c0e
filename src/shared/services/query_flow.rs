//! Async drivers turning backend calls into state actions
//!
//! These never fail: every outcome becomes a `QueryAction` for
//! `QueryState::apply`.

use crate::shared::logging;
use crate::shared::services::KnowledgeBaseApi;
use crate::shared::state::{PendingQuery, QueryAction};

/// Loads the collection list once on mount
pub async fn fetch_collections<A: KnowledgeBaseApi + ?Sized>(api: &A) -> QueryAction {
    match api.list_collections().await {
        Ok(collections) => QueryAction::CollectionsLoaded(collections),
        Err(e) => {
            logging::log_collections_error(&e);
            QueryAction::CollectionsFailed
        }
    }
}

/// Sends a submitted query, tagging the outcome with its sequence number
pub async fn run_query<A: KnowledgeBaseApi + ?Sized>(api: &A, pending: PendingQuery) -> QueryAction {
    let outcome = api.query(&pending.request).await;
    QueryAction::QueryResolved {
        seq: pending.seq,
        outcome,
    }
}
