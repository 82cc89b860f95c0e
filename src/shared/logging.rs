//! Structured logging helpers
//!
//! Every client event is logged through one of these functions so the
//! `operation` field stays consistent across the browser console and native
//! subscribers.

use crate::shared::errors::AppError;

/// Operation tag attached to each record
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    CollectionLoad,
    QuerySubmit,
    QueryResolve,
    ThemePersist,
    MarkdownRender,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::CollectionLoad => "collection_load",
            LogOperation::QuerySubmit => "query_submit",
            LogOperation::QueryResolve => "query_resolve",
            LogOperation::ThemePersist => "theme_persist",
            LogOperation::MarkdownRender => "markdown_render",
        }
    }
}

pub fn log_collections_loaded(total: usize, visible: usize, default: Option<&str>) {
    tracing::info!(
        operation = LogOperation::CollectionLoad.as_str(),
        total_collections = total,
        visible_collections = visible,
        default_selection = default.unwrap_or("all"),
        "Collections loaded"
    );
}

/// Collection fetch failures never reach the user
pub fn log_collections_error(error: &AppError) {
    tracing::error!(
        operation = LogOperation::CollectionLoad.as_str(),
        error = %error,
        "Error fetching collections"
    );
}

pub fn log_query_submitted(seq: u64, collection: Option<&str>, query_len: usize) {
    tracing::info!(
        operation = LogOperation::QuerySubmit.as_str(),
        seq = seq,
        collection = collection.unwrap_or("all"),
        query_len = query_len,
        "Submitting query"
    );
}

pub fn log_query_superseded(previous_seq: u64, seq: u64) {
    tracing::debug!(
        operation = LogOperation::QuerySubmit.as_str(),
        previous_seq = previous_seq,
        seq = seq,
        "Query submitted while another was pending, previous response will be dropped"
    );
}

pub fn log_query_answered(seq: u64, answer_len: usize, source_count: usize) {
    tracing::info!(
        operation = LogOperation::QueryResolve.as_str(),
        seq = seq,
        answer_len = answer_len,
        source_count = source_count,
        "Query answered"
    );
}

pub fn log_query_error(seq: u64, error: &AppError) {
    tracing::error!(
        operation = LogOperation::QueryResolve.as_str(),
        seq = seq,
        error = %error,
        "Error querying"
    );
}

pub fn log_stale_response(seq: u64, latest_seq: u64) {
    tracing::warn!(
        operation = LogOperation::QueryResolve.as_str(),
        seq = seq,
        latest_seq = latest_seq,
        "Discarding stale query response"
    );
}

pub fn log_theme_persist_error(key: &str, error: &AppError) {
    tracing::warn!(
        operation = LogOperation::ThemePersist.as_str(),
        key = key,
        error = %error,
        "Theme preference not persisted"
    );
}

pub fn log_unknown_language(language: &str) {
    tracing::debug!(
        operation = LogOperation::MarkdownRender.as_str(),
        language = language,
        "No grammar for code fence, highlighting as plain text"
    );
}
