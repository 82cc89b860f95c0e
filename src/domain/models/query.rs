use serde::{Deserialize, Serialize};

use crate::shared::constants::QUERY_ERROR_MESSAGE;

/// Request body of `POST /query`
///
/// `collection: None` serializes as `null`, which the backend reads as
/// "search every collection".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    pub collection: Option<String>,
    pub top_k: usize,
}

/// Response body of `POST /query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Markdown answer
    pub answer: String,
    /// Source passages; opaque to the client
    #[serde(default)]
    pub sources: Vec<serde_json::Value>,
}

impl QueryResult {
    /// Pseudo-answer shown for any failed query
    pub fn fallback() -> Self {
        Self {
            answer: QUERY_ERROR_MESSAGE.to_string(),
            sources: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_null_collection() {
        let request = QueryRequest {
            query: "how do I deploy?".to_string(),
            collection: None,
            top_k: 5,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "query": "how do I deploy?", "collection": null, "top_k": 5 })
        );
    }

    #[test]
    fn test_result_keeps_opaque_sources() {
        let result: QueryResult = serde_json::from_value(json!({
            "answer": "**bold**",
            "sources": [{ "collection": "docs", "score": 0.82 }, "raw"]
        }))
        .unwrap();
        assert_eq!(result.answer, "**bold**");
        assert_eq!(result.sources.len(), 2);
    }

    #[test]
    fn test_result_without_sources() {
        let result: QueryResult = serde_json::from_str(r#"{"answer":"ok"}"#).unwrap();
        assert!(result.sources.is_empty());
    }

    #[test]
    fn test_fallback_text() {
        let fallback = QueryResult::fallback();
        assert_eq!(fallback.answer, "Error retrieving response. Please try again.");
        assert!(fallback.sources.is_empty());
    }
}
