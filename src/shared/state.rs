//! Query page state container
//!
//! All UI state for the query page lives in `QueryState` and changes only
//! through `QueryState::apply`. Transitions are synchronous and pure apart
//! from logging; network work is returned to the caller as a `PendingQuery`
//! and its outcome comes back as `QueryAction::QueryResolved`.
//!
//! Every submission gets a sequence number. A resolution is applied only if
//! it carries the latest one, so a slow response can never overwrite the
//! answer to a newer question.

use crate::config::AppConfig;
use crate::domain::models::{CollectionPolicy, QueryRequest, QueryResult};
use crate::shared::errors::AppError;
use crate::shared::logging;

/// Events the query page reacts to
#[derive(Debug)]
pub enum QueryAction {
    CollectionsLoaded(Vec<String>),
    CollectionsFailed,
    /// `None` selects "All Collections"
    SelectCollection(Option<String>),
    InputChanged(String),
    Submit,
    QueryResolved {
        seq: u64,
        outcome: Result<QueryResult, AppError>,
    },
}

/// Request the caller must send after a successful `Submit`
#[derive(Debug, Clone, PartialEq)]
pub struct PendingQuery {
    pub seq: u64,
    pub request: QueryRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    policy: CollectionPolicy,
    top_k: usize,
    collections: Vec<String>,
    selected: Option<String>,
    input: String,
    result: Option<QueryResult>,
    is_loading: bool,
    latest_seq: u64,
}

impl QueryState {
    pub fn new(policy: CollectionPolicy, top_k: usize) -> Self {
        Self {
            policy,
            top_k,
            collections: Vec::new(),
            selected: None,
            input: String::new(),
            result: None,
            is_loading: false,
            latest_seq: 0,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.collection_policy(), config.top_k)
    }

    /// Selectable collections (reserved one already removed)
    pub fn collections(&self) -> &[String] {
        &self.collections
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn result(&self) -> Option<&QueryResult> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether the submit button should be enabled
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.input.trim().is_empty()
    }

    pub fn apply(&mut self, action: QueryAction) -> Option<PendingQuery> {
        match action {
            QueryAction::CollectionsLoaded(collections) => {
                self.collections = self.policy.visible(&collections);
                let default = self.policy.default_selection(&collections);
                self.set_selection(default);
                logging::log_collections_loaded(
                    collections.len(),
                    self.collections.len(),
                    self.selected(),
                );
                None
            }
            QueryAction::CollectionsFailed => {
                self.set_selection(None);
                None
            }
            QueryAction::SelectCollection(selection) => {
                self.set_selection(selection);
                None
            }
            QueryAction::InputChanged(input) => {
                self.input = input;
                None
            }
            QueryAction::Submit => self.submit(),
            QueryAction::QueryResolved { seq, outcome } => {
                self.resolve(seq, outcome);
                None
            }
        }
    }

    fn set_selection(&mut self, selection: Option<String>) {
        self.selected = self.policy.guard(selection);
    }

    fn submit(&mut self) -> Option<PendingQuery> {
        let query = self.input.trim().to_string();
        if query.is_empty() {
            return None;
        }

        if self.is_loading {
            logging::log_query_superseded(self.latest_seq, self.latest_seq + 1);
        }

        self.latest_seq += 1;
        self.is_loading = true;
        self.result = None;

        let request = QueryRequest {
            query,
            collection: self.selected.clone(),
            top_k: self.top_k,
        };
        logging::log_query_submitted(
            self.latest_seq,
            request.collection.as_deref(),
            request.query.len(),
        );

        Some(PendingQuery {
            seq: self.latest_seq,
            request,
        })
    }

    fn resolve(&mut self, seq: u64, outcome: Result<QueryResult, AppError>) {
        if seq != self.latest_seq {
            logging::log_stale_response(seq, self.latest_seq);
            return;
        }

        let result = match outcome {
            Ok(result) => {
                logging::log_query_answered(seq, result.answer.len(), result.sources.len());
                result
            }
            Err(e) => {
                logging::log_query_error(seq, &e);
                QueryResult::fallback()
            }
        };

        self.result = Some(result);
        self.is_loading = false;
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::QUERY_ERROR_MESSAGE;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn answer(text: &str) -> QueryResult {
        QueryResult {
            answer: text.to_string(),
            sources: Vec::new(),
        }
    }

    fn loaded_state(collections: &[&str]) -> QueryState {
        let mut state = QueryState::default();
        state.apply(QueryAction::CollectionsLoaded(names(collections)));
        state
    }

    fn submit(state: &mut QueryState, text: &str) -> PendingQuery {
        state.apply(QueryAction::InputChanged(text.to_string()));
        state.apply(QueryAction::Submit).expect("submission accepted")
    }

    #[test]
    fn test_load_selects_first_non_reserved() {
        let state = loaded_state(&["slack", "docs", "codebase"]);
        assert_eq!(state.collections(), names(&["docs", "codebase"]).as_slice());
        assert_eq!(state.selected(), Some("docs"));
    }

    #[test]
    fn test_load_empty_selects_all() {
        let state = loaded_state(&[]);
        assert!(state.collections().is_empty());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_load_only_reserved_selects_all() {
        let state = loaded_state(&["slack"]);
        assert!(state.collections().is_empty());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_reserved_never_visible_or_selected() {
        let sets: [&[&str]; 4] = [
            &["slack"],
            &["docs", "slack"],
            &["slack", "slack", "global"],
            &["codebase", "docs"],
        ];
        for set in sets {
            let mut state = loaded_state(set);
            assert!(!state.collections().iter().any(|c| c == "slack"));
            assert_ne!(state.selected(), Some("slack"));

            state.apply(QueryAction::SelectCollection(Some("slack".to_string())));
            assert_eq!(state.selected(), None);
        }
    }

    #[test]
    fn test_collections_failure_leaves_all_selected() {
        let mut state = QueryState::default();
        state.apply(QueryAction::CollectionsFailed);
        assert!(state.collections().is_empty());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_select_all_and_specific() {
        let mut state = loaded_state(&["docs", "global"]);
        state.apply(QueryAction::SelectCollection(None));
        assert_eq!(state.selected(), None);
        state.apply(QueryAction::SelectCollection(Some("global".to_string())));
        assert_eq!(state.selected(), Some("global"));
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut state = loaded_state(&["docs"]);
        let pending = submit(&mut state, "first question");
        state.apply(QueryAction::QueryResolved {
            seq: pending.seq,
            outcome: Ok(answer("first answer")),
        });
        let before = state.clone();

        for blank in ["", "   ", "\n\t "] {
            state.apply(QueryAction::InputChanged(blank.to_string()));
            assert!(state.apply(QueryAction::Submit).is_none());
            assert!(!state.can_submit());
        }

        assert_eq!(state.result(), before.result());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_submit_builds_trimmed_request() {
        let mut state = loaded_state(&["slack", "docs"]);
        let pending = submit(&mut state, "  what is RAG?\n");
        assert_eq!(
            pending.request,
            QueryRequest {
                query: "what is RAG?".to_string(),
                collection: Some("docs".to_string()),
                top_k: 5,
            }
        );
    }

    #[test]
    fn test_typing_newlines_never_submits() {
        let mut state = loaded_state(&["docs"]);
        for typed in ["line one", "line one\n", "line one\nline two\n"] {
            assert!(state.apply(QueryAction::InputChanged(typed.to_string())).is_none());
        }
        assert!(!state.is_loading());
        assert_eq!(state.input(), "line one\nline two\n");

        let pending = state.apply(QueryAction::Submit).expect("button submit");
        assert_eq!(pending.request.query, "line one\nline two");
    }

    #[test]
    fn test_submit_with_all_sends_null_collection() {
        let mut state = loaded_state(&["docs"]);
        state.apply(QueryAction::SelectCollection(None));
        let pending = submit(&mut state, "anything");
        assert_eq!(pending.request.collection, None);
    }

    #[test]
    fn test_loading_hides_previous_result() {
        let mut state = loaded_state(&["docs"]);
        let first = submit(&mut state, "one");
        state.apply(QueryAction::QueryResolved {
            seq: first.seq,
            outcome: Ok(answer("one")),
        });
        assert!(state.result().is_some());

        submit(&mut state, "two");
        assert!(state.is_loading());
        assert!(state.result().is_none());
        assert!(!state.can_submit());
    }

    #[test]
    fn test_success_stores_result() {
        let mut state = loaded_state(&["docs"]);
        let pending = submit(&mut state, "question");
        state.apply(QueryAction::QueryResolved {
            seq: pending.seq,
            outcome: Ok(answer("**bold**")),
        });
        assert!(!state.is_loading());
        assert_eq!(state.result().map(|r| r.answer.as_str()), Some("**bold**"));
    }

    #[test]
    fn test_failure_stores_fallback() {
        let mut state = loaded_state(&["docs"]);
        let pending = submit(&mut state, "question");
        state.apply(QueryAction::QueryResolved {
            seq: pending.seq,
            outcome: Err(AppError::HttpStatus {
                status: 500,
                status_text: "Internal Server Error".to_string(),
            }),
        });
        let result = state.result().expect("fallback stored");
        assert_eq!(result.answer, QUERY_ERROR_MESSAGE);
        assert!(result.sources.is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = loaded_state(&["docs"]);
        let older = submit(&mut state, "first");
        let newer = submit(&mut state, "second");
        assert!(newer.seq > older.seq);

        state.apply(QueryAction::QueryResolved {
            seq: newer.seq,
            outcome: Ok(answer("second answer")),
        });
        state.apply(QueryAction::QueryResolved {
            seq: older.seq,
            outcome: Ok(answer("first answer")),
        });

        assert_eq!(
            state.result().map(|r| r.answer.as_str()),
            Some("second answer")
        );
    }

    #[test]
    fn test_stale_response_does_not_end_loading() {
        let mut state = loaded_state(&["docs"]);
        let older = submit(&mut state, "first");
        submit(&mut state, "second");

        state.apply(QueryAction::QueryResolved {
            seq: older.seq,
            outcome: Err(AppError::Network("connection reset".to_string())),
        });

        assert!(state.is_loading());
        assert!(state.result().is_none());
    }
}
