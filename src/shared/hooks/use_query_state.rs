use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::shared::services::{fetch_collections, run_query, ApiService};
use crate::shared::state::{QueryAction, QueryState};

/// Query page state + the backend it talks to
#[derive(Clone, PartialEq)]
pub struct QueryController {
    pub state: Signal<QueryState>,
    api: ApiService,
}

impl QueryController {
    /// Apply an action and send the query it produces, if any
    pub fn dispatch(&self, action: QueryAction) {
        let mut state = self.state;
        let pending = state.write().apply(action);

        if let Some(pending) = pending {
            let api = self.api.clone();
            spawn(async move {
                let resolved = run_query(&api, pending).await;
                state.write().apply(resolved);
            });
        }
    }

    pub fn select(&self, collection: Option<String>) {
        self.dispatch(QueryAction::SelectCollection(collection));
    }

    pub fn set_input(&self, input: String) {
        self.dispatch(QueryAction::InputChanged(input));
    }

    pub fn submit(&self) {
        self.dispatch(QueryAction::Submit);
    }
}

/// Hook owning the query page state; loads collections once on mount
pub fn use_query_state() -> QueryController {
    let config = use_context::<AppConfig>();
    let state = use_signal(|| QueryState::from_config(&config));
    let api = use_hook(|| ApiService::from_config(&config));

    let controller = QueryController { state, api };

    let loader = controller.clone();
    use_hook(move || {
        spawn(async move {
            let action = fetch_collections(&loader.api).await;
            loader.dispatch(action);
        });
    });

    controller
}
