//! Topic autocomplete controller.

#[cfg(test)]
#[path = "suggest_test.rs"]
mod suggest_test;

use plans::suggest::{Debouncer, SuggestionPanel, qualifying_query};

use crate::net::api::PlannerApi;

/// Debounce bookkeeping plus the rendered suggestion rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuggestState {
    pub debouncer: Debouncer,
    pub panel: SuggestionPanel,
}

/// Look up suggestions for the current input.
///
/// Short queries and failed requests both yield an empty list, which hides
/// the panel.
pub async fn lookup<A: PlannerApi>(api: &A, raw: &str) -> Vec<String> {
    let Some(query) = qualifying_query(raw) else {
        return Vec::new();
    };
    match api.suggestions(query).await {
        Ok(items) => items,
        Err(e) => {
            log::error!("error fetching suggestions: {e}");
            Vec::new()
        }
    }
}

/// Run once a debounce timer holding `ticket` wakes up.
///
/// `None` means a newer keystroke superseded the timer and nothing was
/// requested; the panel should be left alone.
pub async fn settle<A: PlannerApi>(
    api: &A,
    debouncer: Debouncer,
    ticket: u64,
    raw: &str,
) -> Option<Vec<String>> {
    if !debouncer.fires(ticket) {
        return None;
    }
    Some(lookup(api, raw).await)
}
