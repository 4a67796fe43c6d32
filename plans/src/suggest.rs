//! Debounce bookkeeping and panel state for topic autocomplete.
//!
//! Every keystroke takes a new ticket; a timer that wakes up holding a stale
//! ticket does nothing. Responses are not sequenced: once a request is sent
//! its result is shown whenever it arrives.

#[cfg(test)]
#[path = "suggest_test.rs"]
mod suggest_test;

/// Quiet period after the last keystroke before a lookup fires.
pub const DEBOUNCE_MS: u32 = 300;

/// Queries must be longer than this many characters once trimmed.
pub const MIN_QUERY_CHARS: usize = 2;

/// Trimmed query worth sending, or `None` when it is too short.
#[must_use]
pub fn qualifying_query(raw: &str) -> Option<&str> {
    let query = raw.trim();
    (query.chars().count() > MIN_QUERY_CHARS).then_some(query)
}

/// Hands out tickets so only the most recent pending timer fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debouncer {
    latest: u64,
}

impl Debouncer {
    /// Register a keystroke and return the ticket its timer must present.
    pub fn schedule(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    /// Whether a timer holding `ticket` survived without being superseded.
    #[must_use]
    pub fn fires(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Visible suggestion rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuggestionPanel {
    items: Vec<String>,
    visible: bool,
}

impl SuggestionPanel {
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Replace the rows; an empty list hides the panel.
    pub fn show(&mut self, items: Vec<String>) {
        self.visible = !items.is_empty();
        self.items = items;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Choose row `index`, hiding the panel. Returns the chosen topic.
    pub fn pick(&mut self, index: usize) -> Option<String> {
        let chosen = self.items.get(index).cloned()?;
        self.hide();
        Some(chosen)
    }
}
