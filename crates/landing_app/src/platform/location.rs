//! Address bar model for the terminal page.
//!
//! Stands in for the browser location: a path, a query string and a history
//! of entries. Replacing the query rewrites the current entry in place, so
//! back-navigation is unaffected by search synchronization.

use landing_logging::{landing_debug, LOCATION_TARGET};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBar {
    path: String,
    history: Vec<String>,
}

impl AddressBar {
    /// Builds an address bar from a path and an optional initial query.
    pub fn new(path: impl Into<String>, query: &str) -> Self {
        Self {
            path: path.into(),
            history: vec![strip_question_mark(query).to_string()],
        }
    }

    /// Query of the current entry, without the leading `?`.
    pub fn query(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or_default()
    }

    pub fn href(&self) -> String {
        if self.query().is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query())
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Replaces the current entry's query without adding history.
    pub fn replace_query(&mut self, query: &str) {
        let query = strip_question_mark(query).to_string();
        landing_debug!(target: LOCATION_TARGET, "replace {:?} -> {:?}", self.query(), query);
        match self.history.last_mut() {
            Some(current) => *current = query,
            None => self.history.push(query),
        }
    }

    /// User navigation to a new query; adds a history entry.
    pub fn navigate(&mut self, query: &str) {
        let query = strip_question_mark(query).to_string();
        landing_debug!(target: LOCATION_TARGET, "navigate -> {:?}", query);
        self.history.push(query);
    }

    /// Steps back one entry. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        true
    }
}

fn strip_question_mark(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_keeps_history_length() {
        let mut bar = AddressBar::new("/", "?term=a");
        bar.replace_query("term=b");
        bar.replace_query("term=c&year=2020");

        assert_eq!(bar.history_len(), 1);
        assert_eq!(bar.href(), "/?term=c&year=2020");
    }

    #[test]
    fn back_returns_to_previous_navigation() {
        let mut bar = AddressBar::new("/", "");
        bar.navigate("?tag=rust");
        bar.replace_query("tag=rust&year=2021");

        assert!(bar.back());
        assert_eq!(bar.href(), "/");
        assert!(!bar.back());
    }
}
