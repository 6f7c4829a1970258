use std::cell::RefCell;

use dioxus::history::History;
use dioxus::logger::tracing::debug;

use super::hash::hash_from_path;
use super::table::{RouteTable, ROOT_PATH};

/// Prefix the router puts in front of link targets, so `<a href>` points at `#/pie`.
pub(crate) const HASH_PREFIX: &str = "#";

/// Path the router should see for `raw_path`: redirects applied, unknown paths only normalised.
pub fn canonical_path(table: &RouteTable, raw_path: &str) -> String {
    table.resolve(raw_path).path().to_string()
}

#[derive(Debug)]
struct Stack {
    entries: Vec<String>,
    cursor: usize,
}

/// Hash-addressed history kept in memory, for renderers without a browser location.
///
/// Every entry is stored in its canonical form, so a redirect never occupies an entry of its own.
pub struct HashHistory {
    table: RouteTable,
    stack: RefCell<Stack>,
}

impl HashHistory {
    pub fn new(table: RouteTable, initial_path: &str) -> Self {
        let initial = canonical_path(&table, initial_path);
        Self {
            table,
            stack: RefCell::new(Stack {
                entries: vec![initial],
                cursor: 0,
            }),
        }
    }

    pub fn current_hash(&self) -> String {
        hash_from_path(&self.current_route())
    }
}

impl Default for HashHistory {
    fn default() -> Self {
        Self::new(RouteTable::standard(), ROOT_PATH)
    }
}

impl History for HashHistory {
    fn current_route(&self) -> String {
        let stack = self.stack.borrow();
        stack.entries[stack.cursor].clone()
    }

    fn current_prefix(&self) -> Option<String> {
        Some(HASH_PREFIX.to_string())
    }

    fn can_go_back(&self) -> bool {
        self.stack.borrow().cursor > 0
    }

    fn go_back(&self) {
        let mut stack = self.stack.borrow_mut();
        if stack.cursor > 0 {
            stack.cursor -= 1;
        }
    }

    fn can_go_forward(&self) -> bool {
        let stack = self.stack.borrow();
        stack.cursor + 1 < stack.entries.len()
    }

    fn go_forward(&self) {
        let mut stack = self.stack.borrow_mut();
        if stack.cursor + 1 < stack.entries.len() {
            stack.cursor += 1;
        }
    }

    fn push(&self, route: String) {
        let path = canonical_path(&self.table, &route);
        let mut stack = self.stack.borrow_mut();
        let cursor = stack.cursor;
        if stack.entries[cursor] == path {
            return;
        }
        debug!("Pushing {}", hash_from_path(&path));
        stack.entries.truncate(cursor + 1);
        stack.entries.push(path);
        stack.cursor = cursor + 1;
    }

    fn replace(&self, route: String) {
        let path = canonical_path(&self.table, &route);
        let mut stack = self.stack.borrow_mut();
        let cursor = stack.cursor;
        stack.entries[cursor] = path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_starts_on_redirect_target() {
        let history = HashHistory::default();
        assert_eq!(history.current_route(), "/progress");
        assert_eq!(history.current_hash(), "#/progress");
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn links_point_at_hash_fragments() {
        assert_eq!(HashHistory::default().current_prefix(), Some("#".to_string()));
    }

    #[test]
    fn redirect_does_not_leave_an_entry() {
        let history = HashHistory::default();
        history.push("/pie".to_string());
        history.push("/".to_string());
        assert_eq!(history.current_route(), "/progress");

        history.go_back();
        assert_eq!(history.current_route(), "/pie");
        history.go_back();
        assert_eq!(history.current_route(), "/progress");
        assert!(!history.can_go_back());
    }

    #[test]
    fn pushing_current_route_is_ignored() {
        let history = HashHistory::default();
        history.push("/progress/".to_string());
        assert!(!history.can_go_back());
    }

    #[test]
    fn push_truncates_forward_entries() {
        let history = HashHistory::default();
        history.push("/pie".to_string());
        history.go_back();
        assert!(history.can_go_forward());

        history.push("/other".to_string());
        assert!(!history.can_go_forward());
        history.go_back();
        assert_eq!(history.current_route(), "/progress");
    }

    #[test]
    fn back_and_forward_stop_at_boundaries() {
        let history = HashHistory::default();
        history.go_back();
        history.go_forward();
        assert_eq!(history.current_route(), "/progress");

        history.push("/pie".to_string());
        history.go_forward();
        assert_eq!(history.current_route(), "/pie");
    }

    #[test]
    fn replace_keeps_history_length() {
        let history = HashHistory::default();
        history.replace("/pie?slices=3".to_string());
        assert_eq!(history.current_hash(), "#/pie");
        assert!(!history.can_go_back());
    }

    #[test]
    fn unknown_paths_are_kept_normalised() {
        let history = HashHistory::default();
        history.push("nowhere/".to_string());
        assert_eq!(history.current_route(), "/nowhere");
    }

    #[test]
    fn canonical_path_applies_redirects() {
        let table = RouteTable::standard();
        assert_eq!(canonical_path(&table, "/"), "/progress");
        assert_eq!(canonical_path(&table, "/pie/"), "/pie");
        assert_eq!(canonical_path(&table, "/missing"), "/missing");
    }
}
