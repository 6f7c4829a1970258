use std::sync::Arc;

use dioxus::history::History;
use dioxus::logger::tracing::{debug, error};
use thiserror::Error;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::Window;

use super::hash::{hash_from_path, path_from_hash};
use super::history::{canonical_path, HASH_PREFIX};
use super::table::RouteTable;

#[derive(Debug, Error)]
pub enum LocationHistoryError {
    #[error("No browser window available!")]
    NoWindow,
    #[error("Could not access browser history! {0}")]
    NoHistory(String),
}

/// History stored in `window.location.hash`.
///
/// Pushing sets the hash, which adds a browser history entry and fires `hashchange`.
/// Replacing goes through `history.replaceState` and leaves the entry count alone.
pub struct LocationHashHistory {
    window: Window,
    history: web_sys::History,
    table: RouteTable,
}

impl LocationHashHistory {
    pub fn new(table: RouteTable) -> Result<Self, LocationHistoryError> {
        let window = web_sys::window().ok_or(LocationHistoryError::NoWindow)?;
        let history = match window.history() {
            Ok(history) => history,
            Err(err) => return Err(LocationHistoryError::NoHistory(format!("{err:?}"))),
        };

        let myself = Self {
            window,
            history,
            table,
        };

        // a redirected entry hash such as `#/` is rewritten to its target
        let current = myself.current_route();
        if myself.read_hash() != hash_from_path(&current) {
            myself.replace_hash(&current);
        }
        Ok(myself)
    }

    fn read_hash(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn replace_hash(&self, path: &str) {
        let hash = hash_from_path(path);
        debug!("Replacing location hash with {hash}");
        if let Err(err) = self
            .history
            .replace_state_with_url(&JsValue::NULL, "", Some(&hash))
        {
            error!("Could not replace location hash with {hash}! {err:?}");
        }
    }
}

impl History for LocationHashHistory {
    fn current_route(&self) -> String {
        canonical_path(&self.table, &path_from_hash(&self.read_hash()))
    }

    fn current_prefix(&self) -> Option<String> {
        Some(HASH_PREFIX.to_string())
    }

    fn go_back(&self) {
        if let Err(err) = self.history.back() {
            error!("Could not go back! {err:?}");
        }
    }

    fn go_forward(&self) {
        if let Err(err) = self.history.forward() {
            error!("Could not go forward! {err:?}");
        }
    }

    fn push(&self, route: String) {
        let path = canonical_path(&self.table, &route);
        if path == self.current_route() {
            return;
        }

        let hash = hash_from_path(&path);
        debug!("Setting location hash to {hash}");
        if let Err(err) = self.window.location().set_hash(&hash) {
            error!("Could not set location hash to {hash}! {err:?}");
        }
    }

    fn replace(&self, route: String) {
        self.replace_hash(&canonical_path(&self.table, &route));
    }

    fn updater(&self, callback: Arc<dyn Fn() + Send + Sync>) {
        let on_hash_change = Closure::<dyn FnMut()>::new(move || (*callback)());
        if let Err(err) = self
            .window
            .add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
        {
            error!("Could not listen for hash changes! {err:?}");
        }
        // the listener lives as long as the page
        on_hash_change.forget();
    }
}
