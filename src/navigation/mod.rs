use std::rc::Rc;

use dioxus::history::History;

pub mod hash;

mod history;
pub use history::{canonical_path, HashHistory};

#[cfg(feature = "web")]
mod location;
#[cfg(feature = "web")]
pub use location::{LocationHashHistory, LocationHistoryError};

mod scroll;
pub use scroll::{ScrollBehavior, ScrollPosition};

mod table;
pub use table::{
    PageId, Resolution, RouteEntry, RouteTable, RouteTableError, RouteTarget, PIE_PATH,
    PROGRESS_PATH, ROOT_PATH,
};

/// History the router runs on: the browser location hash when there is one, memory otherwise.
#[cfg(feature = "web")]
pub fn hash_history() -> Rc<dyn History> {
    use dioxus::logger::tracing::warn;

    match LocationHashHistory::new(RouteTable::standard()) {
        Ok(history) => Rc::new(history),
        Err(err) => {
            warn!("Falling back to in-memory hash history. {err}");
            Rc::new(HashHistory::default())
        }
    }
}

#[cfg(not(feature = "web"))]
pub fn hash_history() -> Rc<dyn History> {
    Rc::new(HashHistory::default())
}
