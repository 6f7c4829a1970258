use std::collections::HashSet;

use dioxus::logger::tracing::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::hash::normalize_path;

pub const ROOT_PATH: &str = "/";
pub const PROGRESS_PATH: &str = "/progress";
pub const PIE_PATH: &str = "/pie";

#[derive(Debug, Error, PartialEq)]
pub enum RouteTableError {
    #[error("Route path must start with '/'! {0}")]
    InvalidPath(String),
    #[error("Route path is registered twice! {0}")]
    DuplicatePath(String),
    #[error("Redirect from {from} points to unknown path {to}!")]
    DanglingRedirect { from: String, to: String },
    #[error("Redirect loop starting at {0}!")]
    RedirectLoop(String),
}

/// Page units the router can display.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum PageId {
    ProgressDemo,
    PieDemo,
}

impl PageId {
    pub fn title(&self) -> &'static str {
        match self {
            PageId::ProgressDemo => "progress",
            PageId::PieDemo => "pie",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RouteTarget {
    Redirect(String),
    Page(PageId),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RouteEntry {
    pub path: String,
    pub target: RouteTarget,
}

impl RouteEntry {
    pub fn redirect(path: &str, to: &str) -> Self {
        Self {
            path: path.to_string(),
            target: RouteTarget::Redirect(to.to_string()),
        }
    }

    pub fn page(path: &str, page: PageId) -> Self {
        Self {
            path: path.to_string(),
            target: RouteTarget::Page(page),
        }
    }
}

/// Outcome of looking up a path in a [`RouteTable`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Resolution {
    Page {
        path: String,
        page: PageId,
        redirected_from: Option<String>,
    },
    NotFound {
        path: String,
    },
}

impl Resolution {
    /// Final path after redirects, or the requested path when nothing matched.
    pub fn path(&self) -> &str {
        match self {
            Resolution::Page { path, .. } => path,
            Resolution::NotFound { path } => path,
        }
    }

    pub fn page(&self) -> Option<PageId> {
        match self {
            Resolution::Page { page, .. } => Some(*page),
            Resolution::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Page { .. })
    }
}

/// Immutable mapping from paths to pages or redirects.
///
/// A table built through [`RouteTable::new`] has unique paths and redirects
/// that always end on a page, so [`RouteTable::resolve`] terminates.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        let mut normalized = Vec::with_capacity(entries.len());
        let mut seen = HashSet::new();

        for entry in entries {
            if !entry.path.starts_with('/') {
                return Err(RouteTableError::InvalidPath(entry.path));
            }
            let path = normalize_path(&entry.path);
            if !seen.insert(path.clone()) {
                return Err(RouteTableError::DuplicatePath(path));
            }
            let target = match entry.target {
                RouteTarget::Redirect(to) if !to.starts_with('/') => {
                    return Err(RouteTableError::InvalidPath(to));
                }
                RouteTarget::Redirect(to) => RouteTarget::Redirect(normalize_path(&to)),
                page => page,
            };
            normalized.push(RouteEntry { path, target });
        }

        let table = Self {
            entries: normalized,
        };
        table.check_redirects()?;
        Ok(table)
    }

    /// The application table: `/` redirects to `/progress`, next to the two demo pages.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                RouteEntry::redirect(ROOT_PATH, PROGRESS_PATH),
                RouteEntry::page(PROGRESS_PATH, PageId::ProgressDemo),
                RouteEntry::page(PIE_PATH, PageId::PieDemo),
            ],
        }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn lookup(&self, path: &str) -> Option<&RouteEntry> {
        let path = normalize_path(path);
        self.entries.iter().find(|entry| entry.path == path)
    }

    /// Pages in table order, used to build the navigation bar.
    pub fn pages(&self) -> Vec<PageId> {
        self.entries
            .iter()
            .filter_map(|entry| match entry.target {
                RouteTarget::Page(page) => Some(page),
                RouteTarget::Redirect(_) => None,
            })
            .collect()
    }

    /// Path the table links to for a page, if one is registered.
    pub fn path_of(&self, page: PageId) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.target == RouteTarget::Page(page))
            .map(|entry| entry.path.as_str())
    }

    pub fn resolve(&self, raw_path: &str) -> Resolution {
        let requested = normalize_path(raw_path);
        let mut path = requested.clone();

        // every hop visits a distinct entry
        for _hop in 0..=self.entries.len() {
            match self.lookup(&path).map(|entry| &entry.target) {
                Some(RouteTarget::Page(page)) => {
                    let redirected_from = (path != requested).then(|| requested.clone());
                    debug!("Resolved {requested} to {path}");
                    return Resolution::Page {
                        path,
                        page: *page,
                        redirected_from,
                    };
                }
                Some(RouteTarget::Redirect(to)) => path = to.clone(),
                None => break,
            }
        }

        debug!("No route matches {requested}");
        Resolution::NotFound { path: requested }
    }

    fn check_redirects(&self) -> Result<(), RouteTableError> {
        for entry in &self.entries {
            let mut visited = HashSet::new();
            let mut current = entry;
            while let RouteTarget::Redirect(to) = &current.target {
                if !visited.insert(current.path.as_str()) {
                    return Err(RouteTableError::RedirectLoop(entry.path.clone()));
                }
                current = match self.lookup(to) {
                    Some(next) => next,
                    None => {
                        return Err(RouteTableError::DanglingRedirect {
                            from: current.path.clone(),
                            to: to.clone(),
                        })
                    }
                };
            }
        }
        Ok(())
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}
