use dioxus::prelude::*;

use crate::components::Shell;
use crate::navigation::{PageId, ScrollBehavior, ScrollPosition};
use crate::views::{NotFound, PieDemo, ProgressDemo};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    #[redirect("/", || Route::ProgressDemo {})]
    #[route("/progress")]
    ProgressDemo {},
    #[route("/pie")]
    PieDemo {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    pub fn page(&self) -> Option<PageId> {
        match self {
            Route::ProgressDemo {} => Some(PageId::ProgressDemo),
            Route::PieDemo {} => Some(PageId::PieDemo),
            Route::NotFound { .. } => None,
        }
    }

    /// Where the viewport goes once this route is shown.
    ///
    /// Only routes that found a page reset the scroll position.
    pub fn scroll_target(&self, behavior: ScrollBehavior) -> Option<ScrollPosition> {
        self.page()?;
        behavior.target()
    }
}

impl From<PageId> for Route {
    fn from(page: PageId) -> Self {
        match page {
            PageId::ProgressDemo => Route::ProgressDemo {},
            PageId::PieDemo => Route::PieDemo {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use crate::navigation::{PageId, RouteTable, ScrollBehavior, ScrollPosition};

    fn parse(path: &str) -> Route {
        match path.parse::<Route>() {
            Ok(route) => route,
            Err(err) => panic!("{path} did not parse: {err}"),
        }
    }

    #[test]
    fn root_redirects_to_progress() {
        assert!(matches!("/".parse::<Route>(), Ok(Route::ProgressDemo {})));
    }

    #[test]
    fn demo_routes_parse() {
        assert!(matches!("/progress".parse::<Route>(), Ok(Route::ProgressDemo {})));
        assert!(matches!("/pie".parse::<Route>(), Ok(Route::PieDemo {})));
    }

    #[test]
    fn routes_display_their_path() {
        assert_eq!(Route::ProgressDemo {}.to_string(), "/progress");
        assert_eq!(Route::PieDemo {}.to_string(), "/pie");
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route = "/bar/chart".parse::<Route>().ok();
        assert_eq!(
            route,
            Some(Route::NotFound {
                segments: vec!["bar".to_string(), "chart".to_string()]
            })
        );
        assert_eq!(route.and_then(|r| r.page()), None);
    }

    #[test]
    fn router_agrees_with_route_table() {
        let table = RouteTable::standard();
        for entry in table.entries() {
            let parsed = entry.path.parse::<Route>().ok().and_then(|r| r.page());
            assert_eq!(parsed, table.resolve(&entry.path).page(), "{}", entry.path);
        }
    }

    #[test]
    fn pages_map_to_routes() {
        for page in [PageId::ProgressDemo, PageId::PieDemo] {
            assert_eq!(Route::from(page).page(), Some(page));
        }
    }

    #[test]
    fn found_pages_scroll_to_top() {
        for path in ["/", "/progress", "/pie"] {
            assert_eq!(
                parse(path).scroll_target(ScrollBehavior::Top),
                Some(ScrollPosition::TOP),
                "{path}"
            );
        }
    }

    #[test]
    fn unmatched_path_keeps_scroll_position() {
        assert_eq!(parse("/nowhere").scroll_target(ScrollBehavior::Top), None);
    }

    #[test]
    fn preserve_never_scrolls() {
        assert_eq!(parse("/pie").scroll_target(ScrollBehavior::Preserve), None);
    }
}
