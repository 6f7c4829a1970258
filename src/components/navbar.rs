use dioxus::{logger::tracing::debug, prelude::*};
use dioxus_free_icons::icons::ld_icons::{LdCircleDot, LdGauge};
use dioxus_free_icons::Icon;

use crate::config::Config;
use crate::navigation::{hash, PageId, RouteTable, ScrollBehavior};
use crate::route::Route;

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    rsx! {
        Link {
            class: "navlink w-48 text-center",
            active_class: "navlink-active",
            to,
            children,
        }
    }
}

#[component]
fn PageIcon(page: PageId) -> Element {
    match page {
        PageId::ProgressDemo => rsx!(Icon { class: "inline", width: 18, height: 18, icon: LdGauge }),
        PageId::PieDemo => rsx!(Icon { class: "inline", width: 18, height: 18, icon: LdCircleDot }),
    }
}

fn scroll_after_navigation(route: &Route, behavior: ScrollBehavior) {
    let href = hash::hash_from_path(&route.to_string());
    match route.scroll_target(behavior) {
        Some(position) => {
            debug!("Navigated to {href}, scrolling to {position:?}");
            let _eval = document::eval(&position.script());
        }
        None => debug!("Navigated to {href}, keeping scroll position"),
    }
}

/// Layout around every page, resets the scroll position whenever a page route is shown.
#[component]
pub fn Shell() -> Element {
    let config = use_context::<Config>();
    let route = use_route::<Route>();
    let pages = use_hook(|| RouteTable::standard().pages());

    use_effect(use_reactive((&route,), move |(route,)| {
        scroll_after_navigation(&route, config.scroll_behavior);
    }));

    rsx! {
        div { id: "navbar",
            for page in pages {
                NavLink { key: "{page:?}", to: Route::from(page),
                    PageIcon { page }
                    {page.title()}
                }
            }
        }

        main { id: "page", Outlet::<Route> {} }
    }
}
