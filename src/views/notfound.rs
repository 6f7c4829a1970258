use dioxus::{logger::tracing::warn, prelude::*};

use crate::route::Route;

/// Shown for any path without a route.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    warn!("No page for {path}");

    rsx! {
        div { id: "not-found", class: "flex flex-col w-full",
            header { "Page not found" }
            p { "Nothing lives at {path}." }
            Link { to: Route::ProgressDemo {}, "Back to the progress demo" }
        }
    }
}
