use dioxus::prelude::*;

use chartkit_demo::config::Config;
use chartkit_demo::navigation::hash_history;
use chartkit_demo::route::Route;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[cfg(feature = "web")]
fn main() {
    use dioxus::logger::tracing::debug;

    debug!("Starting web client");
    dioxus::LaunchBuilder::web()
        .with_context(Config::default())
        .launch(App);
}

#[cfg(all(feature = "desktop", not(feature = "web")))]
fn main() {
    use dioxus::logger::tracing::{debug, warn};

    debug!("Starting desktop client");
    let config = match Config::read_config() {
        Ok(config) => config,
        Err(err) => {
            warn!("Could not read config, using default config. {err}");
            Config::new()
        }
    };

    dioxus::LaunchBuilder::desktop()
        .with_context(config)
        .launch(App);
}

#[cfg(not(any(feature = "web", feature = "desktop")))]
fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| try_consume_context::<Config>().unwrap_or_default());
    use_context_provider(|| config);
    // shadows the renderer's path based history for everything below
    use_context_provider(hash_history);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
