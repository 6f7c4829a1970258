use dioxus::prelude::*;

use crate::components;

#[component]
pub fn ProgressDemo() -> Element {
    rsx! {
        components::ProgressPanel {}
    }
}
