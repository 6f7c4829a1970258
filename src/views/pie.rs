use dioxus::prelude::*;

use crate::components;

#[component]
pub fn PieDemo() -> Element {
    rsx! {
        components::PiePanel {}
    }
}
