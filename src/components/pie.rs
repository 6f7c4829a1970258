use dioxus::{
    logger::tracing::{debug, warn},
    prelude::*,
};

use crate::components::{Legend, PieChartView};
use crate::demo::pie::{default_chart, sample_slice};

const CHART_SIZE: f64 = 240.0;

/// Pie demo: a chart, its legend and buttons to add or remove slices.
#[component]
pub fn PiePanel() -> Element {
    let mut chart = use_signal(default_chart);
    let chart_snapshot = chart.read().clone();
    let is_empty = chart_snapshot.is_empty();

    rsx! {
        div { id: "pie-demo", class: "flex flex-col w-full",
            header { "Pie" }
            div { class: "flex flex-row w-full items-center",
                div { class: "basis-1/2",
                    PieChartView { chart: chart_snapshot.clone(), size: CHART_SIZE }
                }
                div { class: "basis-1/2",
                    Legend { chart: chart_snapshot }
                }
            }
            div { class: "flex flex-row w-full",
                button {
                    class: "basis-1/2",
                    onclick: move |_event| {
                        let slice = sample_slice(chart.peek().len());
                        match chart.write().push(slice) {
                            Ok(()) => debug!("Added slice"),
                            Err(err) => warn!("Could not add slice! {err}"),
                        };
                    },
                    "Add slice"
                }
                button {
                    class: "basis-1/2",
                    disabled: is_empty,
                    onclick: move |_event| {
                        match chart.write().pop() {
                            Some(slice) => debug!("Removed {}", slice.label),
                            None => warn!("No slice left to remove"),
                        };
                    },
                    "Remove slice"
                }
            }
        }
    }
}
