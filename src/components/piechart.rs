use dioxus::prelude::*;

use crate::demo::pie::{arc_path, PieChart};

#[component]
pub fn PieChartView(chart: PieChart, size: f64) -> Element {
    let center = size / 2.0;
    let radius = center - 2.0;
    let segments = chart.segments();

    rsx!(
        svg {
            class: "pie-chart",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 {size} {size}",
            if segments.is_empty() {
                circle {
                    class: "pie-empty",
                    cx: "{center}",
                    cy: "{center}",
                    r: "{radius}",
                }
            }
            for (i , segment) in segments.iter().enumerate() {
                path {
                    key: "{i}",
                    d: arc_path(center, center, radius, segment.start_angle, segment.end_angle),
                    fill: segment.color.clone(),
                }
            }
        }
    )
}

#[component]
pub fn Legend(chart: PieChart) -> Element {
    let total = chart.total();
    rsx!(
        ol { class: "legend",
            for (i , segment) in chart.segments().into_iter().enumerate() {
                li { key: "{i}",
                    span {
                        class: "swatch",
                        style: format!("background-color: {}", segment.color),
                    }
                    span { class: "label", {segment.label.clone()} }
                    span { class: "share", {format!("{:.1}%", segment.percent)} }
                }
            }
            li { class: "legend-total", "total {total}" }
        }
    )
}
