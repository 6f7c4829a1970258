use dioxus::prelude::*;

use crate::demo::progress::ring_dash;

const RING_STROKE: f64 = 8.0;

#[component]
pub fn ProgressBar(percent: f64) -> Element {
    let style = format!("width: {percent:.1}%");
    rsx!(
        div { class: "progress-track w-full",
            div { class: "progress-fill", style }
        }
    )
}

/// Circular progress indicator with the percentage in its centre.
#[component]
pub fn ProgressRing(percent: f64, radius: f64) -> Element {
    let dash = ring_dash(radius, percent);
    let size = 2.0 * (radius + RING_STROKE);
    let center = size / 2.0;
    let circumference = dash.circumference;
    let offset = dash.offset;
    let rotation = format!("rotate(-90 {center} {center})");

    rsx!(
        svg {
            class: "progress-ring",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 {size} {size}",
            circle {
                class: "ring-track",
                cx: "{center}",
                cy: "{center}",
                r: "{radius}",
                fill: "none",
                stroke_width: "{RING_STROKE}",
            }
            circle {
                class: "ring-fill",
                cx: "{center}",
                cy: "{center}",
                r: "{radius}",
                fill: "none",
                stroke_width: "{RING_STROKE}",
                stroke_dasharray: "{circumference}",
                stroke_dashoffset: "{offset}",
                transform: rotation,
            }
            text {
                x: "50%",
                y: "50%",
                text_anchor: "middle",
                dominant_baseline: "middle",
                "{percent:.0}%"
            }
        }
    )
}
