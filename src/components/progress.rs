use dioxus::{logger::tracing::debug, prelude::*};
use dioxus_free_icons::icons::ld_icons::{LdCirclePause, LdCirclePlay, LdMinus, LdPlus, LdRotateCcw};
use dioxus_free_icons::Icon;

use crate::components::{NumberInput, ProgressBar, ProgressRing};
use crate::config::Config;
use crate::demo::clock::sleep_ms;
use crate::demo::progress::{Progress, MAX_STEP, MIN_STEP};

const RING_RADIUS: f64 = 48.0;

enum AutoAdvanceMessage {}

/// Progress demo: a bar and a ring driven by the same value.
#[component]
pub fn ProgressPanel() -> Element {
    let config = use_context::<Config>();
    let progress = use_signal(Progress::default);
    let running = use_signal(|| false);
    let step = use_signal(|| config.progress_step);

    let mut progress_move = progress;
    let _auto_advance = use_coroutine(move |_rx: UnboundedReceiver<AutoAdvanceMessage>| async move {
        debug!("Starting auto advance every {}ms", config.progress_tick_ms);
        loop {
            sleep_ms(config.progress_tick_ms).await;
            if *running.peek() {
                let increment = u32::from(*step.peek());
                progress_move.with_mut(|progress| progress.advance_wrapping(increment));
            }
        }
    });

    let current = *progress.read();
    let percent = current.percent();
    let status = current.status().label();
    let value = current.value();
    let max = current.max();

    rsx! {
        div { id: "progress-demo", class: "flex flex-col w-full",
            header { "Progress" }
            div { class: "flex flex-row w-full items-center",
                div { class: "basis-3/4",
                    ProgressBar { percent }
                }
                div { class: "basis-1/4",
                    ProgressRing { percent, radius: RING_RADIUS }
                }
            }
            div { class: "progress-status", "{value} / {max} ({status})" }
            ProgressControls { progress, running, step }
        }
    }
}

#[component]
fn ProgressControls(progress: Signal<Progress>, running: Signal<bool>, step: Signal<u8>) -> Element {
    let mut progress = progress;
    let mut running = running;
    let toggle_icon = match running() {
        true => rsx!(Icon { class: "center", width: 24, height: 24, icon: LdCirclePause }),
        false => rsx!(Icon { class: "center", width: 24, height: 24, icon: LdCirclePlay }),
    };

    rsx! {
        div { class: "flex flex-row w-full",
            button {
                class: "basis-1/5",
                onclick: move |_event| {
                    let delta = -i64::from(step());
                    progress.with_mut(|progress| progress.step_by(delta));
                    debug!("Decreased progress to {}", progress.peek().value());
                },
                Icon { class: "center", width: 24, height: 24, icon: LdMinus }
            }
            button {
                class: "basis-1/5",
                onclick: move |_event| {
                    let delta = i64::from(step());
                    progress.with_mut(|progress| progress.step_by(delta));
                    debug!("Increased progress to {}", progress.peek().value());
                },
                Icon { class: "center", width: 24, height: 24, icon: LdPlus }
            }
            button {
                class: "basis-1/5",
                onclick: move |_event| {
                    debug!("Reset progress");
                    progress.with_mut(Progress::reset);
                },
                Icon { class: "center", width: 24, height: 24, icon: LdRotateCcw }
            }
            button {
                class: "basis-1/5",
                onclick: move |_event| {
                    let next = !running();
                    debug!("Auto advance: {next}");
                    running.set(next);
                },
                {toggle_icon}
            }
            div { class: "basis-1/5",
                label { "step" }
                NumberInput { value: step, min: MIN_STEP, max: MAX_STEP }
            }
        }
    }
}
