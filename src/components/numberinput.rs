use dioxus::{
    logger::tracing::{debug, warn},
    prelude::*,
};

#[component]
pub fn NumberInput(value: Signal<u8>, min: u8, max: u8) -> Element {
    rsx!(
        input {
            value: "{value}",
            min: "{min}",
            max: "{max}",
            r#type: "number",
            oninput: move |event| async move {
                match event.parsed::<u8>() {
                    Ok(v) => {
                        debug!("Setting new value {event:?}");
                        value.set(v.clamp(min, max))
                    }
                    Err(e) => {
                        warn!("Not setting new value! {e}");
                    }
                };
            },
        }
    )
}
