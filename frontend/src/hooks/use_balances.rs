//! Balance hooks: localStorage-seeded state kept fresh by the update events
//! dispatched from `base`.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, CustomEvent, Event};
use yew::prelude::*;

use crate::base::{POINTS_UPDATE_EVENT, SPINS_UPDATE_EVENT};

fn stored_value(key: &str) -> Option<f64> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(key).ok().flatten())
        .and_then(|v| v.parse::<f64>().ok())
}

#[hook]
fn use_balance(event_name: &'static str, storage_key: &'static str) -> UseStateHandle<f64> {
    let balance = use_state(|| stored_value(storage_key).unwrap_or(0.0));

    {
        let balance = balance.clone();
        use_effect_with((), move |_| {
            let window = window().expect("no global window exists");
            let listener = EventListener::new(&window, event_name, move |event: &Event| {
                if let Some(custom_event) = event.dyn_ref::<CustomEvent>() {
                    if let Some(value) = custom_event.detail().as_f64() {
                        balance.set(value);
                    }
                }
            });
            || drop(listener)
        });
    }

    balance
}

/// Current spin balance, live across components.
#[hook]
pub fn use_spins() -> UseStateHandle<f64> {
    use_balance(SPINS_UPDATE_EVENT, "spins")
}

/// Current point balance, live across components.
#[hook]
pub fn use_points() -> UseStateHandle<f64> {
    use_balance(POINTS_UPDATE_EVENT, "points")
}
