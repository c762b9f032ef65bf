//! Application shell: header with the player's spin and point balances, plus
//! the custom-event bus other components use to push balance updates.

use wasm_bindgen::JsValue;
use web_sys::{window, CustomEvent, CustomEventInit};
use yew::prelude::*;

use crate::hooks::{use_points, use_spins};
use crate::styles;

pub const SPINS_UPDATE_EVENT: &str = "spinsUpdate";
pub const POINTS_UPDATE_EVENT: &str = "pointsUpdate";

fn dispatch_update(event_name: &str, storage_key: &str, value: f64) {
    if let Some(window) = window() {
        if let Some(storage) = window.local_storage().ok().flatten() {
            let _ = storage.set_item(storage_key, &value.to_string());
        }
        let event_init = CustomEventInit::new();
        event_init.set_detail(&JsValue::from_f64(value));
        if let Ok(event) = CustomEvent::new_with_event_init_dict(event_name, &event_init) {
            let _ = window.dispatch_event(&event);
        }
    }
}

/// Pushes a new spin balance to every listening component.
pub fn dispatch_spins_event(spins: i32) {
    dispatch_update(SPINS_UPDATE_EVENT, "spins", spins as f64);
}

/// Pushes a new point balance to every listening component.
pub fn dispatch_points_event(points: f64) {
    dispatch_update(POINTS_UPDATE_EVENT, "points", points);
}

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let spins = use_spins();
    let points = use_points();

    html! {
        <div class={styles::APP_CONTAINER}>
            <header class={styles::HEADER}>
                <h2 class={styles::HEADER_TITLE}>{"Wheel of Fortune"}</h2>
                <div class={styles::STATS_ROW}>
                    <div class={styles::STAT_CARD}>
                        <span class={styles::STAT_LABEL}>{"Spins"}</span>
                        <span class={styles::STAT_VALUE_HIGHLIGHT}>{format!("{:.0}", *spins)}</span>
                    </div>
                    <div class={styles::STAT_CARD}>
                        <span class={styles::STAT_LABEL}>{"Points"}</span>
                        <span class={styles::STAT_VALUE}>{format!("{:.0}", *points)}</span>
                    </div>
                </div>
            </header>
            <main class={styles::MAIN}>{props.children.clone()}</main>
        </div>
    }
}
