use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::constants::{COST_PER_SPIN, MAX_SPINS_PER_PURCHASE};
use shared::wheel_game::PurchaseResult;

use crate::api;
use crate::hooks::use_points;
use crate::styles;
use crate::telegram;

#[derive(Properties, PartialEq)]
pub struct BuySpinsProps {
    pub telegram_id: i64,
    pub on_complete: Callback<PurchaseResult>,
}

/// Collapsed "Buy Spins" button that expands into a quantity-picker modal.
#[function_component(BuySpins)]
pub fn buy_spins(props: &BuySpinsProps) -> Html {
    let points = use_points();
    let qty = use_state(|| 1_i32);
    let expanded = use_state(|| false);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let message = use_state(|| None::<String>);

    let total_cost = i64::from(*qty) * COST_PER_SPIN;
    let can_afford = *points >= total_cost as f64;
    let remaining = (*points - total_cost as f64).max(0.0);

    let open = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(true))
    };

    let close = {
        let expanded = expanded.clone();
        let loading = loading.clone();
        let error = error.clone();
        let message = message.clone();
        Callback::from(move |_: MouseEvent| {
            if !*loading {
                expanded.set(false);
                error.set(None);
                message.set(None);
            }
        })
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let dec = {
        let qty = qty.clone();
        Callback::from(move |_: MouseEvent| qty.set((*qty - 1).max(1)))
    };
    let inc = {
        let qty = qty.clone();
        Callback::from(move |_: MouseEvent| qty.set((*qty + 1).min(MAX_SPINS_PER_PURCHASE)))
    };

    let handle_buy = {
        let qty = qty.clone();
        let loading = loading.clone();
        let error = error.clone();
        let message = message.clone();
        let telegram_id = props.telegram_id;
        let on_complete = props.on_complete.clone();

        Callback::from(move |_: MouseEvent| {
            if *loading {
                return;
            }
            loading.set(true);
            error.set(None);
            message.set(None);

            let amount = *qty;
            let loading = loading.clone();
            let error = error.clone();
            let message = message.clone();
            let on_complete = on_complete.clone();

            spawn_local(async move {
                match api::buy_spins(telegram_id, amount).await {
                    Ok(result) => {
                        telegram::haptic_success();
                        message.set(Some(format!(
                            "Purchased {} {}.",
                            result.spins_purchased,
                            if result.spins_purchased > 1 { "spins" } else { "spin" }
                        )));
                        on_complete.emit(result);
                    }
                    Err(e) => {
                        telegram::haptic_error();
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    if !*expanded {
        return html! {
            <section class={styles::BUY_PANEL}>
                <button class={styles::BUY_BUTTON_MINI} onclick={open}>
                    <span>{"Buy Spins"}</span>
                    <span class={styles::COST_BADGE}>{format!("{} pts/spin", COST_PER_SPIN)}</span>
                </button>
            </section>
        };
    }

    html! {
        <div class={styles::MODAL_OVERLAY} onclick={close.clone()}>
            <div class={styles::MODAL_CONTENT} onclick={stop}>
                <button class={styles::MODAL_CLOSE} onclick={close} disabled={*loading}>
                    {"×"}
                </button>

                <h3 class={styles::MODAL_TITLE}>{"Buy Spins"}</h3>
                <p class={styles::TEXT_SMALL}>{format!("{} pts per spin", COST_PER_SPIN)}</p>
                <p class={styles::MODAL_TEXT}>
                    {format!("Available: {:.0} pts", *points)}
                </p>

                <div class={styles::QTY_ROW}>
                    <button class={styles::QTY_BUTTON} onclick={dec} disabled={*loading}>{"−"}</button>
                    <div class={styles::QTY_DISPLAY}>{*qty}</div>
                    <button class={styles::QTY_BUTTON} onclick={inc} disabled={*loading}>{"+"}</button>
                </div>

                <div class={styles::BUY_COST}>
                    <span>{"Total: "}</span><strong>{format!("{} pts", total_cost)}</strong>
                </div>
                <div class={styles::BUY_REMAINING}>
                    {format!("After purchase: {:.0} pts", remaining)}
                </div>

                if let Some(err) = &*error {
                    <p class={styles::TEXT_ERROR}>{format!("⚠ {}", err)}</p>
                }
                if let Some(msg) = &*message {
                    <p class={styles::TEXT_SUCCESS}>{format!("✓ {}", msg)}</p>
                }

                <button
                    class={styles::BUTTON_PRIMARY}
                    onclick={handle_buy}
                    disabled={!can_afford || *loading}
                >
                    {
                        if *loading {
                            "Processing...".to_string()
                        } else {
                            format!("Buy {} {}", *qty, if *qty > 1 { "Spins" } else { "Spin" })
                        }
                    }
                </button>
            </div>
        </div>
    }
}
