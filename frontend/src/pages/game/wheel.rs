use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::wheel_game::{RotationTracker, SpinResult, SPIN_DURATION_MS};

use crate::api::{self, ApiError};
use crate::styles;

use super::wheel_canvas::{ease_out_cubic, WheelCanvas};
use super::wheel_utils::SpinButton;

#[derive(Properties, PartialEq)]
pub struct WheelProps {
    pub telegram_id: i64,
    /// Fired once per spin, after the settle animation completes.
    pub on_settled: Callback<SpinResult>,
    /// Fired immediately on request rejection; no animation is attempted.
    pub on_failed: Callback<ApiError>,
}

#[function_component(Wheel)]
pub fn wheel(props: &WheelProps) -> Html {
    // One tracker per mounted wheel; its cumulative angle must survive
    // re-renders, otherwise the disc snaps back between spins.
    let tracker = use_mut_ref(RotationTracker::new);
    let rotation = use_state(|| 0.0_f64);
    let is_spinning = use_state(|| false);

    let start_spin = {
        let tracker = tracker.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let telegram_id = props.telegram_id;
        let on_settled = props.on_settled.clone();
        let on_failed = props.on_failed.clone();

        Callback::from(move |_: MouseEvent| {
            // Single in-flight spin: a tap while requesting or animating is
            // a no-op.
            if !tracker.borrow_mut().begin_request() {
                return;
            }
            is_spinning.set(true);

            let tracker = tracker.clone();
            let rotation = rotation.clone();
            let is_spinning = is_spinning.clone();
            let on_settled = on_settled.clone();
            let on_failed = on_failed.clone();

            spawn_local(async move {
                match api::spin_wheel(telegram_id).await {
                    Ok(result) => {
                        if !result.angle_matches_prize() {
                            log::warn!(
                                "served angle {} is outside the {} {} wedge",
                                result.angle,
                                result.prize_value,
                                result.prize_type
                            );
                        }

                        let start_rotation = tracker.borrow().rotation();
                        let target = tracker.borrow_mut().begin_animation(result.angle);
                        let rotation_change = target - start_rotation;
                        let start_time = js_sys::Date::now();
                        let duration = f64::from(SPIN_DURATION_MS);

                        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                            Rc::new(RefCell::new(None));
                        let first_frame = frame.clone();

                        *first_frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                            let elapsed = js_sys::Date::now() - start_time;
                            let progress = (elapsed / duration).min(1.0);

                            if progress < 1.0 {
                                rotation.set(
                                    start_rotation + rotation_change * ease_out_cubic(progress),
                                );
                                if let Some(window) = web_sys::window() {
                                    if let Some(closure) = frame.borrow().as_ref() {
                                        let _ = window.request_animation_frame(
                                            closure.as_ref().unchecked_ref(),
                                        );
                                    }
                                }
                            } else {
                                // Fixed duration elapsed: commit and report.
                                let committed = tracker.borrow_mut().settle();
                                rotation.set(committed);
                                is_spinning.set(false);
                                on_settled.emit(result.clone());
                            }
                        })
                            as Box<dyn FnMut()>));

                        if let Some(window) = web_sys::window() {
                            if let Some(closure) = first_frame.borrow().as_ref() {
                                let _ = window
                                    .request_animation_frame(closure.as_ref().unchecked_ref());
                            }
                        }
                    }
                    Err(error) => {
                        tracker.borrow_mut().fail();
                        is_spinning.set(false);
                        on_failed.emit(error);
                        tracker.borrow_mut().acknowledge_failure();
                    }
                }
            });
        })
    };

    html! {
        <div class={styles::WHEEL_CONTAINER}>
            <WheelCanvas rotation={*rotation} is_spinning={*is_spinning} />
            <div class={styles::SPIN_BUTTON_ROW}>
                <SpinButton is_spinning={*is_spinning} onclick={start_spin} />
            </div>
        </div>
    }
}
