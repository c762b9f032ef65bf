mod wheel;
mod wheel_canvas;
mod wheel_utils;

use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use shared::wheel_game::SpinResult;

use crate::api::ApiError;
use crate::base::{dispatch_points_event, dispatch_spins_event};
use crate::components::task_list::{INVITE_SECTION_ID, TASK_WALL_SECTION_ID};
use crate::components::{BuySpins, NoSpinsModal, TaskList, WinModal};
use crate::hooks::use_user;
use crate::styles;
use crate::telegram;

use wheel::Wheel;

fn scroll_to_element(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// The main wheel view: spin, buy spins, earn spins on the task wall.
#[function_component(Game)]
pub fn game() -> Html {
    let user = use_user();
    let win_modal_open = use_state(|| false);
    let last_win = use_state(|| None::<SpinResult>);
    let no_spins_modal_open = use_state(|| false);

    let on_settled = {
        let refresh = user.refresh.clone();
        let win_modal_open = win_modal_open.clone();
        let last_win = last_win.clone();
        Callback::from(move |result: SpinResult| {
            dispatch_spins_event(result.remaining_spins);
            // Points won on the wheel are only known server-side; re-fetch
            // the profile to pick them up.
            refresh.emit(());
            telegram::haptic_success();
            last_win.set(Some(result));
            win_modal_open.set(true);
        })
    };

    let on_failed = {
        let no_spins_modal_open = no_spins_modal_open.clone();
        Callback::from(move |error: ApiError| {
            if error.is_out_of_spins() {
                log::info!("spin rejected: no spins remaining");
            } else {
                log::warn!("spin failed: {error}");
            }
            telegram::haptic_error();
            no_spins_modal_open.set(true);
        })
    };

    let on_purchase = Callback::from(move |result: shared::wheel_game::PurchaseResult| {
        dispatch_spins_event(result.remaining_spins);
        dispatch_points_event(result.remaining_points);
    });

    let on_task_reward = {
        let refresh = user.refresh.clone();
        Callback::from(move |_: ()| refresh.emit(()))
    };

    let close_win_modal = {
        let win_modal_open = win_modal_open.clone();
        Callback::from(move |_: ()| win_modal_open.set(false))
    };
    let close_no_spins_modal = {
        let no_spins_modal_open = no_spins_modal_open.clone();
        Callback::from(move |_: ()| no_spins_modal_open.set(false))
    };
    let go_to_tasks = Callback::from(|_: ()| scroll_to_element(TASK_WALL_SECTION_ID));
    let invite_friends = Callback::from(|_: ()| scroll_to_element(INVITE_SECTION_ID));

    if user.loading {
        return html! { <div class={styles::LOADING_SCREEN}>{"Loading..."}</div> };
    }
    let Some(profile) = user.profile else {
        return html! { <div class={styles::ERROR_SCREEN}>{"Failed to load user data."}</div> };
    };

    html! {
        <div class={styles::GAME_STACK}>
            <Wheel
                telegram_id={profile.telegram_id}
                on_settled={on_settled}
                on_failed={on_failed}
            />

            <BuySpins telegram_id={profile.telegram_id} on_complete={on_purchase} />

            <hr class={styles::DIVIDER} />

            <TaskList telegram_id={profile.telegram_id} on_reward={on_task_reward} />

            <WinModal
                open={*win_modal_open}
                result={(*last_win).clone()}
                on_close={close_win_modal}
            />

            <NoSpinsModal
                open={*no_spins_modal_open}
                on_close={close_no_spins_modal}
                on_go_to_tasks={go_to_tasks}
                on_invite_friends={invite_friends}
            />
        </div>
    }
}
