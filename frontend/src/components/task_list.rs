use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

use shared::constants::{BOT_DEEP_LINK_BASE, REFERRAL_REWARD_SPINS};
use shared::tasks::Task;

use crate::api;
use crate::styles;

/// Offer-wall link locker; the visited user is identified by `tracking_id`.
/// The script-injection locker variant lives entirely outside this app.
const CPA_OFFER_URL: &str = "https://www.cpagrip.com/show.php?l=REPLACE_WITH_YOUR_LINK_ID";

pub const TASK_WALL_SECTION_ID: &str = "task-wall-section";
pub const INVITE_SECTION_ID: &str = "invite-friends-section";

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
    pub telegram_id: i64,
    /// Fired after a simulated postback credits spins, so the parent can
    /// re-fetch the profile.
    pub on_reward: Callback<()>,
}

#[function_component(TaskList)]
pub fn task_list(props: &TaskListProps) -> Html {
    let tasks = use_state(Vec::<Task>::new);
    let copied = use_state(|| false);
    let debug_status = use_state(|| None::<String>);

    {
        let tasks = tasks.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::fetch_tasks().await {
                    Ok(list) => tasks.set(list),
                    Err(e) => log::warn!("failed to fetch tasks: {e}"),
                }
            });
            || ()
        });
    }

    let telegram_id = props.telegram_id;
    let referral_link = format!("{}{}", BOT_DEEP_LINK_BASE, telegram_id);

    let open_task = Callback::from(move |_: MouseEvent| {
        let link = format!("{}&tracking_id={}", CPA_OFFER_URL, telegram_id);
        if let Some(window) = window() {
            let _ = window.open_with_url_and_target(&link, "_blank");
        }
    });

    let copy_link = {
        let copied = copied.clone();
        let referral_link = referral_link.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(window) = window() {
                let _ = window.navigator().clipboard().write_text(&referral_link);
            }
            copied.set(true);
            let copied = copied.clone();
            Timeout::new(2000, move || copied.set(false)).forget();
        })
    };

    let send_postback = {
        let debug_status = debug_status.clone();
        let on_reward = props.on_reward.clone();
        Callback::from(move |_: MouseEvent| {
            let debug_status = debug_status.clone();
            let on_reward = on_reward.clone();
            let click_id = format!("DEBUG_{}", (js_sys::Math::random() * 10_000.0) as u32);
            spawn_local(async move {
                match api::send_debug_postback(&click_id, telegram_id).await {
                    Ok(()) => {
                        debug_status.set(Some(format!(
                            "Simulated postback sent! +{} spins.",
                            REFERRAL_REWARD_SPINS
                        )));
                        on_reward.emit(());
                    }
                    Err(e) => debug_status.set(Some(format!("Postback failed: {e}"))),
                }
            });
        })
    };

    html! {
        <div class="w-full">
            <h3 id={TASK_WALL_SECTION_ID} class={styles::SECTION_TITLE}>
                <span>{"⚡"}</span><span>{"Task Wall (Get Spins)"}</span>
            </h3>

            <ul class={styles::TASK_LIST}>
                { for tasks.iter().map(|task| html! {
                    <li key={task.id} class={styles::TASK_ITEM} onclick={open_task.clone()}>
                        <div class={styles::TASK_INFO}>
                            <span class={styles::TASK_NAME}>{&task.name}</span>
                            if let Some(description) = &task.description {
                                <p class={styles::TASK_DESC}>{description}</p>
                            }
                        </div>
                        <button class={styles::TASK_REWARD_BUTTON}>
                            {format!("+{} Spins", task.reward_spins)}
                        </button>
                    </li>
                }) }
            </ul>

            <div id={INVITE_SECTION_ID} class={styles::INVITE_SECTION}>
                <h4 class={styles::INVITE_TITLE}>{"Invite Friends"}</h4>
                <p class={styles::INVITE_TEXT}>
                    {format!("Get {} spins when they complete a task!", REFERRAL_REWARD_SPINS)}
                </p>
                <div class={styles::INVITE_INPUT_GROUP}>
                    <input class={styles::INVITE_INPUT} type="text" readonly={true} value={referral_link} />
                    <button class={styles::BUTTON_COPY} onclick={copy_link}>
                        { if *copied { "Copied!" } else { "Copy" } }
                    </button>
                </div>
            </div>

            <div class={styles::DEBUG_ZONE}>
                <h4 class={styles::DEBUG_TITLE}>{"Developer Debug Zone"}</h4>
                <p class={styles::TEXT_SMALL}>{"Simulate completing a task (CPA postback)"}</p>
                <button class={styles::BUTTON_DEBUG} onclick={send_postback}>
                    {"[DEV] Force Complete Task"}
                </button>
                if let Some(status) = &*debug_status {
                    <p class={styles::TEXT_SMALL}>{status}</p>
                }
            </div>
        </div>
    }
}
