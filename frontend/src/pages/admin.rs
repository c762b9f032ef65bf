use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use shared::admin::{AddSpins, AdminStats};
use shared::tasks::NewTask;

use crate::api;
use crate::styles;
use crate::telegram;

/// Minimal admin panel: aggregate stats, credit spins, create tasks.
/// Authorization is enforced server-side against the caller's telegram id.
#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let stats = use_state(|| None::<AdminStats>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    let user_id_ref = use_node_ref();
    let spins_ref = use_node_ref();
    let credit_status = use_state(|| None::<String>);

    let task_name_ref = use_node_ref();
    let task_network_ref = use_node_ref();
    let task_spins_ref = use_node_ref();
    let task_status = use_state(|| None::<String>);

    {
        let stats = stats.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::fetch_admin_stats(telegram::user_id()).await {
                    Ok(data) => stats.set(Some(data)),
                    Err(e) => {
                        log::warn!("admin stats fetch failed: {e}");
                        error.set(Some("Failed to load stats. Are you admin?".to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let handle_credit = {
        let user_id_ref = user_id_ref.clone();
        let spins_ref = spins_ref.clone();
        let credit_status = credit_status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let user_id = user_id_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.value().parse::<i64>().ok());
            let amount = spins_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.value().parse::<i32>().ok());

            let (Some(user_id), Some(amount)) = (user_id, amount) else {
                credit_status.set(Some("Enter a user id and a spin amount".to_string()));
                return;
            };
            if let Err(message) = (AddSpins { amount }).validated() {
                credit_status.set(Some(message));
                return;
            }

            let credit_status = credit_status.clone();
            spawn_local(async move {
                match api::add_admin_spins(telegram::user_id(), user_id, amount).await {
                    Ok(user) => credit_status.set(Some(format!(
                        "Credited {} spins; user now has {}.",
                        amount, user.spins
                    ))),
                    Err(e) => credit_status.set(Some(format!("Failed to add spins: {e}"))),
                }
            });
        })
    };

    let handle_create_task = {
        let task_name_ref = task_name_ref.clone();
        let task_network_ref = task_network_ref.clone();
        let task_spins_ref = task_spins_ref.clone();
        let task_status = task_status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name = task_name_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let cpa_network_id = task_network_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let reward_spins = task_spins_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.value().parse::<i32>().ok())
                .unwrap_or(0);

            let task = NewTask {
                name,
                description: None,
                cpa_network_id,
                reward_spins,
                is_active: true,
            };
            if let Err(message) = task.validated() {
                task_status.set(Some(message));
                return;
            }

            let task_status = task_status.clone();
            spawn_local(async move {
                match api::create_admin_task(telegram::user_id(), &task).await {
                    Ok(created) => {
                        task_status.set(Some(format!("Task \"{}\" created.", created.name)))
                    }
                    Err(e) => task_status.set(Some(format!("Error creating task: {e}"))),
                }
            });
        })
    };

    if *loading {
        return html! { <div class={styles::LOADING_SCREEN}>{"Loading Admin Panel..."}</div> };
    }
    if let Some(message) = &*error {
        return html! { <div class={styles::ERROR_SCREEN}>{message}</div> };
    }

    html! {
        <div class={styles::ADMIN_CONTAINER}>
            <h2 class={styles::SECTION_TITLE}>{"Admin Dashboard"}</h2>

            if let Some(stats) = &*stats {
                <div class={styles::ADMIN_GRID}>
                    <div class={styles::ADMIN_CARD}>
                        <div class={styles::ADMIN_CARD_TITLE}>{"Total Users"}</div>
                        <div class={styles::ADMIN_CARD_VALUE}>{stats.total_users}</div>
                    </div>
                    <div class={styles::ADMIN_CARD}>
                        <div class={styles::ADMIN_CARD_TITLE}>{"Tasks Done"}</div>
                        <div class={styles::ADMIN_CARD_VALUE}>{stats.total_tasks_completed}</div>
                    </div>
                    <div class={styles::ADMIN_CARD}>
                        <div class={styles::ADMIN_CARD_TITLE}>{"Spins Used"}</div>
                        <div class={styles::ADMIN_CARD_VALUE}>{stats.total_spins_consumed}</div>
                    </div>
                    <div class={styles::ADMIN_CARD}>
                        <div class={styles::ADMIN_CARD_TITLE}>{"Est. Revenue"}</div>
                        <div class={styles::ADMIN_CARD_VALUE}>
                            {format!("${:.2}", stats.estimated_revenue)}
                        </div>
                    </div>
                </div>
            }

            <div class={styles::ADMIN_SECTION}>
                <h3 class={styles::TASK_NAME}>{"Manage Users"}</h3>
                <form class={styles::FORM} onsubmit={handle_credit}>
                    <label class={styles::TEXT_LABEL}>
                        {"User ID"}
                        <input ref={user_id_ref} class={styles::INPUT} type="number" placeholder="User ID" />
                    </label>
                    <label class={styles::TEXT_LABEL}>
                        {"Spins"}
                        <input ref={spins_ref} class={styles::INPUT} type="number" value="10" />
                    </label>
                    <button type="submit" class={styles::BUTTON_PRIMARY}>{"Add Spins"}</button>
                    if let Some(status) = &*credit_status {
                        <p class={styles::TEXT_SMALL}>{status}</p>
                    }
                </form>
            </div>

            <div class={styles::ADMIN_SECTION}>
                <h3 class={styles::TASK_NAME}>{"Create Task"}</h3>
                <form class={styles::FORM} onsubmit={handle_create_task}>
                    <label class={styles::TEXT_LABEL}>
                        {"Task Name"}
                        <input ref={task_name_ref} class={styles::INPUT} type="text" placeholder="Task Name" />
                    </label>
                    <label class={styles::TEXT_LABEL}>
                        {"CPA/Network ID"}
                        <input ref={task_network_ref} class={styles::INPUT} type="text" placeholder="CPA/Network ID" />
                    </label>
                    <label class={styles::TEXT_LABEL}>
                        {"Reward Spins"}
                        <input ref={task_spins_ref} class={styles::INPUT} type="number" value="1" />
                    </label>
                    <button type="submit" class={styles::BUTTON_PRIMARY}>{"Create Task"}</button>
                    if let Some(status) = &*task_status {
                        <p class={styles::TEXT_SMALL}>{status}</p>
                    }
                </form>
            </div>
        </div>
    }
}
