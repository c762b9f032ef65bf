use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct NoSpinsModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_go_to_tasks: Callback<()>,
    pub on_invite_friends: Callback<()>,
}

#[function_component(NoSpinsModal)]
pub fn no_spins_modal(props: &NoSpinsModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let go_to_tasks = {
        let on_close = props.on_close.clone();
        let on_go_to_tasks = props.on_go_to_tasks.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
            on_go_to_tasks.emit(());
        })
    };

    let invite_friends = {
        let on_close = props.on_close.clone();
        let on_invite_friends = props.on_invite_friends.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
            on_invite_friends.emit(());
        })
    };

    html! {
        <div class={styles::MODAL_OVERLAY} onclick={close}>
            <div class={styles::MODAL_CONTENT} onclick={stop}>
                <span class={styles::MODAL_ICON}>{"😢"}</span>
                <h3 class={styles::MODAL_TITLE}>{"Out of Spins!"}</h3>
                <p class={styles::MODAL_TEXT}>
                    {"You have no spins left. Complete tasks or invite friends to keep playing!"}
                </p>
                <div class={styles::MODAL_BUTTON_COLUMN}>
                    <button class={styles::BUTTON_PRIMARY} onclick={go_to_tasks}>
                        {"📋 Complete Tasks"}
                    </button>
                    <button class={styles::BUTTON_SECONDARY} onclick={invite_friends}>
                        {"👥 Invite Friends"}
                    </button>
                </div>
            </div>
        </div>
    }
}
