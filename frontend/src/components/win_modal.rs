use yew::prelude::*;

use shared::wheel_game::SpinResult;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinModalProps {
    pub open: bool,
    pub result: Option<SpinResult>,
    pub on_close: Callback<()>,
}

#[function_component(WinModal)]
pub fn win_modal(props: &WinModalProps) -> Html {
    let Some(result) = props.result.as_ref().filter(|_| props.open) else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={styles::MODAL_OVERLAY} onclick={close.clone()}>
            <div class={styles::MODAL_CONTENT} onclick={stop}>
                <span class={styles::MODAL_ICON}>{"🎉"}</span>
                <h3 class={styles::MODAL_TITLE}>{"YOU WON!"}</h3>
                <p class={styles::MODAL_TEXT}>{result.prize_label()}</p>
                <button class={styles::BUTTON_PRIMARY} onclick={close}>
                    {"AWESOME!"}
                </button>
            </div>
        </div>
    }
}
