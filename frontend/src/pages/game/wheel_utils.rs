use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_class = if props.is_spinning {
        styles::SPIN_BUTTON_DISABLED
    } else {
        styles::SPIN_BUTTON_ACTIVE
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <button
            class={button_class}
            onclick={props.onclick.clone()}
            disabled={props.is_spinning}
        >
            <div class="flex items-center justify-center">
                <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 6v6l4 2" />
                </svg>
                <span>{ if props.is_spinning { "SPINNING..." } else { "SPIN THE WHEEL" } }</span>
            </div>
        </button>
    }
}
