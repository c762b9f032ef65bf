use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::user::UserProfile;

use crate::api;
use crate::base::{dispatch_points_event, dispatch_spins_event};
use crate::telegram;

#[derive(Clone, PartialEq)]
pub struct UserInfo {
    pub profile: Option<UserProfile>,
    pub loading: bool,
    pub error: Option<String>,
    /// Re-runs the bootstrap fetch, e.g. after a spin credits points that
    /// are only known server-side.
    pub refresh: Callback<()>,
}

/// Fetch-or-create bootstrap for the current Telegram user. Balances are
/// mirrored into localStorage and the update events so the header stays in
/// sync with whichever view triggered the change.
#[hook]
pub fn use_user() -> UserInfo {
    let profile = use_state(|| None::<UserProfile>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    let load = {
        let profile = profile.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            let profile = profile.clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                match api::fetch_or_create_user(telegram::user_id()).await {
                    Ok(user) => {
                        dispatch_spins_event(user.spins);
                        dispatch_points_event(user.points);
                        profile.set(Some(user));
                        error.set(None);
                    }
                    Err(e) => {
                        log::warn!("user bootstrap failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(());
            || ()
        });
    }

    UserInfo {
        profile: (*profile).clone(),
        loading: *loading,
        error: (*error).clone(),
        refresh: load,
    }
}
