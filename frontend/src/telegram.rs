//! Bridge to the `window.Telegram.WebApp` object injected by
//! telegram-web-app.js. Every lookup degrades to a no-op outside Telegram so
//! the app stays usable in a plain browser during development.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

/// Fallback id when the app runs outside Telegram.
pub const MOCK_USER_ID: i64 = 123_456_789;

fn web_app() -> Option<JsValue> {
    let window = window()?;
    let telegram = Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
    if telegram.is_undefined() {
        return None;
    }
    let web_app = Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
    if web_app.is_undefined() {
        None
    } else {
        Some(web_app)
    }
}

fn get_path(target: &JsValue, path: &[&str]) -> Option<JsValue> {
    let mut current = target.clone();
    for key in path {
        current = Reflect::get(&current, &JsValue::from_str(key)).ok()?;
        if current.is_undefined() || current.is_null() {
            return None;
        }
    }
    Some(current)
}

fn call_method(target: &JsValue, name: &str, arg: Option<&JsValue>) {
    if let Some(func) = get_path(target, &[name]).and_then(|f| f.dyn_into::<Function>().ok()) {
        let result = match arg {
            Some(arg) => func.call1(target, arg),
            None => func.call0(target),
        };
        if result.is_err() {
            log::warn!("Telegram.WebApp.{} call failed", name);
        }
    }
}

/// Telegram id of the current user, or [`MOCK_USER_ID`] in a plain browser.
pub fn user_id() -> i64 {
    web_app()
        .and_then(|app| get_path(&app, &["initDataUnsafe", "user", "id"]))
        .and_then(|id| id.as_f64())
        .map(|id| id as i64)
        .unwrap_or(MOCK_USER_ID)
}

/// Expands the Mini App to full height.
pub fn expand() {
    if let Some(app) = web_app() {
        call_method(&app, "expand", None);
    }
}

pub fn set_header_color(color: &str) {
    if let Some(app) = web_app() {
        call_method(&app, "setHeaderColor", Some(&JsValue::from_str(color)));
    }
}

fn haptic(kind: &str) {
    if let Some(haptics) = web_app().and_then(|app| get_path(&app, &["HapticFeedback"])) {
        call_method(&haptics, "notificationOccurred", Some(&JsValue::from_str(kind)));
    }
}

/// Success haptic after a settled spin or purchase.
pub fn haptic_success() {
    haptic("success");
}

/// Error haptic when a spin or purchase is rejected.
pub fn haptic_error() {
    haptic("error");
}
