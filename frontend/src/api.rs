//! HTTP collaborator for the reward-game backend. One call per user action,
//! no retries; rejections bubble up as [`ApiError`] for the caller to
//! surface.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use shared::admin::{AddSpins, AdminStats};
use shared::tasks::{NewTask, Task};
use shared::user::{UserCreate, UserProfile};
use shared::wheel_game::{PurchaseResult, SpinResult};

use crate::config::get_api_base_url;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    Network(String),
    /// The backend answered with a non-success status.
    Server { status: u16, detail: String },
}

impl ApiError {
    fn network(err: gloo_net::Error) -> Self {
        ApiError::Network(format!("{err:?}"))
    }

    /// Business-rule rejection of a spin with an empty balance.
    pub fn is_out_of_spins(&self) -> bool {
        matches!(self, ApiError::Server { status: 400, detail } if detail.contains("No spins"))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(message) => write!(f, "Network error: {message}"),
            ApiError::Server { detail, .. } => write!(f, "{detail}"),
        }
    }
}

/// Pulls FastAPI's `{"detail": ...}` out of an error body, falling back to
/// the raw text.
fn error_detail(body: &str, status: u16) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            if body.is_empty() {
                format!("Request failed with status {status}")
            } else {
                body.to_string()
            }
        })
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if (200..300).contains(&status) {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(format!("{e:?}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Server {
            status,
            detail: error_detail(&body, status),
        })
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&format!("{}{}", get_api_base_url(), path))
        .send()
        .await
        .map_err(ApiError::network)?;
    parse(response).await
}

async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::post(&format!("{}{}", get_api_base_url(), path))
        .send()
        .await
        .map_err(ApiError::network)?;
    parse(response).await
}

async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
    admin_id: Option<i64>,
) -> Result<T, ApiError> {
    let mut builder = Request::post(&format!("{}{}", get_api_base_url(), path))
        .header("Content-Type", "application/json");
    if let Some(id) = admin_id {
        builder = builder.header("X-Telegram-ID", &id.to_string());
    }
    let response = builder
        .json(body)
        .map_err(ApiError::network)?
        .send()
        .await
        .map_err(ApiError::network)?;
    parse(response).await
}

/// `GET /users/{id}`, registering the user on first contact (404).
pub async fn fetch_or_create_user(telegram_id: i64) -> Result<UserProfile, ApiError> {
    match get_json::<UserProfile>(&format!("/users/{telegram_id}")).await {
        Err(ApiError::Server { status: 404, .. }) => {
            post_json("/users/", &UserCreate::new(telegram_id), None).await
        }
        other => other,
    }
}

pub async fn spin_wheel(telegram_id: i64) -> Result<SpinResult, ApiError> {
    post_empty(&format!("/game/spin?telegram_id={telegram_id}")).await
}

pub async fn fetch_tasks() -> Result<Vec<Task>, ApiError> {
    get_json("/tasks/").await
}

pub async fn buy_spins(telegram_id: i64, amount: i32) -> Result<PurchaseResult, ApiError> {
    post_empty(&format!(
        "/game/buy_spins?telegram_id={telegram_id}&amount={amount}"
    ))
    .await
}

pub async fn fetch_admin_stats(admin_id: i64) -> Result<AdminStats, ApiError> {
    let response = Request::get(&format!("{}/admin/stats", get_api_base_url()))
        .header("X-Telegram-ID", &admin_id.to_string())
        .send()
        .await
        .map_err(ApiError::network)?;
    parse(response).await
}

pub async fn create_admin_task(admin_id: i64, task: &NewTask) -> Result<Task, ApiError> {
    post_json("/admin/tasks", task, Some(admin_id)).await
}

pub async fn add_admin_spins(
    admin_id: i64,
    user_id: i64,
    amount: i32,
) -> Result<UserProfile, ApiError> {
    post_json(
        &format!("/admin/users/{user_id}/spins"),
        &AddSpins { amount },
        Some(admin_id),
    )
    .await
}

/// Dev-only: simulates a CPA postback so task rewards can be exercised
/// without going through the offer wall.
pub async fn send_debug_postback(click_id: &str, telegram_id: i64) -> Result<(), ApiError> {
    let response = Request::get(&format!(
        "{}/tasks/postback?click_id={click_id}&sub_id={telegram_id}&payout=1.0&token=YOUR_CPA_SECRET_TOKEN",
        get_api_base_url()
    ))
    .send()
    .await
    .map_err(ApiError::network)?;

    let status = response.status();
    if (200..300).contains(&status) {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Server {
            status,
            detail: error_detail(&body, status),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_detail_reads_fastapi_shape() {
        assert_eq!(
            error_detail(r#"{"detail": "No spins available"}"#, 400),
            "No spins available"
        );
    }

    #[test]
    fn error_detail_falls_back_to_raw_body() {
        assert_eq!(error_detail("gateway timeout", 504), "gateway timeout");
        assert_eq!(error_detail("", 500), "Request failed with status 500");
    }

    #[test]
    fn out_of_spins_is_a_recognized_rejection() {
        let err = ApiError::Server {
            status: 400,
            detail: "No spins available".to_string(),
        };
        assert!(err.is_out_of_spins());

        let other = ApiError::Server {
            status: 400,
            detail: "Insufficient points".to_string(),
        };
        assert!(!other.is_out_of_spins());
        assert!(!ApiError::Network("timeout".to_string()).is_out_of_spins());
    }
}
