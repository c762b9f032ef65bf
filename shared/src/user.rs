use serde::{Serialize, Deserialize};
use validator::Validate;

/// One player, as served by `/users/{telegram_id}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    pub telegram_id: i64,
    pub username: Option<String>,
    pub spins: i32,
    pub points: f64,
    pub created_at: String,
}

/// Registration payload for `POST /users/`.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct UserCreate {
    #[validate(range(min = 1))]
    pub telegram_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer_id: Option<i64>,
}

impl UserCreate {
    pub fn new(telegram_id: i64) -> Self {
        Self {
            telegram_id,
            username: None,
            referrer_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_requires_a_real_telegram_id() {
        assert!(UserCreate::new(123_456_789).validate().is_ok());
        assert!(UserCreate::new(0).validate().is_err());
    }
}
