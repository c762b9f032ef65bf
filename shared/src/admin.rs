use serde::{Serialize, Deserialize};
use validator::Validate;

/// Aggregates for the admin dashboard, as served by `/admin/stats`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdminStats {
    pub total_users: i64,
    pub total_tasks_completed: i64,
    pub total_spins_consumed: i64,
    pub estimated_revenue: f64,
}

/// Payload for `POST /admin/users/{id}/spins`.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct AddSpins {
    #[validate(range(min = 1, max = 10_000))]
    pub amount: i32,
}

impl AddSpins {
    /// Human-readable validation outcome for form feedback.
    pub fn validated(&self) -> Result<(), String> {
        self.validate().map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credited_spins_are_bounded() {
        assert!(AddSpins { amount: 10 }.validate().is_ok());
        assert!(AddSpins { amount: 0 }.validate().is_err());
        assert!(AddSpins { amount: 20_000 }.validate().is_err());
    }
}
