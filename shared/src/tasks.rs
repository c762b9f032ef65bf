use serde::{Serialize, Deserialize};
use validator::Validate;

/// One task-wall entry, as served by `/tasks/`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub cpa_network_id: String,
    pub reward_spins: i32,
    pub is_active: bool,
}

/// Admin payload for `POST /admin/tasks`.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct NewTask {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub cpa_network_id: String,
    #[validate(range(min = 1, max = 100))]
    pub reward_spins: i32,
    pub is_active: bool,
}

impl NewTask {
    /// Human-readable validation outcome for form feedback.
    pub fn validated(&self) -> Result<(), String> {
        self.validate().map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_task(name: &str, reward_spins: i32) -> NewTask {
        NewTask {
            name: name.to_string(),
            description: None,
            cpa_network_id: "offer_42".to_string(),
            reward_spins,
            is_active: true,
        }
    }

    #[test]
    fn task_names_must_not_be_empty() {
        assert!(new_task("Complete Survey", 3).validate().is_ok());
        assert!(new_task("", 3).validate().is_err());
    }

    #[test]
    fn reward_spins_are_bounded() {
        assert!(new_task("Install App", 1).validate().is_ok());
        assert!(new_task("Install App", 0).validate().is_err());
        assert!(new_task("Install App", 101).validate().is_err());
    }
}
