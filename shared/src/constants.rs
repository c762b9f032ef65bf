/// Price of one extra spin, in points.
pub const COST_PER_SPIN: i64 = 1000;

/// Purchase quantity cap enforced by the buy panel.
pub const MAX_SPINS_PER_PURCHASE: i32 = 20;

/// Spins granted when an invited friend completes a task.
pub const REFERRAL_REWARD_SPINS: i32 = 3;

/// Deep link to the bot; the inviter's telegram id goes after `start=`.
pub const BOT_DEEP_LINK_BASE: &str = "https://t.me/MyBot?start=";

pub const NETWORK_ERROR: &str = "Network error. Please try again";
pub const OUT_OF_SPINS_ERROR: &str = "No spins available";
pub const PURCHASE_FAILED_ERROR: &str = "Purchase failed";
