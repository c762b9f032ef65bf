pub mod use_balances;
pub mod use_user;

pub use use_balances::*;
pub use use_user::*;
