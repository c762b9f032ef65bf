pub mod admin;
pub mod game;
