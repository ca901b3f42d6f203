// src/lib.rs

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod ranking;
pub mod routes;
pub mod state;
pub mod store;

pub use ranking::{compute_rankings, resolve_leaderboard};
pub use routes::create_router;
