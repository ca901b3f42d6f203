// src/handlers/mod.rs

pub mod contest;
pub mod ranking;
