// src/models/mod.rs

pub mod contest;
pub mod ranking;
pub mod solved_question;
