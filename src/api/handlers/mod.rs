//! HTTP request handlers

pub mod health;
pub mod designs;
pub mod estimate;
pub mod detail;
pub mod print;
