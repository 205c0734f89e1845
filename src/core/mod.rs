//! Core utilities shared by every module

#[path = "utils/safety.rs"]
mod safety;
