//! Shared helper functions

pub mod date;
