// src/core/mod.rs

pub mod collate;
pub mod format;

pub use format::{format_date, format_price, split_log_line};
