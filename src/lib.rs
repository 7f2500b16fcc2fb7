// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod charts;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod render;
pub mod store;
pub mod toast;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
