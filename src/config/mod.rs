// src/config/mod.rs
pub mod binder;
pub mod consts;
pub mod options;
pub mod state;
