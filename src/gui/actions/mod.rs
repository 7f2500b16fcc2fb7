// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs

pub use copy::copy;
pub use export::export;
