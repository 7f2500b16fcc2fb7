// src/log.rs
//
// Logging front door. Everything goes through the `log` facade; the binaries
// call `init()` once to install env_logger. The short macros keep call sites
// terse: `logf!("Export: OK → {}", path.display())`.

use ::log::LevelFilter;

/// Install env_logger. Debug builds log this crate at Info, release only errors.
/// `RUST_LOG` still wins when set.
pub fn init() {
    let (global_level, crate_level) = if cfg!(debug_assertions) {
        (LevelFilter::Warn, LevelFilter::Info)
    } else {
        (LevelFilter::Error, LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, global_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), crate_level)
        .parse_default_env();

    // A second init (tests, embedding) is harmless.
    let _ = builder.try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::log::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}
