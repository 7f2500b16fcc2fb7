// src/toast.rs
// Transient notification banner. Fire-and-forget: whoever draws it drops
// it once `is_expired` and schedules a repaint for `remaining`.

use std::time::{Duration, Instant};

use crate::config::consts::TOAST_DURATION;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    shown_at: Instant,
}

impl Toast {
    pub fn new<T: Into<String>>(message: T, kind: ToastKind, now: Instant) -> Self {
        Self { message: message.into(), kind, shown_at: now }
    }

    pub fn success<T: Into<String>>(message: T, now: Instant) -> Self {
        Self::new(message, ToastKind::Success, now)
    }

    pub fn info<T: Into<String>>(message: T, now: Instant) -> Self {
        Self::new(message, ToastKind::Info, now)
    }

    pub fn error<T: Into<String>>(message: T, now: Instant) -> Self {
        Self::new(message, ToastKind::Error, now)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_DURATION
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        TOAST_DURATION.saturating_sub(now.saturating_duration_since(self.shown_at))
    }
}
