//! Toast Context
//!
//! Transient notifications provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::TOAST_TIMEOUT_MS;
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
            ToastKind::Info => "toast info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide toast signals provided via context
#[derive(Clone, Copy)]
pub struct ToastContext {
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl ToastContext {
    pub fn new() -> Self {
        let (toasts, set_toasts) = signal(Vec::<Toast>::new());
        Self {
            toasts,
            set_toasts,
            next_id: StoredValue::new(0),
        }
    }

    /// Show a toast; it dismisses itself after the configured timeout
    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.set_toasts.update(|t| t.push(Toast { id, kind, message: message.into() }));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            ctx.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn api_error(&self, err: &ApiError) {
        self.error(err.user_message());
    }

    pub fn dismiss(&self, id: u32) {
        let _ = self.set_toasts.try_update(|t| t.retain(|toast| toast.id != id));
    }
}

pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}
