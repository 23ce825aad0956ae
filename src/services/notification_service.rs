use std::time::Duration;

use leptos::prelude::*;
use uuid::Uuid;

/// Toasts without an explicit duration disappear after this long.
pub const DEFAULT_TOAST_MS: u64 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

impl ToastType {
    pub fn accent_class(&self) -> &'static str {
        match self {
            ToastType::Success => "border-status-success text-status-success",
            ToastType::Error => "border-status-error text-status-error",
            ToastType::Info => "border-primary text-primary",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub toast_type: ToastType,
    pub title: String,
    pub message: Option<String>,
}

#[derive(Clone, Copy)]
pub struct NotificationState {
    pub notifications: RwSignal<Vec<Notification>>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(Vec::new()),
        }
    }

    pub fn add(&self, toast_type: ToastType, title: String, message: Option<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.notifications.update(|list| {
            list.push(Notification {
                id,
                toast_type,
                title,
                message,
            })
        });

        let state = *self;
        set_timeout(
            move || state.remove(id),
            Duration::from_millis(DEFAULT_TOAST_MS),
        );
        id
    }

    pub fn remove(&self, id: Uuid) {
        // The owner may already be gone when a dismissal timer fires.
        self.notifications.try_update(|list| list.retain(|n| n.id != id));
    }

    pub fn success(&self, title: &str, message: Option<&str>) {
        self.add(ToastType::Success, title.to_string(), message.map(String::from));
    }

    pub fn error(&self, title: &str, message: Option<&str>) {
        self.add(ToastType::Error, title.to_string(), message.map(String::from));
    }

    pub fn info(&self, title: &str, message: Option<&str>) {
        self.add(ToastType::Info, title.to_string(), message.map(String::from));
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notification_state() {
    provide_context(NotificationState::new());
}

pub fn use_notification_state() -> NotificationState {
    expect_context::<NotificationState>()
}
