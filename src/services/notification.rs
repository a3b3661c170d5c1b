//! Toast notifications

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: ToastKind,
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

    pub fn add(&self, kind: ToastKind, title: &str, message: Option<&str>) {
        let id = Uuid::new_v4();
        self.notifications.update(|list| {
            list.push(Notification {
                id,
                kind,
                title: title.to_string(),
                message: message.map(String::from),
            })
        });

        let state = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            state.remove(id);
        });
    }

    pub fn remove(&self, id: Uuid) {
        self.notifications.update(|list| {
            if let Some(pos) = list.iter().position(|n| n.id == id) {
                list.remove(pos);
            }
        });
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
