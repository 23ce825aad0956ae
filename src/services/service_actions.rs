//! Row and header mutations on existing services: pause, resume, delete and
//! on-demand checks.
//!
//! Each action reports through a toast and invalidates the affected
//! queries. Every action kind has its own in-flight slot holding the id it
//! is working on, so only that kind's control is disabled.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::notification_service::NotificationState;
use super::query_cache::{Mutation, QueryInvalidation};
use super::session::SessionState;
use crate::bindings::ServiceStatus;

const PAUSE_FAILED_MESSAGE: &str = "Failed to pause service";
const RESUME_FAILED_MESSAGE: &str = "Failed to resume service";
const DELETE_FAILED_MESSAGE: &str = "Failed to delete service";
const CHECK_FAILED_MESSAGE: &str = "Failed to run health check";

/// Paused services resume; anything else pauses.
pub fn toggle_mutation(status: ServiceStatus) -> Mutation {
    if status == ServiceStatus::Paused {
        Mutation::Resume
    } else {
        Mutation::Pause
    }
}

pub fn delete_confirmation_message(name: &str) -> String {
    format!(
        "This will permanently delete \"{name}\" and all its health check history. This action cannot be undone."
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Toggle,
    Delete,
    Check,
}

/// In-flight service id per action kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingActions {
    toggle: Option<String>,
    delete: Option<String>,
    check: Option<String>,
}

impl PendingActions {
    fn slot(&self, kind: ActionKind) -> &Option<String> {
        match kind {
            ActionKind::Toggle => &self.toggle,
            ActionKind::Delete => &self.delete,
            ActionKind::Check => &self.check,
        }
    }

    fn slot_mut(&mut self, kind: ActionKind) -> &mut Option<String> {
        match kind {
            ActionKind::Toggle => &mut self.toggle,
            ActionKind::Delete => &mut self.delete,
            ActionKind::Check => &mut self.check,
        }
    }

    /// Claims the slot for `kind`. Fails only while another request of the
    /// same kind is in flight.
    pub fn try_begin(&mut self, kind: ActionKind, id: &str) -> bool {
        let slot = self.slot_mut(kind);
        if slot.is_some() {
            return false;
        }
        *slot = Some(id.to_string());
        true
    }

    pub fn finish(&mut self, kind: ActionKind) {
        *self.slot_mut(kind) = None;
    }

    pub fn is_pending(&self, kind: ActionKind, id: &str) -> bool {
        self.slot(kind).as_deref() == Some(id)
    }
}

#[derive(Clone, Copy)]
pub struct ServiceActionDeps {
    pub session: SessionState,
    pub cache: QueryInvalidation,
    pub notifications: NotificationState,
    pub pending: RwSignal<PendingActions>,
}

impl ServiceActionDeps {
    fn begin(&self, kind: ActionKind, id: &str) -> bool {
        self.pending
            .try_update(|p| p.try_begin(kind, id))
            .unwrap_or(false)
    }

    fn finish(&self, kind: ActionKind) {
        self.pending.try_update(|p| p.finish(kind));
    }

    /// Tracks whether `kind` is running for `id`.
    pub fn is_pending(&self, kind: ActionKind, id: &str) -> bool {
        self.pending.with(|p| p.is_pending(kind, id))
    }
}

/// Pause or resume `(id, current status)`.
pub fn toggle_pause_action(deps: ServiceActionDeps) -> impl Fn(String, ServiceStatus) + Clone {
    move |id: String, status: ServiceStatus| {
        if !deps.begin(ActionKind::Toggle, &id) {
            return;
        }
        let mutation = toggle_mutation(status);
        let api = deps.session.api();
        spawn_local(async move {
            let outcome = match mutation {
                Mutation::Resume => api.resume_service(&id).await,
                _ => api.pause_service(&id).await,
            };
            deps.finish(ActionKind::Toggle);
            match outcome {
                Ok(_) => {
                    log::info!("{:?} service {id}", mutation);
                    deps.cache.invalidate(mutation);
                    let title = match mutation {
                        Mutation::Resume => "Service resumed",
                        _ => "Service paused",
                    };
                    deps.notifications.success(title, None);
                }
                Err(e) if e.is_unauthorized() => {}
                Err(e) => {
                    let fallback = match mutation {
                        Mutation::Resume => RESUME_FAILED_MESSAGE,
                        _ => PAUSE_FAILED_MESSAGE,
                    };
                    deps.notifications.error(fallback, e.message());
                }
            }
        });
    }
}

/// Delete `(id, name)`; `on_deleted` runs with the id after success.
pub fn delete_service_action(
    deps: ServiceActionDeps,
    on_deleted: impl Fn(String) + Clone + 'static,
) -> impl Fn(String, String) + Clone {
    move |id: String, name: String| {
        if !deps.begin(ActionKind::Delete, &id) {
            return;
        }
        let api = deps.session.api();
        let on_deleted = on_deleted.clone();
        spawn_local(async move {
            let outcome = api.delete_service(&id).await;
            deps.finish(ActionKind::Delete);
            match outcome {
                Ok(_) => {
                    log::info!("Deleted service {id}");
                    deps.cache.invalidate(Mutation::Delete);
                    deps.notifications
                        .success("Service deleted", Some(&format!("\"{name}\" was removed")));
                    on_deleted(id);
                }
                Err(e) if e.is_unauthorized() => {}
                Err(e) => {
                    deps.notifications.error(DELETE_FAILED_MESSAGE, e.message());
                }
            }
        });
    }
}

/// Ask the backend to check `id` now. The new result shows up on the detail refetch.
pub fn run_check_action(deps: ServiceActionDeps) -> impl Fn(String) + Clone {
    move |id: String| {
        if !deps.begin(ActionKind::Check, &id) {
            return;
        }
        let api = deps.session.api();
        spawn_local(async move {
            let outcome = api.run_service_check(&id).await;
            deps.finish(ActionKind::Check);
            match outcome {
                Ok(_) => {
                    log::info!("Ran manual check for {id}");
                    deps.cache.invalidate(Mutation::Update);
                    deps.notifications.info("Health check queued", None);
                }
                Err(e) if e.is_unauthorized() => {}
                Err(e) => deps.notifications.error(CHECK_FAILED_MESSAGE, e.message()),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_mutation() {
        assert_eq!(toggle_mutation(ServiceStatus::Paused), Mutation::Resume);
        for status in [ServiceStatus::Active, ServiceStatus::Down, ServiceStatus::Warning] {
            assert_eq!(toggle_mutation(status), Mutation::Pause);
        }
    }

    #[test]
    fn test_pending_toggle_does_not_block_delete() {
        let mut pending = PendingActions::default();
        assert!(pending.try_begin(ActionKind::Toggle, "svc-a"));
        assert!(pending.try_begin(ActionKind::Delete, "svc-b"));
        assert!(pending.try_begin(ActionKind::Check, "svc-a"));

        assert!(pending.is_pending(ActionKind::Toggle, "svc-a"));
        assert!(pending.is_pending(ActionKind::Delete, "svc-b"));
        assert!(!pending.is_pending(ActionKind::Delete, "svc-a"));
    }

    #[test]
    fn test_same_kind_waits_for_finish() {
        let mut pending = PendingActions::default();
        assert!(pending.try_begin(ActionKind::Toggle, "svc-a"));
        assert!(!pending.try_begin(ActionKind::Toggle, "svc-b"));

        pending.finish(ActionKind::Toggle);
        assert!(!pending.is_pending(ActionKind::Toggle, "svc-a"));
        assert!(pending.try_begin(ActionKind::Toggle, "svc-b"));
    }

    #[test]
    fn test_finish_leaves_other_kinds_running() {
        let mut pending = PendingActions::default();
        pending.try_begin(ActionKind::Delete, "svc-a");
        pending.try_begin(ActionKind::Check, "svc-a");

        pending.finish(ActionKind::Delete);
        assert!(!pending.is_pending(ActionKind::Delete, "svc-a"));
        assert!(pending.is_pending(ActionKind::Check, "svc-a"));
    }

    #[test]
    fn test_delete_confirmation_names_service() {
        let message = delete_confirmation_message("Payments API");
        assert!(message.starts_with("This will permanently delete \"Payments API\""));
        assert!(message.ends_with("This action cannot be undone."));
    }
}
