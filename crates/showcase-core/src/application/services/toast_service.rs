//! Toast Service - auto-hiding feedback messages.

use std::time::Duration;

use tracing::debug;

use crate::{application::runtime::spawn_detached, application::state::SharedState, domain::ToastKind};

/// Shows a toast and schedules its auto-hide.
///
/// A newer toast replaces the message and restarts the clock; the earlier
/// timer still fires but finds a stale ticket and does nothing.
#[derive(Debug, Clone)]
pub struct ToastService {
    state: SharedState,
    lifetime: Duration,
}

impl ToastService {
    pub fn new(state: SharedState, lifetime: Duration) -> Self {
        Self { state, lifetime }
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let ticket = self.state.with(|s| s.toast.show(message, kind));
        debug!(%kind, "Toast shown");

        let state = self.state.clone();
        let lifetime = self.lifetime;
        spawn_detached("toast.auto-hide", async move {
            tokio::time::sleep(lifetime).await;
            if state.with(|s| s.toast.expire(ticket)) {
                debug!("Toast hidden");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::state::InteractionState;
    use crate::domain::{InteractionSettings, SiteContent};

    fn service() -> (ToastService, SharedState) {
        let state = SharedState::new(
            InteractionState::new(&SiteContent::default(), &InteractionSettings::default())
                .unwrap(),
        );
        (
            ToastService::new(state.clone(), Duration::from_millis(3_500)),
            state,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn hides_after_lifetime() {
        let (toasts, state) = service();
        toasts.show("Sent", ToastKind::Success);

        tokio::time::sleep(Duration::from_millis(3_499)).await;
        assert!(state.view().toast.visible);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!state.view().toast.visible);
    }

    #[tokio::test(start_paused = true)]
    async fn second_toast_restarts_the_clock() {
        let (toasts, state) = service();
        toasts.show("first", ToastKind::Success);
        tokio::time::sleep(Duration::from_millis(3_000)).await;

        toasts.show("second", ToastKind::Error);
        // The first timer fires here but must not hide the second toast.
        tokio::time::sleep(Duration::from_millis(1_000)).await;
        let view = state.view();
        assert!(view.toast.visible);
        assert_eq!(view.toast.message, "second");
        assert_eq!(view.toast.kind, ToastKind::Error);

        tokio::time::sleep(Duration::from_millis(2_600)).await;
        assert!(!state.view().toast.visible);
    }
}
