use serde::{Deserialize, Serialize};

use crate::domain::ToastKind;

/// Rendered toast fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastState {
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
}

/// Identifies which `show` call an auto-hide timer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTicket(u64);

/// Single-slot toast. A newer `show` supersedes any pending auto-hide of an
/// older one: stale tickets are ignored by [`ToastNotifier::expire`].
#[derive(Debug, Clone, Default)]
pub struct ToastNotifier {
    state: ToastState,
    generation: u64,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ToastState {
        &self.state
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastTicket {
        self.generation += 1;
        self.state = ToastState {
            message: message.into(),
            kind,
            visible: true,
        };
        ToastTicket(self.generation)
    }

    /// Hide the toast if `ticket` is from the latest `show`. Returns `true`
    /// if the toast was hidden.
    pub fn expire(&mut self, ticket: ToastTicket) -> bool {
        if ticket.0 != self.generation || !self.state.visible {
            return false;
        }
        self.state.visible = false;
        true
    }
}
