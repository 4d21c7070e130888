//! Guarded lifecycle of the detail panel.
//!
//! Every transition is a match on the current state; calls that do not fit
//! the current state return `false` and change nothing. Animation sequencing
//! lives in the controller, which drives these transitions.

use tracing::trace;

use crate::domain::PanelState;

#[derive(Debug, Clone, Default)]
pub struct ModalPanel {
    state: PanelState,
    selected: Option<usize>,
    scroll_locked: bool,
}

impl ModalPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Project currently shown in the panel, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Closed → Opening. Locks background scroll.
    pub fn begin_open(&mut self, project: usize) -> bool {
        match self.state {
            PanelState::Closed => {
                self.state = PanelState::Opening;
                self.selected = Some(project);
                self.scroll_locked = true;
                true
            }
            other => self.reject("open", other),
        }
    }

    /// Opening → Open.
    pub fn finish_open(&mut self) -> bool {
        match self.state {
            PanelState::Opening => {
                self.state = PanelState::Open;
                true
            }
            other => self.reject("finish_open", other),
        }
    }

    /// Open → Closing.
    pub fn begin_close(&mut self) -> bool {
        match self.state {
            PanelState::Open => {
                self.state = PanelState::Closing;
                true
            }
            other => self.reject("close", other),
        }
    }

    /// Closing → Closed. Unlocks background scroll.
    pub fn finish_close(&mut self) -> bool {
        match self.state {
            PanelState::Closing => {
                self.state = PanelState::Closed;
                self.selected = None;
                self.scroll_locked = false;
                true
            }
            other => self.reject("finish_close", other),
        }
    }

    fn reject(&self, transition: &'static str, from: PanelState) -> bool {
        trace!(transition, from = %from, "Ignoring panel transition");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_returns_to_closed_and_unlocks() {
        let mut panel = ModalPanel::new();
        assert!(panel.begin_open(0));
        assert!(panel.scroll_locked());
        assert!(panel.finish_open());
        assert_eq!(panel.state(), PanelState::Open);
        assert!(panel.begin_close());
        assert!(panel.scroll_locked());
        assert!(panel.finish_close());
        assert_eq!(panel.state(), PanelState::Closed);
        assert!(!panel.scroll_locked());
        assert_eq!(panel.selected(), None);
    }

    #[test]
    fn open_while_open_or_opening_is_noop() {
        let mut panel = ModalPanel::new();
        panel.begin_open(1);
        assert!(!panel.begin_open(2));
        assert_eq!(panel.selected(), Some(1));
        panel.finish_open();
        assert!(!panel.begin_open(2));
        assert_eq!(panel.state(), PanelState::Open);
    }

    #[test]
    fn close_while_closed_or_closing_is_noop() {
        let mut panel = ModalPanel::new();
        assert!(!panel.begin_close());
        assert!(!panel.finish_close());

        panel.begin_open(0);
        panel.finish_open();
        panel.begin_close();
        assert!(!panel.begin_close());
        assert_eq!(panel.state(), PanelState::Closing);
    }

    #[test]
    fn open_during_closing_is_rejected() {
        let mut panel = ModalPanel::new();
        panel.begin_open(0);
        panel.finish_open();
        panel.begin_close();
        assert!(!panel.begin_open(0));
        assert!(panel.finish_close());
    }
}
