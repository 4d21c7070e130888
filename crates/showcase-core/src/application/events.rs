//! Host events fed to the controller.
//!
//! The JSON form is what the replay harness reads:
//!
//! ```json
//! [
//!   { "type": "mount", "viewport_width": 1280 },
//!   { "type": "gesture_start", "pointer_x": 700, "container_left": 100 },
//!   { "type": "gesture_end", "card_width": 300 },
//!   { "type": "wait", "ms": 4000 }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{DraftField, ElementId};

/// One intersection report from the visibility watcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityEvent {
    pub element: ElementId,
    pub ratio: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    Mount {
        viewport_width: f64,
    },
    Resize {
        viewport_width: f64,
    },
    /// The strip scrolled by wheel, keyboard, or a finished snap.
    Scroll {
        offset: f64,
    },
    GestureStart {
        pointer_x: f64,
        #[serde(default)]
        container_left: f64,
    },
    GestureMove {
        pointer_x: f64,
        #[serde(default)]
        container_left: f64,
    },
    GestureEnd {
        card_width: f64,
    },
    Visibility(VisibilityEvent),
    NextPage,
    PrevPage,
    OpenPanel {
        /// Defaults to the featured project.
        #[serde(default)]
        project: Option<usize>,
    },
    ClosePanel,
    NextImage,
    PrevImage,
    EditDraft {
        field: DraftField,
        value: String,
    },
    Submit,
    /// Let virtual time pass.
    Wait {
        ms: u64,
    },
}

impl UiEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Mount { .. } => "mount",
            Self::Resize { .. } => "resize",
            Self::Scroll { .. } => "scroll",
            Self::GestureStart { .. } => "gesture_start",
            Self::GestureMove { .. } => "gesture_move",
            Self::GestureEnd { .. } => "gesture_end",
            Self::Visibility(_) => "visibility",
            Self::NextPage => "next_page",
            Self::PrevPage => "prev_page",
            Self::OpenPanel { .. } => "open_panel",
            Self::ClosePanel => "close_panel",
            Self::NextImage => "next_image",
            Self::PrevImage => "prev_image",
            Self::EditDraft { .. } => "edit_draft",
            Self::Submit => "submit",
            Self::Wait { .. } => "wait",
        }
    }
}
