//! Interaction state machines.
//!
//! Each type here owns one slice of page state and is mutated only through
//! its own methods. None of them touch a clock or an I/O port; timing and
//! side effects are driven from `crate::application`.

pub mod counter;
pub mod drag;
pub mod gallery;
pub mod modal;
pub mod paginator;
pub mod reveal;
pub mod section;
pub mod toast;

pub use counter::{CounterAnimation, CounterSpec};
pub use drag::{CardLayout, CarouselState, DragScrollCarousel, SnapTarget};
pub use gallery::ImageCarousel;
pub use modal::ModalPanel;
pub use paginator::{PageCursor, ProjectPaginator};
pub use reveal::{RevealKind, RevealTarget, VisibilityRevealController};
pub use section::SectionActivityTracker;
pub use toast::{ToastNotifier, ToastState, ToastTicket};
