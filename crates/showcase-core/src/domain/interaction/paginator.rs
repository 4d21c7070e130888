//! Page-indexed navigation over the project list.

use serde::{Deserialize, Serialize};

use crate::domain::{Breakpoint, Breakpoints, DomainError};

/// Invariant: `current_index <= project_count - items_per_view` (saturating).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    pub current_index: usize,
    pub items_per_view: usize,
}

#[derive(Debug, Clone)]
pub struct ProjectPaginator {
    cursor: PageCursor,
    breakpoint: Breakpoint,
    breakpoints: Breakpoints,
    project_count: usize,
}

impl ProjectPaginator {
    pub fn new(
        project_count: usize,
        viewport_width: f64,
        breakpoints: Breakpoints,
    ) -> Result<Self, DomainError> {
        if project_count == 0 {
            return Err(DomainError::EmptyProjects);
        }
        let breakpoint = breakpoints.classify(viewport_width);
        Ok(Self {
            cursor: PageCursor {
                current_index: 0,
                items_per_view: breakpoint.items_per_view(),
            },
            breakpoint,
            breakpoints,
            project_count,
        })
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn current_index(&self) -> usize {
        self.cursor.current_index
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Highest valid start index.
    pub fn max_index(&self) -> usize {
        self.project_count.saturating_sub(self.cursor.items_per_view)
    }

    pub fn next(&mut self) {
        let max = self.max_index();
        self.cursor.current_index = if self.cursor.current_index >= max {
            0
        } else {
            self.cursor.current_index + 1
        };
    }

    pub fn prev(&mut self) {
        self.cursor.current_index = if self.cursor.current_index == 0 {
            self.max_index()
        } else {
            self.cursor.current_index - 1
        };
    }

    /// Re-derive items-per-view for a new viewport width. Returns `true` if
    /// the layout class changed.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        let breakpoint = self.breakpoints.classify(viewport_width);
        if breakpoint == self.breakpoint {
            return false;
        }
        self.breakpoint = breakpoint;
        self.cursor.items_per_view = breakpoint.items_per_view();
        self.cursor.current_index = self.cursor.current_index.min(self.max_index());
        true
    }

    pub fn total_pages(&self) -> usize {
        self.project_count.div_ceil(self.cursor.items_per_view)
    }

    /// Horizontal translation of the track, in percent of the viewport.
    pub fn track_offset_percent(&self) -> f64 {
        self.cursor.current_index as f64 * self.breakpoint.slide_percentage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: f64 = 1440.0;
    const TABLET: f64 = 900.0;
    const MOBILE: f64 = 375.0;

    fn paginator(count: usize, width: f64) -> ProjectPaginator {
        ProjectPaginator::new(count, width, Breakpoints::default()).unwrap()
    }

    #[test]
    fn items_per_view_follows_breakpoints() {
        assert_eq!(paginator(6, 768.0).cursor().items_per_view, 1);
        assert_eq!(paginator(6, 769.0).cursor().items_per_view, 2);
        assert_eq!(paginator(6, 1024.0).cursor().items_per_view, 2);
        assert_eq!(paginator(6, 1025.0).cursor().items_per_view, 3);
    }

    #[test]
    fn next_wraps_to_start_at_last_page() {
        let mut p = paginator(6, DESKTOP);
        let visited: Vec<usize> = (0..5)
            .map(|_| {
                p.next();
                p.current_index()
            })
            .collect();
        assert_eq!(visited, vec![1, 2, 3, 0, 1]);
    }

    #[test]
    fn prev_wraps_to_last_valid_index() {
        let mut p = paginator(6, DESKTOP);
        p.prev();
        assert_eq!(p.current_index(), 3);
    }

    #[test]
    fn next_then_prev_is_identity_inside_range() {
        for width in [MOBILE, TABLET, DESKTOP] {
            let mut p = paginator(6, width);
            for _ in 0..=p.max_index() {
                let before = p.current_index();
                p.next();
                p.prev();
                assert_eq!(p.current_index(), before, "width {width}");
                p.next();
            }
        }
    }

    #[test]
    fn wrap_operations_invert_each_other() {
        let mut p = paginator(6, TABLET);
        p.prev();
        assert_eq!(p.current_index(), 4);
        p.next();
        assert_eq!(p.current_index(), 0);
    }

    #[test]
    fn fewer_projects_than_view_pins_index_to_zero() {
        let mut p = paginator(2, DESKTOP);
        p.next();
        assert_eq!(p.current_index(), 0);
        p.prev();
        assert_eq!(p.current_index(), 0);
        assert_eq!(p.total_pages(), 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(paginator(7, DESKTOP).total_pages(), 3);
        assert_eq!(paginator(7, TABLET).total_pages(), 4);
        assert_eq!(paginator(7, MOBILE).total_pages(), 7);
    }

    #[test]
    fn resize_clamps_index_into_new_range() {
        let mut p = paginator(6, MOBILE);
        for _ in 0..5 {
            p.next();
        }
        assert_eq!(p.current_index(), 5);
        assert!(p.resize(DESKTOP));
        assert_eq!(p.current_index(), 3);
        assert!(!p.resize(DESKTOP + 10.0));
    }

    #[test]
    fn track_offset_uses_slide_width() {
        let mut p = paginator(6, TABLET);
        p.next();
        assert_eq!(p.track_offset_percent(), 50.0);
    }

    #[test]
    fn empty_project_list_is_rejected() {
        assert_eq!(
            ProjectPaginator::new(0, DESKTOP, Breakpoints::default()).unwrap_err(),
            DomainError::EmptyProjects
        );
    }
}
