//! Numeric roll-up from zero to a target value.
//!
//! [`CounterAnimation`] is an iterator of rendered strings, one per tick.
//! The caller owns the clock; this type only knows how far each tick moves.

use serde::{Deserialize, Serialize};

use crate::domain::{ElementId, settings::CounterTiming};

/// A counter element on the page and the value it rolls up to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSpec {
    pub element: ElementId,
    pub target: u64,
    /// Render as `+N` instead of `N`.
    #[serde(default)]
    pub plus: bool,
}

impl CounterSpec {
    pub fn new(element: impl Into<ElementId>, target: u64, plus: bool) -> Self {
        Self {
            element: element.into(),
            target,
            plus,
        }
    }

    /// Text shown before the counter scrolls into view.
    pub fn initial_text(&self) -> String {
        if self.plus { "+0".into() } else { "0".into() }
    }
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    plus: bool,
    accumulator: f64,
    increment: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(spec: &CounterSpec, timing: &CounterTiming) -> Self {
        Self {
            target: spec.target,
            plus: spec.plus,
            accumulator: 0.0,
            increment: spec.target as f64 / timing.steps().max(1.0),
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Text shown once the roll-up completes.
    pub fn final_text(&self) -> String {
        self.render(self.target)
    }

    fn render(&self, value: u64) -> String {
        if self.plus {
            format!("+{value}")
        } else {
            value.to_string()
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        self.accumulator += self.increment;
        if self.accumulator >= self.target as f64 {
            self.finished = true;
            Some(self.final_text())
        } else {
            Some(self.render(self.accumulator.floor() as u64))
        }
    }
}
