//! Descriptions of property tweens handed to the animation engine.
//!
//! The engine itself is opaque (see `application::ports::AnimationEngine`);
//! these types only say *what* to animate, from where, to where, and how.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::ElementId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    Linear,
    Power2In,
    Power2Out,
    Power3In,
    #[default]
    Power3Out,
}

impl Ease {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "none",
            Self::Power2In => "power2.in",
            Self::Power2Out => "power2.out",
            Self::Power3In => "power3.in",
            Self::Power3Out => "power3.out",
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an animation applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimationTarget {
    Element { id: ElementId },
    Selector { selector: String },
    /// Descendants of `container` matching `selector`, animated in
    /// document order (stagger applies in that order).
    Descendants { container: ElementId, selector: String },
}

impl AnimationTarget {
    pub fn element(id: impl Into<ElementId>) -> Self {
        Self::Element { id: id.into() }
    }

    pub fn selector(selector: impl Into<String>) -> Self {
        Self::Selector {
            selector: selector.into(),
        }
    }

    pub fn descendants(container: impl Into<ElementId>, selector: impl Into<String>) -> Self {
        Self::Descendants {
            container: container.into(),
            selector: selector.into(),
        }
    }
}

impl fmt::Display for AnimationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element { id } => write!(f, "#{id}"),
            Self::Selector { selector } => f.write_str(selector),
            Self::Descendants {
                container,
                selector,
            } => write!(f, "#{container} {selector}"),
        }
    }
}

/// Animated style properties. `None` leaves a property alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Props {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn x(mut self, value: f32) -> Self {
        self.x = Some(value);
        self
    }

    pub fn y(mut self, value: f32) -> Self {
        self.y = Some(value);
        self
    }

    pub fn scale(mut self, value: f32) -> Self {
        self.scale = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.opacity.is_none() && self.x.is_none() && self.y.is_none() && self.scale.is_none()
    }
}

/// Which end states are pinned by the caller.
///
/// `From` tweens from the given props to the element's current style, `To`
/// from the current style to the given props.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TweenMode {
    From,
    To,
    FromTo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    /// Stable label for logs and tests, e.g. `panel.slide-in`.
    pub name: &'static str,
    pub target: AnimationTarget,
    pub mode: TweenMode,
    pub from: Props,
    pub to: Props,
    pub duration: Duration,
    pub ease: Ease,
    pub stagger: Option<Duration>,
    pub delay: Duration,
}

impl Animation {
    fn base(name: &'static str, target: AnimationTarget, mode: TweenMode) -> Self {
        Self {
            name,
            target,
            mode,
            from: Props::default(),
            to: Props::default(),
            duration: Duration::from_millis(500),
            ease: Ease::default(),
            stagger: None,
            delay: Duration::ZERO,
        }
    }

    pub fn tween_from(name: &'static str, target: AnimationTarget, from: Props) -> Self {
        Self {
            from,
            ..Self::base(name, target, TweenMode::From)
        }
    }

    pub fn tween_to(name: &'static str, target: AnimationTarget, to: Props) -> Self {
        Self {
            to,
            ..Self::base(name, target, TweenMode::To)
        }
    }

    pub fn tween_from_to(
        name: &'static str,
        target: AnimationTarget,
        from: Props,
        to: Props,
    ) -> Self {
        Self {
            from,
            to,
            ..Self::base(name, target, TweenMode::FromTo)
        }
    }

    pub fn duration_ms(mut self, millis: u64) -> Self {
        self.duration = Duration::from_millis(millis);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn stagger_ms(mut self, millis: u64) -> Self {
        self.stagger = Some(Duration::from_millis(millis));
        self
    }

    pub fn delay_ms(mut self, millis: u64) -> Self {
        self.delay = Duration::from_millis(millis);
        self
    }

    /// Time from start until the last element settles, assuming `count`
    /// staggered elements.
    pub fn total_duration(&self, count: u32) -> Duration {
        let stagger = self.stagger.unwrap_or_default() * count.saturating_sub(1);
        self.delay + stagger + self.duration
    }
}
