//! Entrance and exit choreography.
//!
//! Each function returns the tween description for one named motion. The
//! selectors match the page markup; durations are in milliseconds.

use crate::domain::{Animation, AnimationTarget, Ease, ElementId, Props};

pub const BACKDROP: &str = ".panel-backdrop";
pub const PANEL: &str = ".project-panel";
pub const PANEL_HEADER_ITEMS: &str = ".project-panel .panel-header > *";
pub const PANEL_SECTIONS: &str = ".project-panel .panel-section";
pub const DOT_NAV: &str = ".dot-nav";
pub const REVEAL_DESCENDANTS: &str = "h2, h3, p, .stack-card, .project-card, .timeline-item, .stat";
pub const FEATURED_CONTENT: &str = ".featured-content > *";
pub const FEATURED_VISUAL: &str = ".featured-visual";

// ── Detail panel ────────────────────────────────────────────────────────────

pub fn backdrop_fade_in() -> Animation {
    Animation::tween_from_to(
        "backdrop.fade-in",
        AnimationTarget::selector(BACKDROP),
        Props::new().opacity(0.0),
        Props::new().opacity(1.0),
    )
    .duration_ms(300)
    .ease(Ease::Power2Out)
}

pub fn panel_slide_in() -> Animation {
    Animation::tween_from_to(
        "panel.slide-in",
        AnimationTarget::selector(PANEL),
        Props::new().x(80.0).opacity(0.0),
        Props::new().x(0.0).opacity(1.0),
    )
    .duration_ms(500)
    .ease(Ease::Power3Out)
}

pub fn panel_header_in() -> Animation {
    Animation::tween_from(
        "panel.header-in",
        AnimationTarget::selector(PANEL_HEADER_ITEMS),
        Props::new().y(20.0).opacity(0.0),
    )
    .duration_ms(500)
    .stagger_ms(80)
    .delay_ms(150)
}

pub fn panel_sections_in() -> Animation {
    Animation::tween_from(
        "panel.sections-in",
        AnimationTarget::selector(PANEL_SECTIONS),
        Props::new().y(20.0).opacity(0.0),
    )
    .duration_ms(400)
    .stagger_ms(80)
    .delay_ms(250)
}

/// The three staged entrances played after the backdrop starts, in order.
pub fn panel_entrance() -> [Animation; 3] {
    [panel_slide_in(), panel_header_in(), panel_sections_in()]
}

pub fn panel_slide_out() -> Animation {
    Animation::tween_to(
        "panel.slide-out",
        AnimationTarget::selector(PANEL),
        Props::new().x(80.0).opacity(0.0),
    )
    .duration_ms(350)
    .ease(Ease::Power3In)
}

pub fn backdrop_fade_out() -> Animation {
    Animation::tween_to(
        "backdrop.fade-out",
        AnimationTarget::selector(BACKDROP),
        Props::new().opacity(0.0),
    )
    .duration_ms(300)
    .ease(Ease::Power2In)
}

// ── Page reveals ────────────────────────────────────────────────────────────

pub fn dot_nav_intro() -> Animation {
    Animation::tween_from(
        "dot-nav.intro",
        AnimationTarget::selector(DOT_NAV),
        Props::new().opacity(0.0).x(-20.0),
    )
    .duration_ms(600)
}

pub fn section_reveal(container: &ElementId) -> Animation {
    Animation::tween_from(
        "section.reveal",
        AnimationTarget::descendants(container.clone(), REVEAL_DESCENDANTS),
        Props::new().opacity(0.0).y(30.0),
    )
    .duration_ms(800)
    .stagger_ms(120)
}

pub fn featured_reveal(block: &ElementId) -> [Animation; 3] {
    [
        Animation::tween_from(
            "featured.block",
            AnimationTarget::element(block.clone()),
            Props::new().opacity(0.0).y(60.0),
        )
        .duration_ms(1_000),
        Animation::tween_from(
            "featured.content",
            AnimationTarget::descendants(block.clone(), FEATURED_CONTENT),
            Props::new().opacity(0.0).y(30.0),
        )
        .duration_ms(800)
        .stagger_ms(150),
        Animation::tween_from(
            "featured.visual",
            AnimationTarget::descendants(block.clone(), FEATURED_VISUAL),
            Props::new().opacity(0.0).scale(0.9),
        )
        .duration_ms(1_000),
    ]
}
