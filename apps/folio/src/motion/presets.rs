//! Named reveal presets, one per page element.

use crate::models::resume::TimelineSide;
use crate::motion::reveal::{Direction, Offset, Reveal};

/// Delay between hero items that share the on-mount stagger container.
pub const HERO_STAGGER: f32 = 0.1;

/// Page A ("resume1") transitions.
pub mod resume1 {
    use super::*;

    pub fn intro_heading() -> Reveal {
        Reveal::slide(Direction::Down, Offset::Px(50))
            .on_mount()
            .duration(0.8)
    }

    pub fn intro_tagline() -> Reveal {
        Reveal::slide(Direction::Up, Offset::Px(20))
            .on_mount()
            .duration(0.8)
            .delay(0.3)
    }

    pub fn section_heading() -> Reveal {
        Reveal::fade()
    }

    pub fn project_card() -> Reveal {
        Reveal::slide(Direction::Up, Offset::Px(50))
            .duration(0.6)
            .stagger(0.2)
    }

    pub fn skill_pill() -> Reveal {
        Reveal::scale(0.8).stagger(0.1)
    }

    pub fn experience_row() -> Reveal {
        Reveal::slide(Direction::FromLeft, Offset::Px(50))
            .duration(0.6)
            .stagger(0.2)
    }
}

/// Page B ("resume2") transitions.
pub mod resume2 {
    use super::*;

    pub fn section_title() -> Reveal {
        Reveal::slide(Direction::Up, Offset::Px(30))
            .in_view(0.3)
            .duration(0.7)
    }

    /// Avatar, subtitle, bio and call-to-action buttons, in that order.
    pub fn hero_item() -> Reveal {
        Reveal::slide(Direction::Up, Offset::Px(20))
            .on_mount()
            .duration(0.6)
            .stagger(HERO_STAGGER)
    }

    /// Per-character heading reveal: smaller step, spring settle.
    pub fn heading_char() -> Reveal {
        Reveal::slide(Direction::Up, Offset::Percent(100))
            .on_mount()
            .spring(100, 12)
            .stagger(0.05)
    }

    pub fn project_card() -> Reveal {
        Reveal::slide(Direction::Up, Offset::Px(50))
            .in_view(0.3)
            .duration(0.7)
            .stagger(0.1)
    }

    pub fn skill_badge() -> Reveal {
        Reveal::scale(0.8).in_view(0.5).duration(0.5).stagger(0.08)
    }

    pub fn timeline_marker() -> Reveal {
        Reveal::scale(0.0).duration(0.5).stagger(0.2)
    }

    pub fn timeline_card(side: TimelineSide) -> Reveal {
        Reveal::slide(Direction::from_side(side), Offset::Px(100))
            .in_view(0.5)
            .duration(0.8)
    }

    pub fn contact_message() -> Reveal {
        Reveal::fade().in_view(0.5).duration(0.8).delay(0.3)
    }

    pub fn footer_line() -> Reveal {
        Reveal::fade().duration(0.8).delay(0.5)
    }
}
