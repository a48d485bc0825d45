//! Reveal descriptors: entrance transitions expressed as data.
//!
//! A [`Reveal`] says how an element enters (fade, slide, scale), when it is
//! triggered (on mount or once it scrolls into view) and how its start is
//! staggered against its siblings. [`Reveal::at`] pins the descriptor to a
//! sibling position and the result renders as `data-reveal-*` attributes that
//! the client runtime (`assets/reveal.js`) interprets.
//!
//! # Stagger rule
//! Item `i` starts `delay + i × stagger` seconds after the trigger. There is no
//! cap: long sequences accumulate delay linearly. Viewport triggers fire once.

use std::fmt;

use crate::models::resume::TimelineSide;

/// Direction of travel into the resting position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Starts below, rises into place.
    Up,
    /// Starts above, drops into place.
    Down,
    /// Starts left of its slot, moves right.
    FromLeft,
    /// Starts right of its slot, moves left.
    FromRight,
}

impl Direction {
    /// Timeline cards enter from the side they sit on.
    pub fn from_side(side: TimelineSide) -> Self {
        match side {
            TimelineSide::Left => Direction::FromLeft,
            TimelineSide::Right => Direction::FromRight,
        }
    }
}

/// Length of the starting offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    Px(u16),
    /// Relative to the element's own size.
    Percent(u16),
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::Px(n) => write!(f, "{n}px"),
            Offset::Percent(n) => write!(f, "{n}%"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Fade,
    Slide { toward: Direction, by: Offset },
    Scale { from: f32 },
}

impl Motion {
    pub fn kind(&self) -> &'static str {
        match self {
            Motion::Fade => "fade",
            Motion::Slide { .. } => "slide",
            Motion::Scale { .. } => "scale",
        }
    }

    /// Starting translation as `(x, y)` CSS lengths. Fade and scale don't move.
    pub fn start_translation(&self) -> Option<(String, String)> {
        let Motion::Slide { toward, by } = self else {
            return None;
        };
        let (x, y) = match toward {
            Direction::Up => ("0".to_string(), by.to_string()),
            Direction::Down => ("0".to_string(), format!("-{by}")),
            Direction::FromLeft => (format!("-{by}"), "0".to_string()),
            Direction::FromRight => (by.to_string(), "0".to_string()),
        };
        Some((x, y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Plays as soon as the page loads.
    Mount,
    /// Plays once, the first time `amount` of the element is visible.
    /// `None` means any visible pixel.
    InView { amount: Option<f32> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Tween,
    Spring { stiffness: u16, damping: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub motion: Motion,
    pub trigger: Trigger,
    pub easing: Easing,
    /// Seconds; `None` leaves it to the runtime default.
    pub duration: Option<f32>,
    /// Base delay in seconds, before the per-item stagger.
    pub delay: f32,
    /// Per-item delay multiplier in seconds.
    pub stagger: f32,
}

impl Reveal {
    const fn new(motion: Motion) -> Self {
        Reveal {
            motion,
            trigger: Trigger::InView { amount: None },
            easing: Easing::Tween,
            duration: None,
            delay: 0.0,
            stagger: 0.0,
        }
    }

    pub const fn fade() -> Self {
        Self::new(Motion::Fade)
    }

    pub const fn slide(toward: Direction, by: Offset) -> Self {
        Self::new(Motion::Slide { toward, by })
    }

    pub const fn scale(from: f32) -> Self {
        Self::new(Motion::Scale { from })
    }

    pub fn on_mount(mut self) -> Self {
        self.trigger = Trigger::Mount;
        self
    }

    pub fn in_view(mut self, amount: f32) -> Self {
        self.trigger = Trigger::InView {
            amount: Some(amount),
        };
        self
    }

    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds;
        self
    }

    pub fn stagger(mut self, seconds: f32) -> Self {
        self.stagger = seconds;
        self
    }

    pub fn spring(mut self, stiffness: u16, damping: u16) -> Self {
        self.easing = Easing::Spring { stiffness, damping };
        self
    }

    /// Start offset for the item at `index` among its siblings.
    pub fn delay_for(&self, index: usize) -> f32 {
        self.delay + index as f32 * self.stagger
    }

    /// Pins the descriptor to a sibling position.
    pub fn at(&self, index: usize) -> AppliedReveal {
        AppliedReveal {
            reveal: *self,
            delay: self.delay_for(index),
        }
    }

    /// For elements that have no siblings to stagger against.
    pub fn single(&self) -> AppliedReveal {
        self.at(0)
    }
}

/// A reveal with its final start delay resolved.
///
/// `Display` writes the attribute list, e.g.
/// `data-reveal="slide" data-reveal-x="0" data-reveal-y="50px" ...`.
/// Every value is generated from enums and numbers, never from page content,
/// so the output is safe to emit unescaped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedReveal {
    reveal: Reveal,
    delay: f32,
}

impl fmt::Display for AppliedReveal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.reveal;
        write!(f, "data-reveal=\"{}\"", r.motion.kind())?;

        match r.motion {
            Motion::Slide { .. } => {
                if let Some((x, y)) = r.motion.start_translation() {
                    write!(f, " data-reveal-x=\"{x}\" data-reveal-y=\"{y}\"")?;
                }
            }
            Motion::Scale { from } => write!(f, " data-reveal-scale=\"{from:.2}\"")?,
            Motion::Fade => {}
        }

        match r.trigger {
            Trigger::Mount => write!(f, " data-reveal-trigger=\"mount\"")?,
            Trigger::InView { amount } => {
                write!(f, " data-reveal-trigger=\"view\" data-reveal-once=\"true\"")?;
                if let Some(amount) = amount {
                    write!(f, " data-reveal-amount=\"{amount:.2}\"")?;
                }
            }
        }

        match r.easing {
            Easing::Tween => write!(f, " data-reveal-easing=\"tween\"")?,
            Easing::Spring { stiffness, damping } => write!(
                f,
                " data-reveal-easing=\"spring\" data-reveal-stiffness=\"{stiffness}\" data-reveal-damping=\"{damping}\""
            )?,
        }

        if let Some(duration) = r.duration {
            write!(f, " data-reveal-duration=\"{duration:.2}\"")?;
        }
        write!(f, " data-reveal-delay=\"{:.2}\"", self.delay)
    }
}
