//! Alternating timeline placement.
//!
//! One markup tree serves every viewport: below the `md` breakpoint the offset
//! classes are inert and entries stack as a single column. From `md` up the
//! card is pushed to its side of the centre rail, and the marker hangs 46px
//! outside the entry's outer edge on that same side, away from the rail.

use crate::models::resume::{Experience, TimelineSide};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineSlot {
    pub side: TimelineSide,
    /// Hangs the marker outside the entry's outer edge on the card's side.
    pub marker_offset: &'static str,
    /// Pushes the card into its column.
    pub card_offset: &'static str,
}

impl TimelineSlot {
    pub fn for_side(side: TimelineSide) -> Self {
        match side {
            TimelineSide::Left => TimelineSlot {
                side,
                marker_offset: "left-[-46px]",
                card_offset: "md:mr-auto",
            },
            TimelineSide::Right => TimelineSlot {
                side,
                marker_offset: "right-[-46px]",
                card_offset: "md:ml-auto",
            },
        }
    }
}

/// Slots for each entry, in the given order.
pub fn layout(entries: &[Experience]) -> Vec<TimelineSlot> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| TimelineSlot::for_side(entry.side_at(i)))
        .collect()
}
