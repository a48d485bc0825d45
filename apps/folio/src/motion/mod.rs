// Entrance choreography for both pages.
// `reveal` holds the descriptor model and applier; `presets` names the
// transitions each page element uses.

pub mod presets;
pub mod reveal;

pub use reveal::Reveal;
