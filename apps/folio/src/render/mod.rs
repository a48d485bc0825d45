// Page rendering: content + page context → HTML through askama templates.
// Renderers are pure: the same content and context always give the same bytes.

pub mod assets;
pub mod links;
pub mod resume1;
pub mod resume2;
pub mod templates;
pub mod theme;
pub mod timeline;
pub mod views;

use crate::render::assets::AssetResolver;
use crate::render::theme::AccentColor;

pub use resume1::render_resume_one;
pub use resume2::render_resume_two;

/// Values fixed at startup that every page render reads.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub accent: AccentColor,
    /// Copyright year printed in the footer.
    pub year: i32,
    pub assets: AssetResolver,
}
