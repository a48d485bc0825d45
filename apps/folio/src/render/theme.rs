//! Accent colour and the fixed colour lookups used by the templates.

use std::fmt;

use anyhow::{bail, Result};

use crate::models::resume::SkillLevel;

/// Tailwind palette names accepted as an accent.
const PALETTE: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

/// A validated palette name. Templates build shade classes from it,
/// e.g. `bg-{{ accent }}-600`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccentColor(String);

impl AccentColor {
    pub fn parse(name: &str) -> Result<Self> {
        let name = name.trim().to_ascii_lowercase();
        if !PALETTE.contains(&name.as_str()) {
            bail!("unknown palette colour '{name}'");
        }
        Ok(AccentColor(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        AccentColor("indigo".to_string())
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Badge colour for a skill level. Unlevelled skills get the neutral gray.
pub fn level_class(level: Option<SkillLevel>) -> &'static str {
    match level {
        Some(SkillLevel::Expert) => "bg-red-500",
        Some(SkillLevel::Intermediate) => "bg-yellow-500",
        Some(SkillLevel::Beginner) => "bg-green-500",
        None => "bg-gray-500",
    }
}
