use serde::{Deserialize, Serialize};

/// A portfolio project card. Identity is its position in the sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default = "default_link")]
    pub link: String,
    /// Web path of a screenshot; may point at a file that doesn't exist.
    #[serde(default)]
    pub image: Option<String>,
}

fn default_link() -> String {
    "#".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Expert => "Expert",
        }
    }
}

/// Icon glyph shown next to a skill name. Artwork comes from the icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillIcon {
    Code,
    Terminal,
    Zap,
    Briefcase,
}

impl SkillIcon {
    pub fn slug(self) -> &'static str {
        match self {
            SkillIcon::Code => "code",
            SkillIcon::Terminal => "terminal",
            SkillIcon::Zap => "zap",
            SkillIcon::Briefcase => "briefcase",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: Option<SkillLevel>,
    #[serde(default)]
    pub icon: Option<SkillIcon>,
}

impl Skill {
    pub fn named(name: &str) -> Self {
        Skill {
            name: name.to_string(),
            level: None,
            icon: None,
        }
    }
}

/// Which column of the alternating timeline an entry sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    pub fn as_str(self) -> &'static str {
        match self {
            TimelineSide::Left => "left",
            TimelineSide::Right => "right",
        }
    }

    /// Side used when an entry doesn't pin one: even positions left, odd right.
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            TimelineSide::Left
        } else {
            TimelineSide::Right
        }
    }
}

/// One job. Order is chronological by author intent and never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    /// Free text, e.g. "2021 - Present".
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub side: Option<TimelineSide>,
}

impl Experience {
    pub fn side_at(&self, index: usize) -> TimelineSide {
        self.side.unwrap_or_else(|| TimelineSide::alternating(index))
    }
}

/// The singleton profile/contact record of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub image: Option<String>,
    pub email: String,
}

impl Profile {
    /// Avatar fallback text: first letter of each name part, hyphenated parts kept hyphenated.
    /// "Anar-Erdene" becomes "A-E", "Ada Lovelace" becomes "AL".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .map(|word| {
                word.split('-')
                    .filter_map(|part| part.chars().next())
                    .flat_map(char::to_uppercase)
                    .map(String::from)
                    .collect::<Vec<_>>()
                    .join("-")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> Profile {
        Profile {
            name: name.to_string(),
            title: String::new(),
            bio: String::new(),
            image: None,
            email: "someone@example.com".to_string(),
        }
    }

    #[test]
    fn test_initials_hyphenated_name() {
        assert_eq!(profile("Anar-Erdene").initials(), "A-E");
    }

    #[test]
    fn test_initials_spaced_name() {
        assert_eq!(profile("ada lovelace").initials(), "AL");
    }

    #[test]
    fn test_initials_empty_name() {
        assert_eq!(profile("").initials(), "");
    }

    #[test]
    fn test_side_falls_back_to_alternating() {
        let entry = Experience {
            role: "Dev".into(),
            company: "Co".into(),
            period: "2020".into(),
            description: "Did things".into(),
            side: None,
        };
        assert_eq!(entry.side_at(0), TimelineSide::Left);
        assert_eq!(entry.side_at(1), TimelineSide::Right);
        assert_eq!(entry.side_at(4), TimelineSide::Left);
    }

    #[test]
    fn test_explicit_side_wins() {
        let entry = Experience {
            role: "Dev".into(),
            company: "Co".into(),
            period: "2020".into(),
            description: "Did things".into(),
            side: Some(TimelineSide::Right),
        };
        assert_eq!(entry.side_at(0), TimelineSide::Right);
    }

    #[test]
    fn test_skill_deserializes_without_optional_fields() {
        let skill: Skill = toml::from_str(r#"name = "Rust""#).unwrap();
        assert_eq!(skill, Skill::named("Rust"));
    }

    #[test]
    fn test_skill_level_and_icon_names() {
        let skill: Skill =
            toml::from_str("name = \"Go\"\nlevel = \"Intermediate\"\nicon = \"terminal\"").unwrap();
        assert_eq!(skill.level, Some(SkillLevel::Intermediate));
        assert_eq!(skill.icon, Some(SkillIcon::Terminal));
    }
}
