//! Template view models.
//!
//! Everything a template prints is prepared here, including reveal attribute
//! strings, so the templates stay free of logic beyond loops and flags.

use crate::models::resume::{Experience, Profile, Project, Skill};
use crate::motion::Reveal;
use crate::render::assets::AssetResolver;
use crate::render::links::LinkView;
use crate::render::theme::level_class;
use crate::render::timeline::TimelineSlot;

/// One in-page navigation entry.
pub struct NavLink {
    pub href: String,
    pub label: &'static str,
}

/// Section anchors of the navigation header, in display order.
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("contact", "Contact"),
];

pub fn nav_links() -> Vec<NavLink> {
    NAV_SECTIONS
        .iter()
        .map(|&(id, label)| NavLink {
            href: format!("#{id}"),
            label,
        })
        .collect()
}

pub struct ProjectCardView {
    pub key: usize,
    pub title: String,
    pub description: String,
    pub stack: Vec<String>,
    pub link: LinkView,
    pub has_image: bool,
    pub image_src: String,
    pub reveal: String,
}

impl ProjectCardView {
    pub fn build(
        index: usize,
        project: &Project,
        reveal: &Reveal,
        assets: &AssetResolver,
    ) -> Self {
        let image_src = assets.resolve(project.image.as_deref());
        ProjectCardView {
            key: index,
            title: project.title.clone(),
            description: project.description.clone(),
            stack: project.stack.clone(),
            link: LinkView::external(&project.link),
            has_image: image_src.is_some(),
            image_src: image_src.unwrap_or_default(),
            reveal: reveal.at(index).to_string(),
        }
    }
}

pub struct SkillView {
    pub key: usize,
    pub name: String,
    pub has_level: bool,
    pub level_label: &'static str,
    pub level_class: &'static str,
    pub has_icon: bool,
    pub icon: &'static str,
    pub reveal: String,
}

impl SkillView {
    pub fn build(index: usize, skill: &Skill, reveal: &Reveal) -> Self {
        SkillView {
            key: index,
            name: skill.name.clone(),
            has_level: skill.level.is_some(),
            level_label: skill.level.map(|l| l.label()).unwrap_or_default(),
            level_class: level_class(skill.level),
            has_icon: skill.icon.is_some(),
            icon: skill.icon.map(|i| i.slug()).unwrap_or_default(),
            reveal: reveal.at(index).to_string(),
        }
    }
}

pub struct ExperienceView {
    pub key: usize,
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub reveal: String,
}

impl ExperienceView {
    pub fn build(index: usize, entry: &Experience, reveal: &Reveal) -> Self {
        ExperienceView {
            key: index,
            role: entry.role.clone(),
            company: entry.company.clone(),
            period: entry.period.clone(),
            description: entry.description.clone(),
            reveal: reveal.at(index).to_string(),
        }
    }
}

pub struct TimelineEntryView {
    pub key: usize,
    pub side: &'static str,
    pub marker_offset: &'static str,
    pub card_offset: &'static str,
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub marker_reveal: String,
    pub card_reveal: String,
}

impl TimelineEntryView {
    pub fn build(
        index: usize,
        entry: &Experience,
        slot: TimelineSlot,
        marker: &Reveal,
        card: &Reveal,
    ) -> Self {
        TimelineEntryView {
            key: index,
            side: slot.side.as_str(),
            marker_offset: slot.marker_offset,
            card_offset: slot.card_offset,
            role: entry.role.clone(),
            company: entry.company.clone(),
            period: entry.period.clone(),
            description: entry.description.clone(),
            marker_reveal: marker.at(index).to_string(),
            card_reveal: card.single().to_string(),
        }
    }
}

/// A single animated character of the hero heading.
pub struct GlyphView {
    pub key: usize,
    pub glyph: String,
    pub reveal: String,
}

/// Splits a heading into per-character spans. Spaces become non-breaking so
/// inline-block spans keep their width.
pub fn glyphs(text: &str, reveal: &Reveal) -> Vec<GlyphView> {
    text.chars()
        .enumerate()
        .map(|(i, c)| GlyphView {
            key: i,
            glyph: if c == ' ' { '\u{a0}'.to_string() } else { c.to_string() },
            reveal: reveal.at(i).to_string(),
        })
        .collect()
}

/// Hero avatar: the profile image when it exists, the initials otherwise.
pub struct AvatarView {
    pub has_image: bool,
    pub image_src: String,
    pub initials: String,
}

impl AvatarView {
    pub fn build(profile: &Profile, assets: &AssetResolver) -> Self {
        let image_src = assets.resolve(profile.image.as_deref());
        AvatarView {
            has_image: image_src.is_some(),
            image_src: image_src.unwrap_or_default(),
            initials: profile.initials(),
        }
    }
}

/// Call-to-action button.
pub struct CtaView {
    pub link: LinkView,
    pub label: &'static str,
    pub icon: &'static str,
    pub primary: bool,
}
