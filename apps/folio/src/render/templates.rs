//! Askama template structs for the two pages.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Askama provides compile-time verification that templates are valid.

use askama::Template;

use crate::render::links::LinkView;
use crate::render::theme::AccentColor;
use crate::render::views::{
    AvatarView, CtaView, ExperienceView, GlyphView, NavLink, ProjectCardView, SkillView,
    TimelineEntryView,
};

/// Page A: intro, projects, skills, experience.
#[derive(Template)]
#[template(path = "resume1.html")]
pub struct ResumeOneTemplate {
    pub page_title: String,
    pub accent: AccentColor,
    pub intro_name: String,
    pub tagline: String,
    pub heading_reveal: String,
    pub tagline_reveal: String,
    pub section_heading_reveal: String,
    pub projects: Vec<ProjectCardView>,
    pub skills: Vec<SkillView>,
    pub experiences: Vec<ExperienceView>,
}

/// Page B: navigation header, hero, projects, skills, timeline, contact.
#[derive(Template)]
#[template(path = "resume2.html")]
pub struct ResumeTwoTemplate {
    pub page_title: String,
    pub accent: AccentColor,
    pub nav: Vec<NavLink>,
    pub name_glyphs: Vec<GlyphView>,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub avatar: AvatarView,
    pub avatar_reveal: String,
    pub title_reveal: String,
    pub bio_reveal: String,
    pub ctas: Vec<CtaView>,
    pub cta_reveal: String,
    pub section_title_reveal: String,
    pub projects: Vec<ProjectCardView>,
    pub skills: Vec<SkillView>,
    pub timeline: Vec<TimelineEntryView>,
    pub contact_message: String,
    pub contact_reveal: String,
    pub contact_link: LinkView,
    pub footer_reveal: String,
    pub year: i32,
}
