use askama::Template;

use crate::models::page::ResumeTwo;
use crate::motion::presets::resume2 as motion;
use crate::render::links::LinkView;
use crate::render::templates::ResumeTwoTemplate;
use crate::render::timeline;
use crate::render::views::{
    glyphs, nav_links, AvatarView, CtaView, ProjectCardView, SkillView, TimelineEntryView,
};
use crate::render::PageContext;

// Positions inside the hero's on-mount stagger container.
const HERO_AVATAR: usize = 0;
const HERO_TITLE: usize = 1;
const HERO_BIO: usize = 2;
const HERO_CTAS: usize = 3;

fn build(page: &ResumeTwo, ctx: &PageContext) -> ResumeTwoTemplate {
    let profile = &page.profile;
    let hero = motion::hero_item();
    let card = motion::project_card();
    let badge = motion::skill_badge();
    let marker = motion::timeline_marker();

    let timeline = page
        .experience
        .iter()
        .zip(timeline::layout(&page.experience))
        .enumerate()
        .map(|(i, (entry, slot))| {
            TimelineEntryView::build(i, entry, slot, &marker, &motion::timeline_card(slot.side))
        })
        .collect();

    ResumeTwoTemplate {
        page_title: format!("{} | {}", profile.name, profile.title),
        accent: ctx.accent.clone(),
        nav: nav_links(),
        name_glyphs: glyphs(&profile.name, &motion::heading_char()),
        name: profile.name.clone(),
        title: profile.title.clone(),
        bio: profile.bio.clone(),
        avatar: AvatarView::build(profile, &ctx.assets),
        avatar_reveal: hero.at(HERO_AVATAR).to_string(),
        title_reveal: hero.at(HERO_TITLE).to_string(),
        bio_reveal: hero.at(HERO_BIO).to_string(),
        ctas: vec![
            CtaView {
                link: LinkView::new("#projects"),
                label: "View Projects",
                icon: "briefcase",
                primary: true,
            },
            CtaView {
                link: LinkView::new("#contact"),
                label: "Contact Me",
                icon: "mail",
                primary: false,
            },
        ],
        cta_reveal: hero.at(HERO_CTAS).to_string(),
        section_title_reveal: motion::section_title().single().to_string(),
        projects: page
            .projects
            .iter()
            .enumerate()
            .map(|(i, p)| ProjectCardView::build(i, p, &card, &ctx.assets))
            .collect(),
        skills: page
            .skills
            .iter()
            .enumerate()
            .map(|(i, s)| SkillView::build(i, s, &badge))
            .collect(),
        timeline,
        contact_message: page.contact.message.clone(),
        contact_reveal: motion::contact_message().single().to_string(),
        contact_link: LinkView::mailto(&profile.email),
        footer_reveal: motion::footer_line().single().to_string(),
        year: ctx.year,
    }
}

/// Renders Page B.
pub fn render_resume_two(page: &ResumeTwo, ctx: &PageContext) -> askama::Result<String> {
    build(page, ctx).render()
}
