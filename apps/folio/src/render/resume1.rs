use askama::Template;

use crate::models::page::ResumeOne;
use crate::motion::presets::resume1 as motion;
use crate::render::templates::ResumeOneTemplate;
use crate::render::views::{ExperienceView, ProjectCardView, SkillView};
use crate::render::PageContext;

fn build(page: &ResumeOne, ctx: &PageContext) -> ResumeOneTemplate {
    let card = motion::project_card();
    let pill = motion::skill_pill();
    let row = motion::experience_row();

    ResumeOneTemplate {
        page_title: format!("{} | Résumé", page.intro.name),
        accent: ctx.accent.clone(),
        intro_name: page.intro.name.clone(),
        tagline: page.intro.tagline.clone(),
        heading_reveal: motion::intro_heading().single().to_string(),
        tagline_reveal: motion::intro_tagline().single().to_string(),
        section_heading_reveal: motion::section_heading().single().to_string(),
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
            .map(|(i, s)| SkillView::build(i, s, &pill))
            .collect(),
        experiences: page
            .experiences
            .iter()
            .enumerate()
            .map(|(i, e)| ExperienceView::build(i, e, &row))
            .collect(),
    }
}

/// Renders Page A.
pub fn render_resume_one(page: &ResumeOne, ctx: &PageContext) -> askama::Result<String> {
    build(page, ctx).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::page::SiteContent;
    use crate::render::assets::AssetResolver;
    use crate::render::test_support::{attrs, count, empty_context, texts};

    #[test]
    fn test_every_literal_field_is_rendered() {
        let (ctx, _dir) = empty_context();
        let page = ResumeOne::default();
        let html = render_resume_one(&page, &ctx).unwrap();

        let titles = texts(&html, ".project-card .project-title");
        let descriptions = texts(&html, ".project-card .project-description");
        for (i, project) in page.projects.iter().enumerate() {
            assert_eq!(titles[i], project.title);
            assert_eq!(descriptions[i], project.description);
            let tags = texts(
                &html,
                &format!(".project-card[data-key=\"{i}\"] .stack-tag"),
            );
            assert_eq!(tags, project.stack);
        }

        assert_eq!(
            texts(&html, ".skill-pill .skill-name"),
            page.skills.iter().map(|s| s.name.clone()).collect::<Vec<_>>()
        );

        let roles = texts(&html, ".experience-row .experience-role");
        let companies = texts(&html, ".experience-row .experience-company");
        let periods = texts(&html, ".experience-row .experience-period");
        let descriptions = texts(&html, ".experience-row .experience-description");
        for (i, exp) in page.experiences.iter().enumerate() {
            assert_eq!(roles[i], exp.role);
            assert_eq!(companies[i], exp.company);
            assert_eq!(periods[i], exp.period);
            assert_eq!(descriptions[i], exp.description);
        }

        assert_eq!(texts(&html, "#about h1"), vec!["Hi, I'm Anar-Erdene"]);
        assert_eq!(texts(&html, "#about p"), vec![page.intro.tagline.clone()]);
    }

    #[test]
    fn test_stack_tags_read_as_comma_list() {
        let (ctx, _dir) = empty_context();
        let html = render_resume_one(&ResumeOne::default(), &ctx).unwrap();
        let lines = texts(&html, ".project-card .project-stack");
        assert_eq!(lines[0], "Next.js, Tailwind CSS, Framer Motion");
        assert_eq!(lines[1], "React, Tailwind CSS");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let (ctx, _dir) = empty_context();
        let page = ResumeOne::default();
        assert_eq!(
            render_resume_one(&page, &ctx).unwrap(),
            render_resume_one(&page, &ctx).unwrap()
        );
    }

    #[test]
    fn test_empty_sequences_render_empty_containers() {
        let (ctx, _dir) = empty_context();
        let page = ResumeOne {
            projects: vec![],
            skills: vec![],
            experiences: vec![],
            ..ResumeOne::default()
        };
        let html = render_resume_one(&page, &ctx).unwrap();

        assert_eq!(count(&html, "[data-list=\"projects\"]"), 1);
        assert_eq!(count(&html, "[data-list=\"skills\"]"), 1);
        assert_eq!(count(&html, "[data-list=\"experience\"]"), 1);
        assert_eq!(count(&html, ".project-card"), 0);
        assert_eq!(count(&html, ".skill-pill"), 0);
        assert_eq!(count(&html, ".experience-row"), 0);
    }

    #[test]
    fn test_missing_images_show_placeholder() {
        let (ctx, _dir) = empty_context();
        let html = render_resume_one(&ResumeOne::default(), &ctx).unwrap();
        assert_eq!(count(&html, ".project-card .image-placeholder"), 2);
        assert_eq!(count(&html, ".project-card img"), 0);
    }

    #[test]
    fn test_existing_image_is_shown() {
        let (mut ctx, dir) = empty_context();
        std::fs::create_dir_all(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images/project1.jpg"), b"jpg").unwrap();
        let content = SiteContent::default();
        ctx.assets = AssetResolver::scan(dir.path(), content.image_paths());

        let html = render_resume_one(&ResumeOne::default(), &ctx).unwrap();
        assert_eq!(
            attrs(&html, ".project-card img", "src"),
            vec!["/images/project1.jpg"]
        );
        assert_eq!(count(&html, ".project-card .image-placeholder"), 1);
    }

    #[test]
    fn test_cards_carry_positional_keys_and_stagger() {
        let (ctx, _dir) = empty_context();
        let html = render_resume_one(&ResumeOne::default(), &ctx).unwrap();
        assert_eq!(attrs(&html, ".project-card", "data-key"), vec!["0", "1"]);
        assert_eq!(
            attrs(&html, ".project-card", "data-reveal-delay"),
            vec!["0.00", "0.20"]
        );
        assert_eq!(
            attrs(&html, ".skill-pill", "data-reveal-delay")[5],
            "0.50"
        );
        assert_eq!(
            attrs(&html, ".experience-row", "data-reveal-x"),
            vec!["-50px", "-50px"]
        );
    }

    #[test]
    fn test_project_links_open_new_context() {
        let (ctx, _dir) = empty_context();
        let html = render_resume_one(&ResumeOne::default(), &ctx).unwrap();
        assert_eq!(
            attrs(&html, ".project-card a", "target"),
            vec!["_blank", "_blank"]
        );
    }

    #[test]
    fn test_section_ids_are_unique() {
        let (ctx, _dir) = empty_context();
        let html = render_resume_one(&ResumeOne::default(), &ctx).unwrap();
        for id in ["about", "projects", "skills", "experience"] {
            assert_eq!(count(&html, &format!("#{id}")), 1, "id {id}");
        }
    }
}
