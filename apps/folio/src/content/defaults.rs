//! Built-in page content.

use crate::models::page::{Contact, Intro, ResumeOne, ResumeTwo};
use crate::models::resume::{
    Experience, Profile, Project, Skill, SkillIcon, SkillLevel, TimelineSide,
};

const OWNER: &str = "Anar-Erdene";

fn project(title: &str, description: &str, stack: &[&str], image: Option<&str>) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        stack: stack.iter().map(|s| s.to_string()).collect(),
        link: "#".to_string(),
        image: image.map(str::to_string),
    }
}

fn skill(name: &str, level: SkillLevel, icon: SkillIcon) -> Skill {
    Skill {
        name: name.to_string(),
        level: Some(level),
        icon: Some(icon),
    }
}

fn job(
    role: &str,
    company: &str,
    period: &str,
    description: &str,
    side: Option<TimelineSide>,
) -> Experience {
    Experience {
        role: role.to_string(),
        company: company.to_string(),
        period: period.to_string(),
        description: description.to_string(),
        side,
    }
}

impl Default for ResumeOne {
    fn default() -> Self {
        ResumeOne {
            intro: Intro {
                name: OWNER.to_string(),
                tagline: "A passionate developer crafting minimalistic, interactive, and engaging web experiences.".to_string(),
            },
            projects: vec![
                project(
                    "Project One",
                    "A short description of project one.",
                    &["Next.js", "Tailwind CSS", "Framer Motion"],
                    Some("/images/project1.jpg"),
                ),
                project(
                    "Project Two",
                    "A short description of project two.",
                    &["React", "Tailwind CSS"],
                    Some("/images/project2.jpg"),
                ),
            ],
            skills: [
                "JavaScript",
                "TypeScript",
                "React",
                "Next.js",
                "Tailwind CSS",
                "Framer Motion",
            ]
            .into_iter()
            .map(Skill::named)
            .collect(),
            experiences: vec![
                job(
                    "Frontend Developer",
                    "ABC Company",
                    "2023 - Present",
                    "Built responsive and interactive web applications.",
                    None,
                ),
                job(
                    "Junior Developer",
                    "XYZ Startup",
                    "2021 - 2023",
                    "Worked on multiple projects using modern JS frameworks.",
                    None,
                ),
            ],
        }
    }
}

impl Default for ResumeTwo {
    fn default() -> Self {
        ResumeTwo {
            profile: Profile {
                name: OWNER.to_string(),
                title: "Full-Stack Developer & UI/UX Enthusiast".to_string(),
                bio: "I'm a passionate and goal-oriented developer focused on building modern, performant, and highly engaging user experiences. I thrive on transforming complex problems into elegant, minimalist solutions using cutting-edge technologies like Next.js and Tailwind CSS.".to_string(),
                image: Some("/placeholder-profile.jpg".to_string()),
                email: "anar.erdene@example.com".to_string(),
            },
            projects: vec![
                project(
                    "E-Commerce Platform Redesign",
                    "A complete overhaul of an existing e-commerce site, resulting in a 40% increase in conversion rates. Focused on performance optimization and mobile-first design.",
                    &["Next.js", "TypeScript", "Tailwind CSS", "Stripe API"],
                    None,
                ),
                project(
                    "AI-Powered Content Generator",
                    "A SaaS application providing marketers with unique, SEO-optimized content based on user prompts. Implemented a custom API for natural language processing.",
                    &["React", "Node.js", "Express", "MongoDB", "Framer Motion"],
                    None,
                ),
                project(
                    "Personal Finance Tracker (Mobile)",
                    "A clean, intuitive mobile application for tracking daily expenses and managing budgets. Designed with a focus on data visualization and ease of use.",
                    &["React Native", "Firebase", "Redux"],
                    None,
                ),
            ],
            skills: vec![
                skill("JavaScript", SkillLevel::Expert, SkillIcon::Code),
                skill("React / Next.js", SkillLevel::Expert, SkillIcon::Terminal),
                skill("Tailwind CSS", SkillLevel::Expert, SkillIcon::Zap),
                skill("Framer Motion", SkillLevel::Intermediate, SkillIcon::Briefcase),
                skill("TypeScript", SkillLevel::Intermediate, SkillIcon::Code),
                skill("Node.js / Express", SkillLevel::Intermediate, SkillIcon::Terminal),
            ],
            experience: vec![
                job(
                    "Senior Frontend Developer",
                    "Innovatech Solutions",
                    "2021 - Present",
                    "Led a team of three developers in migrating legacy applications to the Next.js framework, improving performance by over 60%. Established best practices for component-based architecture and state management.",
                    Some(TimelineSide::Left),
                ),
                job(
                    "UI/UX Designer & Developer",
                    "Creative Digital Agency",
                    "2018 - 2021",
                    "Designed and developed over 15 client websites from concept to deployment. Specializing in creating highly engaging, animated user interfaces using modern CSS and React libraries.",
                    Some(TimelineSide::Right),
                ),
                job(
                    "Junior Web Developer",
                    "Local Startup Hub",
                    "2017 - 2018",
                    "Assisted senior developers with bug fixes and feature implementation. Focused on learning core web technologies: HTML, CSS, and basic JavaScript frameworks.",
                    Some(TimelineSide::Left),
                ),
            ],
            contact: Contact {
                message: "I'm currently open to new opportunities and exciting collaborations. Whether you have a project in mind or just want to say hello, feel free to drop me an email!".to_string(),
            },
        }
    }
}

impl Default for Intro {
    fn default() -> Self {
        ResumeOne::default().intro
    }
}

impl Default for Contact {
    fn default() -> Self {
        ResumeTwo::default().contact
    }
}

impl Default for Profile {
    fn default() -> Self {
        ResumeTwo::default().profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_one_shape() {
        let page = ResumeOne::default();
        assert_eq!(page.projects.len(), 2);
        assert_eq!(page.skills.len(), 6);
        assert_eq!(page.experiences.len(), 2);
        assert!(page.skills.iter().all(|s| s.level.is_none() && s.icon.is_none()));
    }

    #[test]
    fn test_resume_two_shape() {
        let page = ResumeTwo::default();
        assert_eq!(page.projects.len(), 3);
        assert_eq!(page.projects[0].stack.len(), 4);
        assert_eq!(page.skills.len(), 6);
        assert_eq!(page.experience.len(), 3);
        assert_eq!(page.profile.email, "anar.erdene@example.com");
    }

    #[test]
    fn test_timeline_sides_alternate() {
        let sides: Vec<_> = ResumeTwo::default()
            .experience
            .iter()
            .enumerate()
            .map(|(i, e)| e.side_at(i))
            .collect();
        assert_eq!(
            sides,
            vec![TimelineSide::Left, TimelineSide::Right, TimelineSide::Left]
        );
    }
}
