//! Content records for the two résumé pages.
//!
//! Container-level `serde(default)` means a content file only has to name
//! what it changes; every omitted field keeps its built-in value.

use serde::{Deserialize, Serialize};

use crate::models::resume::{Experience, Profile, Project, Skill};

/// Page A intro block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intro {
    pub name: String,
    pub tagline: String,
}

/// Page A: intro, projects, skills, experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeOne {
    pub intro: Intro,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
}

/// Page B contact footer copy. The address itself lives on the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub message: String,
}

/// Page B: hero, projects, skills, timeline, contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeTwo {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub contact: Contact,
}

/// Everything the site renders. Built once at startup, shared read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub resume1: ResumeOne,
    pub resume2: ResumeTwo,
}

impl SiteContent {
    /// Every image path either page may show, in page order.
    pub fn image_paths(&self) -> Vec<&str> {
        let project_images = self
            .resume1
            .projects
            .iter()
            .chain(&self.resume2.projects)
            .filter_map(|p| p.image.as_deref());
        self.resume2
            .profile
            .image
            .as_deref()
            .into_iter()
            .chain(project_images)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_paths_cover_both_pages() {
        let content = SiteContent::default();
        let paths = content.image_paths();
        assert_eq!(
            paths,
            vec![
                "/placeholder-profile.jpg",
                "/images/project1.jpg",
                "/images/project2.jpg"
            ]
        );
    }

    #[test]
    fn test_image_paths_skip_projects_without_image() {
        let mut content = SiteContent::default();
        content.resume1.projects.clear();
        content.resume2.profile.image = None;
        assert!(content.image_paths().is_empty());
    }
}
