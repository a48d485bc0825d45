use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::models::page::SiteContent;

/// Where the running site's content came from, for startup logging.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentSource {
    BuiltIn,
    File(PathBuf),
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::BuiltIn => write!(f, "built-in"),
            ContentSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads site content, layering the optional TOML file over the built-in literals.
pub async fn load_content(path: Option<&Path>) -> Result<(SiteContent, ContentSource)> {
    let Some(path) = path else {
        return Ok((SiteContent::default(), ContentSource::BuiltIn));
    };

    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read content file '{}'", path.display()))?;
    let content = parse_content(&raw)
        .with_context(|| format!("Invalid content file '{}'", path.display()))?;

    info!(
        "Loaded content override: {} resume1 projects, {} resume2 projects",
        content.resume1.projects.len(),
        content.resume2.projects.len()
    );

    Ok((content, ContentSource::File(path.to_path_buf())))
}

/// Parses a content document. Omitted tables and fields keep their built-in values.
pub fn parse_content(raw: &str) -> Result<SiteContent> {
    toml::from_str(raw).context("content is not valid TOML for the site schema")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::page::{ResumeOne, ResumeTwo};
    use crate::models::resume::TimelineSide;
    use std::io::Write;

    #[test]
    fn test_empty_document_is_built_in_content() {
        assert_eq!(parse_content("").unwrap(), SiteContent::default());
    }

    #[test]
    fn test_partial_override_keeps_other_fields() {
        let content = parse_content(
            r#"
            [resume2.profile]
            email = "hello@example.org"
            "#,
        )
        .unwrap();

        assert_eq!(content.resume2.profile.email, "hello@example.org");
        assert_eq!(content.resume2.profile.name, ResumeTwo::default().profile.name);
        assert_eq!(content.resume2.projects, ResumeTwo::default().projects);
        assert_eq!(content.resume1, ResumeOne::default());
    }

    #[test]
    fn test_sequences_replace_wholesale_and_keep_order() {
        let content = parse_content(
            r#"
            [[resume2.experience]]
            role = "Staff Engineer"
            company = "Zeta"
            period = "2024 - Present"
            description = "Runs the platform team."
            side = "right"

            [[resume2.experience]]
            role = "Engineer"
            company = "Alpha"
            period = "2019 - 2024"
            description = "Built the billing service."
            "#,
        )
        .unwrap();

        let roles: Vec<_> = content
            .resume2
            .experience
            .iter()
            .map(|e| e.role.as_str())
            .collect();
        assert_eq!(roles, vec!["Staff Engineer", "Engineer"]);
        assert_eq!(content.resume2.experience[0].side, Some(TimelineSide::Right));
        assert_eq!(content.resume2.experience[1].side, None);
    }

    #[test]
    fn test_empty_sequences_are_allowed() {
        let content = parse_content("[resume1]\nprojects = []\nskills = []\nexperiences = []\n")
            .unwrap();
        assert!(content.resume1.projects.is_empty());
        assert!(content.resume1.skills.is_empty());
        assert!(content.resume1.experiences.is_empty());
    }

    #[test]
    fn test_unknown_skill_level_rejected() {
        let err = parse_content(
            r#"
            [[resume2.skills]]
            name = "COBOL"
            level = "Wizard"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("site schema"));
    }

    #[test]
    fn test_shipped_example_parses() {
        let content = parse_content(include_str!("../../content.example.toml")).unwrap();
        assert_eq!(content.resume2.skills[0].name, "Rust");
        assert_eq!(content.resume2.experience.len(), 2);
        assert_eq!(content.resume1, ResumeOne::default());
    }

    #[tokio::test]
    async fn test_load_without_path_is_built_in() {
        let (content, source) = load_content(None).await.unwrap();
        assert_eq!(content, SiteContent::default());
        assert_eq!(source, ContentSource::BuiltIn);
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[resume1.intro]\nname = \"Grace\"").unwrap();

        let (content, source) = load_content(Some(file.path())).await.unwrap();
        assert_eq!(content.resume1.intro.name, "Grace");
        assert_eq!(source, ContentSource::File(file.path().to_path_buf()));
    }

    #[tokio::test]
    async fn test_missing_file_names_path() {
        let err = load_content(Some(Path::new("/definitely/not/here.toml")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
