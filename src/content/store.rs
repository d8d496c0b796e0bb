//! The content store: five collections loaded once at startup

use serde::de::DeserializeOwned;

use super::model::{Certificate, Experience, Person, Project, Skill};
use crate::error::{ContentError, Result};

/// Raw JSON for each collection, as shipped alongside the page
#[derive(Debug, Clone, Copy)]
pub struct ContentSources<'a> {
    pub personal: &'a str,
    pub projects: &'a str,
    pub skills: &'a str,
    pub certificates: &'a str,
    pub experience: &'a str,
}

impl ContentSources<'static> {
    /// Sample content compiled into the binary
    pub fn bundled() -> Self {
        Self {
            personal: include_str!("../../content/personal.json"),
            projects: include_str!("../../content/projects.json"),
            skills: include_str!("../../content/skills.json"),
            certificates: include_str!("../../content/certificates.json"),
            experience: include_str!("../../content/experience.json"),
        }
    }
}

/// Immutable portfolio content
#[derive(Debug, Clone)]
pub struct ContentStore {
    pub person: Person,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub certificates: Vec<Certificate>,
    pub experience: Vec<Experience>,
}

fn parse<T: DeserializeOwned>(collection: &'static str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|source| ContentError::Json { collection, source })
}

impl ContentStore {
    /// Build a store from already-typed collections
    pub fn new(
        person: Person,
        projects: Vec<Project>,
        skills: Vec<Skill>,
        certificates: Vec<Certificate>,
        experience: Vec<Experience>,
    ) -> Result<Self> {
        if let Some(skill) = skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::SkillLevelOutOfRange {
                name: skill.name.clone(),
                level: u32::from(skill.level),
            });
        }

        for project in projects.iter().filter(|p| p.technologies.is_empty()) {
            log::warn!(
                "Project '{}' has no technologies and only shows under All",
                project.id
            );
        }

        Ok(Self {
            person,
            projects,
            skills,
            certificates,
            experience,
        })
    }

    /// Parse and validate all five collections
    pub fn from_json(sources: ContentSources<'_>) -> Result<Self> {
        let store = Self::new(
            parse("personal", sources.personal)?,
            parse("projects", sources.projects)?,
            parse("skills", sources.skills)?,
            parse("certificates", sources.certificates)?,
            parse("experience", sources.experience)?,
        )?;

        log::info!(
            "Loaded content: {} projects, {} skills, {} certificates, {} roles",
            store.projects.len(),
            store.skills.len(),
            store.certificates.len(),
            store.experience.len()
        );

        Ok(store)
    }

    /// Load the sample content compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(ContentSources::bundled())
    }

    /// Load `personal.json`, `projects.json`, ... from a directory
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_dir(dir: &std::path::Path) -> Result<Self> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| ContentError::Io {
                path: path.display().to_string(),
                source,
            })
        };

        let personal = read("personal.json")?;
        let projects = read("projects.json")?;
        let skills = read("skills.json")?;
        let certificates = read("certificates.json")?;
        let experience = read("experience.json")?;

        Self::from_json(ContentSources {
            personal: &personal,
            projects: &projects,
            skills: &skills,
            certificates: &certificates,
            experience: &experience,
        })
    }
}
