//! Error types for content loading
//!
//! Form validation errors live with the form (`ui::form::ValidationError`);
//! they are recovered locally and never surface here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to parse {collection}: {source}")]
    Json {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Skill '{name}' has level {level}, expected 0-100")]
    SkillLevelOutOfRange { name: String, level: u32 },
}

pub type Result<T> = std::result::Result<T, ContentError>;
