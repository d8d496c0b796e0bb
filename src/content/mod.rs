//! Content store
//!
//! Typed, read-only records for the page owner and their projects, skills,
//! certificates and work history. Loaded once; never mutated afterwards.

pub mod model;
pub mod store;

pub use model::{Certificate, Experience, Person, Project, Skill, SocialLinks};
pub use store::{ContentSources, ContentStore};
