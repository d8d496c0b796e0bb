//! Folio - A content-driven personal portfolio page
//!
//! Core modules:
//! - `content`: Typed, read-only portfolio records (person, projects, skills, ...)
//! - `filter`: Tag filtering for the skills and projects sections
//! - `render`: Content to display tree (and HTML)
//! - `ui`: Interaction controller (filters, overlays, skill reveal, contact form)
//! - `settings`: UI tunables

pub mod content;
pub mod error;
pub mod filter;
pub mod render;
pub mod settings;
pub mod ui;

pub use content::{ContentSources, ContentStore};
pub use error::{ContentError, Result};
pub use filter::{TagFilter, Tagged};
pub use settings::Settings;
pub use ui::{Controller, Effect, UiEvent};
