//! Section renderers
//!
//! One module per page section. Every renderer is a pure function of the
//! content it is handed (already filtered) and returns a `Node` tree; none of
//! them filter or hold state.
//!
//! Interactive elements carry `data-action` (and `data-index` / `data-tag`)
//! attributes. The host delegates DOM events through these, see
//! `ui::UiEvent::from_action`.

pub mod certificates;
pub mod date;
pub mod experience;
pub mod filters;
pub mod node;
pub mod page;
pub mod person;
pub mod projects;
pub mod skills;

pub use date::{format_date_range, format_long_date, format_month_year};
pub use node::{Element, Node, html_escape};
pub use skills::Reveal;

/// `data-action` values understood by the interaction controller
pub mod action {
    pub const FILTER_SKILLS: &str = "filter-skills";
    pub const FILTER_PROJECTS: &str = "filter-projects";
    pub const OPEN_PROJECT: &str = "open-project";
    pub const OPEN_CERTIFICATE: &str = "open-certificate";
    pub const CLOSE_PROJECT: &str = "close-project";
    pub const DISMISS_PROJECT: &str = "dismiss-project";
    pub const CLOSE_CERTIFICATE: &str = "close-certificate";
    pub const DISMISS_CERTIFICATE: &str = "dismiss-certificate";
    pub const NAV_TOGGLE: &str = "nav-toggle";
    pub const NAV_LINK: &str = "nav-link";
    /// Plain links inside clickable cards; never dispatched
    pub const FOLLOW_LINK: &str = "follow-link";
}
