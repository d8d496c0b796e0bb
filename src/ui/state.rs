//! UI state record
//!
//! Everything that changes during a session lives here. Content never does.

use super::form::FormState;
use super::nav::NavState;
use crate::content::ContentStore;
use crate::filter::TagFilter;
use crate::render::Reveal;

/// The two overlay widgets; each is its own state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Widget {
    ProjectDetail,
    CertificateDetail,
}

/// Open/closed state of one overlay widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    /// Showing the record at `index` in its content collection
    Open { index: usize },
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        matches!(self, Overlay::Open { .. })
    }

    pub fn selected(&self) -> Option<usize> {
        match self {
            Overlay::Open { index } => Some(*index),
            Overlay::Closed => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub skill_filter: TagFilter,
    pub project_filter: TagFilter,
    pub project_detail: Overlay,
    pub certificate_detail: Overlay,
    /// One flag per currently rendered skill bar
    pub skill_reveal: Vec<Reveal>,
    pub form: FormState,
    /// Token of the confirmation message on screen, if any
    pub success: Option<u64>,
    /// Next confirmation token
    pub next_token: u64,
    pub nav: NavState,
}

impl UiState {
    /// Initial state: no filters, nothing open, every bar pending
    pub fn new(content: &ContentStore) -> Self {
        Self {
            skill_filter: TagFilter::All,
            project_filter: TagFilter::All,
            project_detail: Overlay::Closed,
            certificate_detail: Overlay::Closed,
            skill_reveal: vec![Reveal::Pending; content.skills.len()],
            form: FormState::contact(),
            success: None,
            next_token: 1,
            nav: NavState::default(),
        }
    }

    pub fn overlay(&self, widget: Widget) -> Overlay {
        match widget {
            Widget::ProjectDetail => self.project_detail,
            Widget::CertificateDetail => self.certificate_detail,
        }
    }

    pub fn overlay_mut(&mut self, widget: Widget) -> &mut Overlay {
        match widget {
            Widget::ProjectDetail => &mut self.project_detail,
            Widget::CertificateDetail => &mut self.certificate_detail,
        }
    }

    /// Page scroll is suspended while any overlay is open
    pub fn scroll_locked(&self) -> bool {
        self.project_detail.is_open() || self.certificate_detail.is_open()
    }
}
