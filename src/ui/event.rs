//! Events into the controller and effects out of it

use super::nav::SectionBounds;
use super::state::Widget;
use crate::filter::TagFilter;
use crate::render::action;

/// How an overlay was dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// Click on the dimmed area outside the content
    Backdrop,
    /// Explicit close control
    CloseButton,
}

/// A discrete user or timer event
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SelectSkillFilter(TagFilter),
    SelectProjectFilter(TagFilter),
    /// Card click; index into `ContentStore::projects`
    OpenProject(usize),
    /// Card click; index into `ContentStore::certificates`
    OpenCertificate(usize),
    CloseOverlay(Widget, CloseTrigger),
    /// Global cancel key (Escape)
    CancelKey,
    /// A rendered skill bar entered the viewport; position in the rendered list
    SkillVisible(usize),
    FieldInput { field: String, value: String },
    FieldBlur { field: String },
    Submit,
    /// Auto-dismiss timer for the confirmation with this token fired
    SuccessExpired(u64),
    NavToggle,
    NavLinkClicked,
    Scrolled { y: f64, sections: Vec<SectionBounds> },
}

impl UiEvent {
    /// Map a delegated click on a `data-action` element to an event.
    ///
    /// `attr` reads another `data-*` attribute of the same element.
    pub fn from_action(name: &str, attr: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let index = || attr("data-index").and_then(|i| i.parse::<usize>().ok());
        let tag = || attr("data-tag").map(|t| TagFilter::from_label(&t));

        match name {
            action::FILTER_SKILLS => tag().map(UiEvent::SelectSkillFilter),
            action::FILTER_PROJECTS => tag().map(UiEvent::SelectProjectFilter),
            action::OPEN_PROJECT => index().map(UiEvent::OpenProject),
            action::OPEN_CERTIFICATE => index().map(UiEvent::OpenCertificate),
            action::CLOSE_PROJECT => Some(UiEvent::CloseOverlay(
                Widget::ProjectDetail,
                CloseTrigger::CloseButton,
            )),
            action::DISMISS_PROJECT => Some(UiEvent::CloseOverlay(
                Widget::ProjectDetail,
                CloseTrigger::Backdrop,
            )),
            action::CLOSE_CERTIFICATE => Some(UiEvent::CloseOverlay(
                Widget::CertificateDetail,
                CloseTrigger::CloseButton,
            )),
            action::DISMISS_CERTIFICATE => Some(UiEvent::CloseOverlay(
                Widget::CertificateDetail,
                CloseTrigger::Backdrop,
            )),
            action::NAV_TOGGLE => Some(UiEvent::NavToggle),
            action::NAV_LINK => Some(UiEvent::NavLinkClicked),
            _ => None,
        }
    }

    /// Map a keydown to an event
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(UiEvent::CancelKey),
            _ => None,
        }
    }
}

/// Sections that re-render as a whole when their filter changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Skills,
    Projects,
}

/// Work for the host after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Rebuild the section's filter bar and list from the new state
    RenderSection(Section),
    ShowProjectDetail(usize),
    HideProjectDetail,
    ShowCertificateDetail(usize),
    HideCertificateDetail,
    LockScroll,
    UnlockScroll,
    FillSkillBar { position: usize, level: u8 },
    ShowFieldError { field: &'static str, message: String },
    ClearFieldError { field: &'static str },
    /// Show the confirmation and schedule `SuccessExpired(token)`
    ShowSuccess {
        token: u64,
        message: String,
        dismiss_after_ms: u32,
    },
    HideSuccess,
    ClearForm,
    SetNavMenu(bool),
    SetHeaderScrolled(bool),
    SetActiveSection(Option<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_from_action_filters_and_cards() {
        assert_eq!(
            UiEvent::from_action(action::FILTER_PROJECTS, attrs(&[("data-tag", "Rust")])),
            Some(UiEvent::SelectProjectFilter(TagFilter::Tag("Rust".into())))
        );
        assert_eq!(
            UiEvent::from_action(action::FILTER_SKILLS, attrs(&[("data-tag", "All")])),
            Some(UiEvent::SelectSkillFilter(TagFilter::All))
        );
        assert_eq!(
            UiEvent::from_action(action::OPEN_CERTIFICATE, attrs(&[("data-index", "3")])),
            Some(UiEvent::OpenCertificate(3))
        );
    }

    #[test]
    fn test_from_action_rejects_bad_or_inert() {
        assert_eq!(
            UiEvent::from_action(action::OPEN_PROJECT, attrs(&[("data-index", "x")])),
            None
        );
        assert_eq!(UiEvent::from_action(action::FOLLOW_LINK, attrs(&[])), None);
        assert_eq!(UiEvent::from_action("unknown", attrs(&[])), None);
    }

    #[test]
    fn test_escape_is_cancel() {
        assert_eq!(UiEvent::from_key("Escape"), Some(UiEvent::CancelKey));
        assert_eq!(UiEvent::from_key("Enter"), None);
    }
}
