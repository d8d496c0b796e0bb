//! Pure transition function for the page
//!
//! `reduce(state, event)` never touches the DOM. It returns the next state and
//! the effects the host must apply, in order.

use super::event::{Effect, Section, UiEvent};
use super::form::FieldState;
use super::nav::{active_section, header_scrolled};
use super::state::{Overlay, UiState, Widget};
use crate::content::ContentStore;
use crate::filter::{filter_by_tag, project_technologies, skill_categories};
use crate::render::Reveal;
use crate::settings::Settings;

/// Read-only inputs of a transition
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub content: &'a ContentStore,
    pub settings: &'a Settings,
}

/// Result of one transition
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: UiState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: &UiState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
        }
    }
}

/// Advance the UI state by one event
pub fn reduce(state: &UiState, event: UiEvent, ctx: Context<'_>) -> Transition {
    let mut next = state.clone();
    let mut effects = Vec::new();

    match event {
        UiEvent::SelectSkillFilter(filter) => {
            if filter == state.skill_filter {
                return Transition::unchanged(state);
            }
            if !skill_categories(&ctx.content.skills).contains(&filter) {
                log::debug!("Ignoring unknown skill category '{}'", filter.label());
                return Transition::unchanged(state);
            }
            // Fresh bars are rendered, each needing its own reveal
            let visible = filter_by_tag(&ctx.content.skills, &filter).len();
            log::debug!("Skill filter: {} ({} shown)", filter.label(), visible);
            next.skill_reveal = vec![Reveal::Pending; visible];
            next.skill_filter = filter;
            effects.push(Effect::RenderSection(Section::Skills));
        }

        UiEvent::SelectProjectFilter(filter) => {
            if filter == state.project_filter {
                return Transition::unchanged(state);
            }
            if !project_technologies(&ctx.content.projects).contains(&filter) {
                log::debug!("Ignoring unknown technology '{}'", filter.label());
                return Transition::unchanged(state);
            }
            log::debug!("Project filter: {}", filter.label());
            next.project_filter = filter;
            effects.push(Effect::RenderSection(Section::Projects));
        }

        UiEvent::OpenProject(index) => {
            if index >= ctx.content.projects.len() {
                log::warn!("No project at index {}", index);
                return Transition::unchanged(state);
            }
            open(&mut next, &mut effects, Widget::ProjectDetail, index);
        }

        UiEvent::OpenCertificate(index) => {
            if index >= ctx.content.certificates.len() {
                log::warn!("No certificate at index {}", index);
                return Transition::unchanged(state);
            }
            open(&mut next, &mut effects, Widget::CertificateDetail, index);
        }

        UiEvent::CloseOverlay(widget, trigger) => {
            log::debug!("Close {:?} via {:?}", widget, trigger);
            close(&mut next, &mut effects, widget);
        }

        UiEvent::CancelKey => {
            close(&mut next, &mut effects, Widget::ProjectDetail);
            close(&mut next, &mut effects, Widget::CertificateDetail);
        }

        UiEvent::SkillVisible(position) => {
            if next.skill_reveal.get(position) != Some(&Reveal::Pending) {
                return Transition::unchanged(state);
            }
            let visible = filter_by_tag(&ctx.content.skills, &state.skill_filter);
            let Some(skill) = visible.get(position) else {
                return Transition::unchanged(state);
            };
            next.skill_reveal[position] = Reveal::Revealed;
            effects.push(Effect::FillSkillBar {
                position,
                level: skill.level,
            });
        }

        UiEvent::FieldInput { field, value } => {
            let Some(f) = next.form.field_mut(&field) else {
                log::debug!("Input on unknown field '{}'", field);
                return Transition::unchanged(state);
            };
            let had_error = f.state.error().is_some();
            f.input(&value);
            if had_error {
                effects.push(Effect::ClearFieldError { field: f.def.name });
            }
        }

        UiEvent::FieldBlur { field } => {
            let Some(f) = next.form.field_mut(&field) else {
                log::debug!("Blur on unknown field '{}'", field);
                return Transition::unchanged(state);
            };
            let name = f.def.name;
            effects.push(match f.check() {
                FieldState::Invalid(err) => Effect::ShowFieldError {
                    field: name,
                    message: err.to_string(),
                },
                _ => Effect::ClearFieldError { field: name },
            });
        }

        UiEvent::Submit => {
            if next.form.check_all() {
                let token = next.next_token;
                next.next_token += 1;
                next.success = Some(token);
                next.form.clear();
                log::info!("Contact form accepted");
                effects.push(Effect::ShowSuccess {
                    token,
                    message: ctx.settings.success_message.clone(),
                    dismiss_after_ms: ctx.settings.success_message_ms,
                });
                effects.push(Effect::ClearForm);
            } else {
                let invalid = next
                    .form
                    .fields
                    .iter()
                    .filter(|f| f.state.error().is_some())
                    .count();
                log::info!("Contact form rejected ({} invalid fields)", invalid);
                for f in &next.form.fields {
                    effects.push(match f.state.error() {
                        Some(err) => Effect::ShowFieldError {
                            field: f.def.name,
                            message: err.to_string(),
                        },
                        None => Effect::ClearFieldError { field: f.def.name },
                    });
                }
            }
        }

        UiEvent::SuccessExpired(token) => {
            if state.success != Some(token) {
                return Transition::unchanged(state);
            }
            next.success = None;
            effects.push(Effect::HideSuccess);
        }

        UiEvent::NavToggle => {
            next.nav.menu_open = !state.nav.menu_open;
            effects.push(Effect::SetNavMenu(next.nav.menu_open));
        }

        UiEvent::NavLinkClicked => {
            if state.nav.menu_open {
                next.nav.menu_open = false;
                effects.push(Effect::SetNavMenu(false));
            }
        }

        UiEvent::Scrolled { y, sections } => {
            let scrolled = header_scrolled(y, ctx.settings.header_scroll_threshold);
            if scrolled != state.nav.scrolled {
                next.nav.scrolled = scrolled;
                effects.push(Effect::SetHeaderScrolled(scrolled));
            }
            // Between sections the last highlight stays
            if let Some(id) = active_section(y, ctx.settings.active_section_offset, &sections) {
                if state.nav.active_section.as_deref() != Some(id) {
                    next.nav.active_section = Some(id.to_string());
                    effects.push(Effect::SetActiveSection(Some(id.to_string())));
                }
            }
        }
    }

    Transition {
        state: next,
        effects,
    }
}

fn open(state: &mut UiState, effects: &mut Vec<Effect>, widget: Widget, index: usize) {
    let was_locked = state.scroll_locked();
    *state.overlay_mut(widget) = Overlay::Open { index };
    log::debug!("Open {:?} #{}", widget, index);

    effects.push(match widget {
        Widget::ProjectDetail => Effect::ShowProjectDetail(index),
        Widget::CertificateDetail => Effect::ShowCertificateDetail(index),
    });
    if !was_locked {
        effects.push(Effect::LockScroll);
    }
}

fn close(state: &mut UiState, effects: &mut Vec<Effect>, widget: Widget) {
    if !state.overlay(widget).is_open() {
        return;
    }
    *state.overlay_mut(widget) = Overlay::Closed;

    effects.push(match widget {
        Widget::ProjectDetail => Effect::HideProjectDetail,
        Widget::CertificateDetail => Effect::HideCertificateDetail,
    });
    if !state.scroll_locked() {
        effects.push(Effect::UnlockScroll);
    }
}
