//! Owns content, settings and UI state; the host's single entry point

use super::event::{Effect, UiEvent};
use super::reduce::{Context, reduce};
use super::state::UiState;
use super::typing::{Typewriter, TypingFrame};
use crate::content::ContentStore;
use crate::render::{Node, certificates, projects, skills};
use crate::settings::Settings;

pub struct Controller {
    content: ContentStore,
    settings: Settings,
    state: UiState,
    typewriter: Typewriter,
}

impl Controller {
    pub fn new(content: ContentStore, settings: Settings) -> Self {
        let state = UiState::new(&content);
        let typewriter = Typewriter::new(settings.typing.clone());
        Self {
            content,
            settings,
            state,
            typewriter,
        }
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Apply one event; returns the effects in the order they must be applied
    pub fn dispatch(&mut self, event: UiEvent) -> Vec<Effect> {
        let ctx = Context {
            content: &self.content,
            settings: &self.settings,
        };
        let transition = reduce(&self.state, event, ctx);
        self.state = transition.state;
        transition.effects
    }

    /// Next frame of the hero terminal animation
    pub fn typing_step(&mut self) -> TypingFrame {
        self.typewriter.step()
    }

    /// Skills filter bar and bars for the current filter
    pub fn skills_view(&self) -> Node {
        skills::skills_section(
            &self.content.skills,
            &self.state.skill_filter,
            &self.state.skill_reveal,
        )
    }

    /// Projects filter bar and cards for the current filter
    pub fn projects_view(&self) -> Node {
        projects::projects_section(&self.content.projects, &self.state.project_filter)
    }

    pub fn certificates_view(&self) -> Node {
        certificates::certificate_grid(&self.content.certificates)
    }

    pub fn project_detail_view(&self, index: usize) -> Option<Node> {
        self.content.projects.get(index).map(projects::project_detail)
    }

    pub fn certificate_detail_view(&self, index: usize) -> Option<Node> {
        self.content
            .certificates
            .get(index)
            .map(certificates::certificate_detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TagFilter;
    use crate::ui::event::Section;

    fn controller() -> Controller {
        Controller::new(ContentStore::bundled().unwrap(), Settings::default())
    }

    #[test]
    fn test_filter_changes_projects_view() {
        let mut c = controller();
        let all = c.projects_view().find_all("project-card").len();
        assert_eq!(all, c.content().projects.len());

        let effects = c.dispatch(UiEvent::SelectProjectFilter(TagFilter::Tag("Rust".into())));
        assert_eq!(effects, vec![Effect::RenderSection(Section::Projects)]);

        let view = c.projects_view();
        let cards = view.find_all("project-card");
        assert!(cards.len() < all);
        assert!(cards.iter().all(|card| card.text_content().contains("Rust")));
    }

    #[test]
    fn test_detail_views_follow_index() {
        let c = controller();
        let body = c.project_detail_view(0).unwrap();
        assert!(
            body.text_content()
                .contains(&c.content().projects[0].long_description)
        );
        assert!(c.project_detail_view(99).is_none());
        assert!(c.certificate_detail_view(0).is_some());
    }

    #[test]
    fn test_typing_runs_from_settings() {
        let mut c = controller();
        assert_eq!(c.typing_step().text, "w");
        assert_eq!(c.typing_step().text, "wh");
    }
}
