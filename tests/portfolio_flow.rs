//! End-to-end flows over the bundled content

use folio::filter::{ALL_TAG, TagFilter};
use folio::render::{Node, action};
use folio::ui::{CloseTrigger, Effect, Section, UiEvent, Widget};
use folio::{ContentStore, Controller, Settings};

fn controller() -> Controller {
    Controller::new(
        ContentStore::bundled().expect("bundled content loads"),
        Settings::default(),
    )
}

/// Simulate a click on an element carrying `data-action`
fn click(c: &mut Controller, view: &Node, class: &str, nth: usize) -> Vec<Effect> {
    let el = view.find_all(class)[nth];
    let name = el.get_attr("data-action").expect("clickable").to_string();
    let event = UiEvent::from_action(&name, |attr| el.get_attr(attr).map(str::to_string))
        .expect("known action");
    c.dispatch(event)
}

fn active_labels(view: &Node, class: &str) -> Vec<String> {
    view.find_all(class)
        .into_iter()
        .filter(|b| b.has_class("active"))
        .map(|b| b.text_content())
        .collect()
}

#[test]
fn test_filter_buttons_drive_the_projects_grid() {
    let mut c = controller();
    let view = c.projects_view();
    assert_eq!(active_labels(&view, "projects__filter-btn"), vec![ALL_TAG]);

    // Buttons after "All" are sorted; pick "Rust"
    let labels: Vec<String> = view
        .find_all("projects__filter-btn")
        .iter()
        .map(|b| b.text_content())
        .collect();
    let rust = labels.iter().position(|l| l == "Rust").unwrap();
    let effects = click(&mut c, &view, "projects__filter-btn", rust);
    assert_eq!(effects, vec![Effect::RenderSection(Section::Projects)]);

    let view = c.projects_view();
    assert_eq!(active_labels(&view, "projects__filter-btn"), vec!["Rust"]);
    let titles: Vec<String> = view
        .find_all("project-card__title")
        .iter()
        .map(|t| t.text_content())
        .collect();
    assert_eq!(titles, vec!["Trailmap", "Pulse"]);
}

#[test]
fn test_filtered_card_opens_the_right_project() {
    let mut c = controller();
    c.dispatch(UiEvent::SelectProjectFilter(TagFilter::Tag("React".into())));

    let view = c.projects_view();
    let effects = click(&mut c, &view, "project-card", 0);
    // Ledgerly is second in the content
    assert_eq!(effects, vec![Effect::ShowProjectDetail(1), Effect::LockScroll]);

    let detail = c.project_detail_view(1).unwrap();
    assert_eq!(detail.find("modal__title").unwrap().text_content(), "Ledgerly");
    // No demo link in the content, only the source link
    assert_eq!(detail.find_all("btn").len(), 1);
}

#[test]
fn test_both_overlays_then_escape() {
    let mut c = controller();
    c.dispatch(UiEvent::OpenProject(0));
    let certs = c.certificates_view();
    let effects = click(&mut c, &certs, "certificate-card", 1);
    assert_eq!(effects, vec![Effect::ShowCertificateDetail(1)]);

    let effects = c.dispatch(UiEvent::from_key("Escape").unwrap());
    assert_eq!(
        effects,
        vec![
            Effect::HideProjectDetail,
            Effect::HideCertificateDetail,
            Effect::UnlockScroll
        ]
    );
    assert!(!c.state().scroll_locked());
}

#[test]
fn test_backdrop_closes_only_its_own_overlay() {
    let mut c = controller();
    c.dispatch(UiEvent::OpenCertificate(0));
    let close = UiEvent::from_action(action::DISMISS_PROJECT, |_| None).unwrap();
    assert_eq!(
        close,
        UiEvent::CloseOverlay(Widget::ProjectDetail, CloseTrigger::Backdrop)
    );
    assert!(c.dispatch(close).is_empty());
    assert!(c.state().certificate_detail.is_open());
}

#[test]
fn test_skill_bars_fill_once_in_view() {
    let mut c = controller();
    let view = c.skills_view();
    let bars = view.find_all("skill__bar");
    assert_eq!(bars.len(), c.content().skills.len());

    let level = c.content().skills[2].level;
    assert_eq!(
        c.dispatch(UiEvent::SkillVisible(2)),
        vec![Effect::FillSkillBar { position: 2, level }]
    );
    assert!(c.dispatch(UiEvent::SkillVisible(2)).is_empty());

    let fill = c.skills_view();
    let widths: Vec<&str> = fill
        .find_all("skill__fill")
        .iter()
        .filter_map(|f| f.get_attr("style"))
        .collect();
    assert_eq!(widths[2], format!("width: {}%", level));
    assert_eq!(widths[0], "width: 0%");
}

#[test]
fn test_contact_form_round() {
    let mut c = controller();
    let effects = c.dispatch(UiEvent::Submit);
    let errors: Vec<&str> = effects
        .iter()
        .filter_map(|e| match e {
            Effect::ShowFieldError { field, .. } => Some(*field),
            _ => None,
        })
        .collect();
    assert_eq!(errors, vec!["name", "email", "message"]);

    for (field, value) in [
        ("name", "Sam"),
        ("email", "sam@example.org"),
        ("message", "Hello there"),
    ] {
        c.dispatch(UiEvent::FieldInput {
            field: field.into(),
            value: value.into(),
        });
    }
    let effects = c.dispatch(UiEvent::Submit);
    let token = match &effects[0] {
        Effect::ShowSuccess { token, message, .. } => {
            assert_eq!(message, &c.settings().success_message);
            *token
        }
        other => panic!("expected confirmation, got {:?}", other),
    };
    assert_eq!(effects[1], Effect::ClearForm);
    assert_eq!(effects.len(), 2);

    assert_eq!(
        c.dispatch(UiEvent::SuccessExpired(token)),
        vec![Effect::HideSuccess]
    );
}
