//! The whole page
//!
//! Static chrome around the section renderers: navigation, the section
//! wrappers, the contact form, both overlays and the footer. The browser host
//! fills the `slot::*` containers again whenever their content changes.

use super::node::{Element, Node};
use super::{action, certificates, experience, person, projects, skills};
use crate::content::ContentStore;
use crate::filter::TagFilter;
use crate::settings::Settings;
use crate::ui::form::{CONTACT_FIELDS, FieldDef, FieldKind};

/// Element ids the host writes into
pub mod slot {
    pub const SKILLS: &str = "skills-body";
    pub const PROJECTS: &str = "projects-body";
    pub const PROJECT_DETAIL: &str = "project-detail";
    pub const CERTIFICATE_DETAIL: &str = "certificate-detail";
    pub const PROJECT_MODAL: &str = "project-modal";
    pub const CERTIFICATE_LIGHTBOX: &str = "certificate-lightbox";
    pub const TYPING: &str = "typing-text";
    pub const HEADER: &str = "header";
    pub const NAV_MENU: &str = "nav-menu";
    pub const NAV_TOGGLE: &str = "nav-toggle";
    pub const CONTACT_FORM: &str = "contact-form";
    pub const FORM_SUCCESS: &str = "form-success";
    pub const CURRENT_YEAR: &str = "current-year";
}

/// Section ids in page order, with their navigation labels
pub const SECTIONS: [(&str, &str); 7] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("certificates", "Certificates"),
    ("experience", "Experience"),
    ("contact", "Contact"),
];

/// Id of the inline error element for a form field
pub fn error_id(field: &str) -> String {
    format!("{}-error", field)
}

fn header(content: &ContentStore) -> Element {
    Element::new("header")
        .class("header")
        .attr("id", slot::HEADER)
        .child(
            Element::new("nav")
                .class("nav")
                .child(
                    Element::new("a")
                        .class("nav__logo")
                        .attr("href", "#home")
                        .text(content.person.first_name()),
                )
                .child(
                    Element::new("ul")
                        .class("nav__menu")
                        .attr("id", slot::NAV_MENU)
                        .children(SECTIONS.iter().map(|(id, label)| {
                            Element::new("li").class("nav__item").child(
                                Element::new("a")
                                    .class("nav__link")
                                    .attr("href", format!("#{}", id))
                                    .attr("data-action", action::NAV_LINK)
                                    .text(*label),
                            )
                        })),
                )
                .child(
                    Element::new("button")
                        .class("nav__toggle")
                        .attr("id", slot::NAV_TOGGLE)
                        .attr("aria-label", "Toggle navigation")
                        .attr("data-action", action::NAV_TOGGLE)
                        .children((0..3).map(|_| Element::new("span").class("nav__toggle-bar"))),
                ),
        )
}

fn section(id: &str, title: Option<&str>, body: impl Into<Node>) -> Element {
    Element::new("section")
        .class("section")
        .class(id.to_string())
        .attr("id", id)
        .child(
            Element::new("div")
                .class("container")
                .child_opt(title.map(|t| Element::new("h2").class("section__title").text(t)))
                .child(body),
        )
}

fn slot_container(id: &str, body: Node) -> Element {
    Element::new("div").attr("id", id).child(body)
}

fn hero_section(content: &ContentStore) -> Element {
    let terminal = Element::new("div")
        .class("terminal")
        .child(
            Element::new("span")
                .class("terminal__prompt")
                .text("$ "),
        )
        .child(
            Element::new("span")
                .class("terminal__text")
                .attr("id", slot::TYPING),
        )
        .child(Element::new("span").class("terminal__cursor").text("_"));

    let body = Element::new("div")
        .class("hero__inner")
        .child(person::hero(&content.person))
        .child(
            Element::new("div")
                .class("hero__visual")
                .child(terminal)
                .child(person::code_panel(&content.person)),
        );

    section("home", None, body)
}

fn form_field(def: &FieldDef) -> Element {
    let control = match def.kind {
        FieldKind::TextArea => Element::new("textarea").attr("rows", "5"),
        FieldKind::Email => Element::new("input").attr("type", "email"),
        FieldKind::Text => Element::new("input").attr("type", "text"),
    }
    .class("form__input")
    .attr("id", def.name)
    .attr("name", def.name);

    let label = if def.required {
        format!("{} *", def.label)
    } else {
        def.label.to_string()
    };

    Element::new("div")
        .class("form__group")
        .child(
            Element::new("label")
                .class("form__label")
                .attr("for", def.name)
                .text(label),
        )
        .child(control)
        .child(
            Element::new("span")
                .class("form__error")
                .attr("id", error_id(def.name))
                .attr("aria-live", "polite"),
        )
}

fn contact_form() -> Element {
    Element::new("form")
        .class("contact__form")
        .attr("id", slot::CONTACT_FORM)
        .attr("novalidate", "")
        .children(CONTACT_FIELDS.iter().map(form_field))
        .child(
            Element::new("button")
                .class("btn")
                .class("btn--primary")
                .attr("type", "submit")
                .text("Send Message"),
        )
        .child(
            Element::new("div")
                .class("form__success")
                .attr("id", slot::FORM_SUCCESS)
                .attr("role", "status"),
        )
}

/// An overlay with a dismissable backdrop, a close control and an empty slot
fn overlay(block: &str, id: &str, dismiss: &str, close: &str, slot_id: &str) -> Element {
    Element::new("div")
        .class(block.to_string())
        .attr("id", id)
        .attr("aria-hidden", "true")
        .child(
            Element::new("div")
                .class(format!("{}__overlay", block))
                .attr("data-action", dismiss),
        )
        .child(
            Element::new("div")
                .class(format!("{}__container", block))
                .child(
                    Element::new("button")
                        .class(format!("{}__close", block))
                        .attr("aria-label", "Close")
                        .attr("data-action", close)
                        .text("×"),
                )
                .child(Element::new("div").attr("id", slot_id)),
        )
}

/// `year` is the render-time year; the browser host rewrites it on load
fn footer(content: &ContentStore, year: i32) -> Element {
    Element::new("footer").class("footer").child(
        Element::new("p")
            .class("footer__text")
            .text("© ")
            .child(
                Element::new("span")
                    .attr("id", slot::CURRENT_YEAR)
                    .text(year.to_string()),
            )
            .text(format!(" {}. All rights reserved.", content.person.name)),
    )
}

/// The page body in its initial state: no filters, nothing open, bars empty
pub fn body(content: &ContentStore, year: i32) -> Node {
    let reveal = vec![skills::Reveal::Pending; content.skills.len()];

    Element::new("div")
        .class("page")
        .child(header(content))
        .child(
            Element::new("main")
                .child(hero_section(content))
                .child(section("about", Some("About Me"), person::about(&content.person)))
                .child(section(
                    "skills",
                    Some("Skills"),
                    slot_container(
                        slot::SKILLS,
                        skills::skills_section(&content.skills, &TagFilter::All, &reveal),
                    ),
                ))
                .child(section(
                    "projects",
                    Some("Projects"),
                    slot_container(
                        slot::PROJECTS,
                        projects::projects_section(&content.projects, &TagFilter::All),
                    ),
                ))
                .child(section(
                    "certificates",
                    Some("Certificates"),
                    certificates::certificate_grid(&content.certificates),
                ))
                .child(section(
                    "experience",
                    Some("Experience"),
                    experience::timeline(&content.experience),
                ))
                .child(section(
                    "contact",
                    Some("Get In Touch"),
                    Element::new("div")
                        .class("contact__content")
                        .child(person::contact(&content.person))
                        .child(contact_form()),
                )),
        )
        .child(overlay(
            "modal",
            slot::PROJECT_MODAL,
            action::DISMISS_PROJECT,
            action::CLOSE_PROJECT,
            slot::PROJECT_DETAIL,
        ))
        .child(overlay(
            "lightbox",
            slot::CERTIFICATE_LIGHTBOX,
            action::DISMISS_CERTIFICATE,
            action::CLOSE_CERTIFICATE,
            slot::CERTIFICATE_DETAIL,
        ))
        .child(footer(content, year))
        .into()
}

/// A complete HTML document, with `settings` inlined for the browser host
pub fn document(content: &ContentStore, settings: &Settings, year: i32) -> String {
    let settings_json = serde_json::to_string(settings)
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/");

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "<title>{title}</title>\n",
            "<link rel=\"stylesheet\" href=\"assets/css/style.css\">\n",
            "<script type=\"application/json\" id=\"{settings_id}\">{settings}</script>\n",
            "</head>\n<body>\n{body}\n",
            "<script type=\"module\">import init from './pkg/folio.js'; init();</script>\n",
            "</body>\n</html>\n"
        ),
        title = super::html_escape(&format!(
            "{} | {}",
            content.person.name, content.person.title
        )),
        settings_id = Settings::ELEMENT_ID,
        settings = settings_json,
        body = body(content, year).to_html(),
    )
}
