//! Hero, about, code panel and contact sections
//!
//! All of these project `Person` fields verbatim; optional fields (photo,
//! resume) simply drop their element.

use super::node::{Element, Node};
use crate::content::Person;

/// Display name for a social platform key
pub fn platform_label(platform: &str) -> &str {
    match platform {
        "github" => "GitHub",
        "linkedin" => "LinkedIn",
        "facebook" => "Facebook",
        "twitter" => "Twitter",
        "email" => "Email",
        other => other,
    }
}

/// Icon links for every non-empty social URL except email
pub fn social_links(person: &Person, icon_size: u32) -> Vec<Element> {
    person
        .social
        .iter()
        .filter(|(platform, url)| !url.is_empty() && *platform != "email")
        .map(|(platform, url)| {
            Element::new("a")
                .external(url)
                .attr("aria-label", format!("{} profile", platform_label(platform)))
                .child(
                    Element::new("svg")
                        .attr("width", icon_size.to_string())
                        .attr("height", icon_size.to_string())
                        .attr("viewBox", "0 0 24 24")
                        .attr("fill", "currentColor")
                        .child(Element::new("use").attr("href", format!("#icon-{}", platform))),
                )
        })
        .collect()
}

fn profile_photo(person: &Person, class: &str) -> Option<Element> {
    person.photo.as_ref().map(|src| {
        Element::new("img")
            .class(class)
            .attr("src", src)
            .attr("alt", format!("{} profile photo", person.name))
    })
}

fn resume_link(person: &Person, id: &str) -> Option<Element> {
    person.resume_url.as_ref().map(|url| {
        Element::new("a")
            .class("btn")
            .class("btn--secondary")
            .attr("id", id)
            .external(url)
            .text("Download Resume")
    })
}

pub fn hero(person: &Person) -> Node {
    Element::new("div")
        .class("hero__content")
        .child_opt(
            profile_photo(person, "hero__photo")
                .map(|img| Element::new("div").class("hero__avatar").child(img)),
        )
        .child(
            Element::new("h1")
                .class("hero__name")
                .attr("id", "hero-name")
                .text(&person.name),
        )
        .child(
            Element::new("p")
                .class("hero__title")
                .attr("id", "hero-title")
                .text(&person.title),
        )
        .child(
            Element::new("p")
                .class("hero__description")
                .attr("id", "hero-description")
                .text(person.bio_teaser()),
        )
        .child_opt(resume_link(person, "resume-download"))
        .child(
            Element::new("div")
                .class("hero__social")
                .children(social_links(person, 20)),
        )
        .into()
}

/// The decorative "code editor" panel beside the hero
pub fn code_panel(person: &Person) -> Node {
    let teaser: String = person.bio.chars().take(50).collect();
    Element::new("pre")
        .class("code-panel")
        .child(
            Element::new("span")
                .class("code-panel__name")
                .attr("id", "code-name")
                .text(person.first_name()),
        )
        .child(
            Element::new("span")
                .class("code-panel__about-name")
                .attr("id", "code-about-name")
                .text(format!("'{}'", person.first_name())),
        )
        .child(
            Element::new("span")
                .class("code-panel__bio")
                .attr("id", "code-bio")
                .text(format!("'{}...'", teaser)),
        )
        .into()
}

fn info_item(class: &str, label: &str, value: &str) -> Element {
    Element::new("div")
        .class(class)
        .child(Element::new("strong").text(format!("{}:", label)))
        .text(" ")
        .child(Element::new("span").text(value))
}

pub fn about(person: &Person) -> Node {
    let languages = person.languages.join(", ");
    let info = [
        ("Location", person.location.as_str()),
        ("Email", person.email.as_str()),
        ("Phone", person.phone.as_str()),
        ("Languages", languages.as_str()),
    ];

    Element::new("div")
        .class("about__content")
        .child_opt(profile_photo(person, "about__photo"))
        .child(
            Element::new("p")
                .class("about__bio")
                .attr("id", "about-bio")
                .text(&person.bio),
        )
        .child(
            Element::new("div")
                .class("about__info")
                .children(info.iter().map(|(l, v)| info_item("about__info-item", l, v))),
        )
        .child_opt(resume_link(person, "about-resume-download"))
        .into()
}

pub fn contact(person: &Person) -> Node {
    let details = [
        ("📍", "Location", person.location.as_str()),
        ("✉️", "Email", person.email.as_str()),
        ("📞", "Phone", person.phone.as_str()),
    ];

    Element::new("div")
        .class("contact__info")
        .child(
            Element::new("div")
                .class("contact__details")
                .children(details.iter().map(|(icon, label, value)| {
                    info_item(
                        "contact__detail-item",
                        &format!("{} {}", icon, label),
                        value,
                    )
                })),
        )
        .child(
            Element::new("div")
                .class("contact__social")
                .children(social_links(person, 24)),
        )
        .into()
}
