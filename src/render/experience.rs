//! Experience timeline, in content order

use super::date::format_date_range;
use super::node::{Element, Node};
use crate::content::Experience;

pub fn experience_item(exp: &Experience) -> Element {
    let duration = format!(
        "{} • {}",
        format_date_range(exp.start_date, exp.effective_end(), exp.current),
        exp.location
    );

    Element::new("div")
        .class("experience-item")
        .child(Element::new("div").class("experience-item__spacer"))
        .child(
            Element::new("div")
                .class("experience-item__content")
                .child(
                    Element::new("h3")
                        .class("experience-item__title")
                        .text(&exp.title),
                )
                .child(
                    Element::new("p")
                        .class("experience-item__company")
                        .text(&exp.company),
                )
                .child(
                    Element::new("p")
                        .class("experience-item__duration")
                        .text(duration),
                )
                .child(
                    Element::new("p")
                        .class("experience-item__description")
                        .text(&exp.description),
                )
                .child_opt(exp.responsibilities.as_ref().map(|items| {
                    Element::new("ul")
                        .class("experience-item__responsibilities")
                        .children(items.iter().map(|item| Element::new("li").text(item)))
                }))
                .child(
                    Element::new("div")
                        .class("experience-item__tech")
                        .children(exp.technologies.iter().map(|tech| {
                            Element::new("span")
                                .class("experience-item__tech-tag")
                                .text(tech)
                        })),
                ),
        )
        .child(Element::new("div").class("experience-item__dot"))
}

pub fn timeline(experience: &[Experience]) -> Node {
    Element::new("div")
        .class("experience__timeline")
        .attr("id", "experience-timeline")
        .children(experience.iter().map(experience_item))
        .into()
}
