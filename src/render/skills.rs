//! Skills section: category filter bar plus one bar per skill
//!
//! A bar's fill stays at 0% until its reveal flag flips. The flag is indexed by
//! position in the rendered list, not by position in the content.

use super::action;
use super::filters::filter_bar;
use super::node::{Element, Node};
use crate::content::Skill;
use crate::filter::{TagFilter, filter_by_tag, skill_categories};

/// One-shot viewport reveal state of a rendered skill bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Pending,
    Revealed,
}

/// CSS width of the fill for a skill at this reveal state
pub fn fill_width(level: u8, reveal: Reveal) -> String {
    match reveal {
        Reveal::Pending => "0%".to_string(),
        Reveal::Revealed => format!("{}%", level),
    }
}

pub fn skill_item(skill: &Skill, position: usize, reveal: Reveal) -> Element {
    Element::new("div")
        .class("skill")
        .child(
            Element::new("div")
                .class("skill__header")
                .child(Element::new("span").class("skill__name").text(&skill.name))
                .child(
                    Element::new("span")
                        .class("skill__level")
                        .text(format!("{}%", skill.level)),
                ),
        )
        .child(
            Element::new("div")
                .class("skill__bar")
                .class_if("revealed", reveal == Reveal::Revealed)
                .attr("data-level", skill.level.to_string())
                .attr("data-index", position.to_string())
                .child(
                    Element::new("div")
                        .class("skill__fill")
                        .attr("style", format!("width: {}", fill_width(skill.level, reveal))),
                ),
        )
        .child(
            Element::new("div")
                .class("skill__category")
                .text(&skill.category),
        )
}

/// The list container; `reveal` runs parallel to `skills`
pub fn skill_list(skills: &[&Skill], reveal: &[Reveal]) -> Element {
    Element::new("div")
        .class("skills__container")
        .attr("id", "skills-container")
        .children(skills.iter().enumerate().map(|(position, skill)| {
            let state = reveal.get(position).copied().unwrap_or_default();
            skill_item(skill, position, state)
        }))
}

pub fn skill_filters(skills: &[Skill], active: &TagFilter) -> Element {
    filter_bar(
        "skills",
        action::FILTER_SKILLS,
        &skill_categories(skills),
        active,
    )
    .attr("id", "skills-filters")
}

/// Filter bar and the skills matching `active`
pub fn skills_section(skills: &[Skill], active: &TagFilter, reveal: &[Reveal]) -> Node {
    let visible = filter_by_tag(skills, active);
    Element::new("div")
        .class("skills__body")
        .child(skill_filters(skills, active))
        .child(skill_list(&visible, reveal))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills() -> Vec<Skill> {
        vec![
            Skill {
                name: "Rust".into(),
                level: 85,
                category: "Languages".into(),
            },
            Skill {
                name: "React".into(),
                level: 80,
                category: "Frontend".into(),
            },
            Skill {
                name: "Go".into(),
                level: 60,
                category: "Languages".into(),
            },
        ]
    }

    #[test]
    fn test_pending_bars_are_empty_until_revealed() {
        let skills = skills();
        let node = skills_section(
            &skills,
            &TagFilter::All,
            &[Reveal::Revealed, Reveal::Pending],
        );
        let fills: Vec<&str> = node
            .find_all("skill__fill")
            .iter()
            .filter_map(|f| f.get_attr("style"))
            .collect();
        // Third bar has no flag yet and defaults to pending
        assert_eq!(fills, vec!["width: 85%", "width: 0%", "width: 0%"]);
    }

    #[test]
    fn test_filtered_list_shows_category_only() {
        let skills = skills();
        let node = skills_section(&skills, &TagFilter::Tag("Languages".into()), &[]);
        let names: Vec<String> = node
            .find_all("skill__name")
            .iter()
            .map(|n| n.text_content())
            .collect();
        assert_eq!(names, vec!["Rust", "Go"]);
        let levels: Vec<String> = node
            .find_all("skill__level")
            .iter()
            .map(|n| n.text_content())
            .collect();
        assert_eq!(levels, vec!["85%", "60%"]);
        let bar = node.find("skill__bar").unwrap();
        assert_eq!(bar.get_attr("data-level"), Some("85"));
    }

    #[test]
    fn test_filter_bar_lists_categories() {
        let skills = skills();
        let node = skills_section(&skills, &TagFilter::All, &[]);
        let labels: Vec<String> = node
            .find_all("skills__filter-btn")
            .iter()
            .map(|b| b.text_content())
            .collect();
        assert_eq!(labels, vec!["All", "Languages", "Frontend"]);
    }
}
