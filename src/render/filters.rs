//! Filter control bars (skills categories, project technologies)

use super::node::Element;
use crate::filter::TagFilter;

/// One button per tag; exactly the button matching `active` is marked
pub fn filter_bar(block: &str, action: &str, tags: &[TagFilter], active: &TagFilter) -> Element {
    Element::new("div")
        .class(format!("{}__filters", block))
        .attr("role", "tablist")
        .children(tags.iter().map(|tag| {
            let selected = tag == active;
            Element::new("button")
                .class(format!("{}__filter-btn", block))
                .class_if("active", selected)
                .attr("role", "tab")
                .attr("aria-selected", selected.to_string())
                .attr("data-action", action)
                .attr("data-tag", tag.label())
                .text(tag.label())
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Node;
    use crate::render::action;

    #[test]
    fn test_exactly_one_active_button() {
        let tags = vec![
            TagFilter::All,
            TagFilter::Tag("Rust".into()),
            TagFilter::Tag("React".into()),
        ];
        let bar: Node = filter_bar(
            "projects",
            action::FILTER_PROJECTS,
            &tags,
            &TagFilter::Tag("Rust".into()),
        )
        .into();

        let buttons = bar.find_all("projects__filter-btn");
        assert_eq!(buttons.len(), 3);
        let active: Vec<String> = buttons
            .iter()
            .filter(|b| b.has_class("active"))
            .map(|b| b.text_content())
            .collect();
        assert_eq!(active, vec!["Rust"]);
        assert_eq!(buttons[0].get_attr("data-tag"), Some("All"));
    }
}
