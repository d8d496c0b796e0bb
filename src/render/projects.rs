//! Projects section: technology filter, card grid and the detail modal body

use super::action;
use super::filters::filter_bar;
use super::node::{Element, Node};
use crate::content::Project;
use crate::filter::{TagFilter, filter_indexed, project_technologies};

/// Shown in place of the grid when a filter matches nothing
pub const NO_PROJECTS: &str = "No projects found with this filter.";

fn tech_tags(block: &str, technologies: &[String]) -> Element {
    Element::new("div")
        .class(format!("{}__tech", block))
        .children(technologies.iter().map(|tech| {
            Element::new("span")
                .class(format!("{}__tech-tag", block))
                .text(tech)
        }))
}

fn card_link(href: &str, label: &str) -> Element {
    Element::new("a")
        .class("project-card__link")
        .external(href)
        .attr("data-action", action::FOLLOW_LINK)
        .text(label)
}

/// A clickable card; `index` is the project's position in the content
pub fn project_card(index: usize, project: &Project) -> Element {
    Element::new("div")
        .class("project-card")
        .attr("data-action", action::OPEN_PROJECT)
        .attr("data-index", index.to_string())
        .child_opt(
            project
                .featured
                .then(|| Element::new("span").class("project-card__featured").text("Featured")),
        )
        .child(
            Element::new("img")
                .class("project-card__image")
                .attr("src", &project.image)
                .attr("alt", &project.title)
                .attr("loading", "lazy"),
        )
        .child(
            Element::new("div")
                .class("project-card__content")
                .child(
                    Element::new("div").class("project-card__header").child(
                        Element::new("h3")
                            .class("project-card__title")
                            .text(&project.title),
                    ),
                )
                .child(
                    Element::new("p")
                        .class("project-card__description")
                        .text(&project.short_description),
                )
                .child(tech_tags("project-card", &project.technologies))
                .child(
                    Element::new("div")
                        .class("project-card__links")
                        .child_opt(
                            project
                                .demo_url
                                .as_deref()
                                .map(|url| card_link(url, "Live Demo →")),
                        )
                        .child_opt(
                            project
                                .repo_url
                                .as_deref()
                                .map(|url| card_link(url, "Source Code →")),
                        ),
                ),
        )
}

/// Cards for the given (content index, project) pairs, or the empty placeholder
pub fn project_grid(projects: &[(usize, &Project)]) -> Element {
    let grid = Element::new("div")
        .class("projects__grid")
        .attr("id", "projects-grid");

    if projects.is_empty() {
        return grid.child(Element::new("p").class("projects__empty").text(NO_PROJECTS));
    }

    grid.children(
        projects
            .iter()
            .map(|(index, project)| project_card(*index, project)),
    )
}

pub fn project_filters(projects: &[Project], active: &TagFilter) -> Element {
    filter_bar(
        "projects",
        action::FILTER_PROJECTS,
        &project_technologies(projects),
        active,
    )
    .attr("id", "projects-filters")
}

/// Filter bar and the cards matching `active`
pub fn projects_section(projects: &[Project], active: &TagFilter) -> Node {
    let visible = filter_indexed(projects, active);
    Element::new("div")
        .class("projects__body")
        .child(project_filters(projects, active))
        .child(project_grid(&visible))
        .into()
}

/// Modal body for the project detail view
pub fn project_detail(project: &Project) -> Node {
    let button = |href: &str, variant: &str, label: &str| {
        Element::new("a")
            .class("btn")
            .class(variant)
            .external(href)
            .text(label)
    };

    Element::new("div")
        .class("modal__body")
        .attr("id", "modal-body")
        .child(
            Element::new("img")
                .class("modal__image")
                .attr("src", &project.image)
                .attr("alt", &project.title),
        )
        .child(Element::new("h2").class("modal__title").text(&project.title))
        .child(
            Element::new("p")
                .class("modal__description")
                .text(&project.long_description),
        )
        .child(
            Element::new("div")
                .class("modal__section")
                .child(
                    Element::new("h3")
                        .class("modal__section-title")
                        .text("Technologies Used"),
                )
                .child(
                    Element::new("div")
                        .class("modal__tech-list")
                        .children(project.technologies.iter().map(|tech| {
                            Element::new("span").class("modal__tech-item").text(tech)
                        })),
                ),
        )
        .child(
            Element::new("div")
                .class("modal__links")
                .child_opt(
                    project
                        .demo_url
                        .as_deref()
                        .map(|url| button(url, "btn--primary", "View Live Demo")),
                )
                .child_opt(
                    project
                        .repo_url
                        .as_deref()
                        .map(|url| button(url, "btn--secondary", "View Source Code")),
                ),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, techs: &[&str], demo: bool, featured: bool) -> Project {
        Project {
            id: id.into(),
            title: format!("Project {}", id),
            short_description: "Short".into(),
            long_description: "Long description".into(),
            image: format!("{}.png", id),
            technologies: techs.iter().map(|t| t.to_string()).collect(),
            demo_url: demo.then(|| format!("https://{}.example.com", id)),
            repo_url: None,
            featured,
        }
    }

    fn projects() -> Vec<Project> {
        vec![
            project("a", &["Rust", "Wasm"], true, true),
            project("b", &["React"], false, false),
            project("c", &["Rust"], false, false),
        ]
    }

    #[test]
    fn test_unused_technology_renders_placeholder_and_no_cards() {
        let projects = projects();
        let node = projects_section(&projects, &TagFilter::Tag("COBOL".into()));
        assert!(node.find_all("project-card").is_empty());
        let empty = node.find("projects__empty").unwrap();
        assert_eq!(empty.text_content(), NO_PROJECTS);
    }

    #[test]
    fn test_cards_keep_content_index() {
        let projects = projects();
        let node = projects_section(&projects, &TagFilter::Tag("Rust".into()));
        let indices: Vec<&str> = node
            .find_all("project-card")
            .iter()
            .filter_map(|c| c.get_attr("data-index"))
            .collect();
        assert_eq!(indices, vec!["0", "2"]);
        assert!(node.find("projects__empty").is_none());
    }

    #[test]
    fn test_optional_links_and_featured_marker() {
        let projects = projects();
        let node: Node = project_card(0, &projects[0]).into();
        assert!(node.find("project-card__featured").is_some());
        let links: Vec<String> = node
            .find_all("project-card__link")
            .iter()
            .map(|l| l.text_content())
            .collect();
        assert_eq!(links, vec!["Live Demo →"]);

        let plain: Node = project_card(1, &projects[1]).into();
        assert!(plain.find("project-card__featured").is_none());
        assert!(plain.find_all("project-card__link").is_empty());
    }

    #[test]
    fn test_detail_shows_long_description() {
        let projects = projects();
        let node = project_detail(&projects[0]);
        assert_eq!(
            node.find("modal__description").unwrap().text_content(),
            "Long description"
        );
        assert_eq!(node.find_all("modal__tech-item").len(), 2);
        let html = node.to_html();
        assert!(html.contains("View Live Demo"));
        assert!(!html.contains("View Source Code"));
    }

    #[test]
    fn test_technology_filter_bar_sorted() {
        let projects = projects();
        let node = projects_section(&projects, &TagFilter::All);
        let labels: Vec<String> = node
            .find_all("projects__filter-btn")
            .iter()
            .map(|b| b.text_content())
            .collect();
        assert_eq!(labels, vec!["All", "React", "Rust", "Wasm"]);
    }
}
