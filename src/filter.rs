//! Tag filtering for the skills and projects sections
//!
//! This module must stay pure:
//! - No rendering or platform dependencies
//! - Stable output order (original relative order of the input)
//! - "All" is a sentinel, never a real tag

use std::collections::BTreeSet;

use crate::content::{Project, Skill};

/// Label of the catch-all filter control
pub const ALL_TAG: &str = "All";

/// The selected filter for one section
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    /// Map a control label back to a filter ("All" is the sentinel)
    pub fn from_label(label: &str) -> Self {
        if label == ALL_TAG {
            TagFilter::All
        } else {
            TagFilter::Tag(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TagFilter::All => ALL_TAG,
            TagFilter::Tag(tag) => tag,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, TagFilter::All)
    }

    pub fn matches<T: Tagged + ?Sized>(&self, item: &T) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => item.has_tag(tag),
        }
    }
}

/// A record that can be filtered by tag
pub trait Tagged {
    /// Every tag this record answers to
    fn tags(&self) -> impl Iterator<Item = &str>;

    fn has_tag(&self, tag: &str) -> bool {
        self.tags().any(|t| t == tag)
    }
}

impl<T: Tagged + ?Sized> Tagged for &T {
    fn tags(&self) -> impl Iterator<Item = &str> {
        (**self).tags()
    }
}

/// Skills carry a single category; matching is exact
impl Tagged for Skill {
    fn tags(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.category.as_str())
    }
}

/// Projects carry a technology set; matching is membership
impl Tagged for Project {
    fn tags(&self) -> impl Iterator<Item = &str> {
        self.technologies.iter().map(String::as_str)
    }
}

/// Filter items, keeping each survivor's position in `items`
pub fn filter_indexed<'a, T: Tagged>(items: &'a [T], filter: &TagFilter) -> Vec<(usize, &'a T)> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| filter.matches(*item))
        .collect()
}

/// Filter items by the selected tag; `All` returns everything in order
pub fn filter_by_tag<'a, T: Tagged>(items: &'a [T], filter: &TagFilter) -> Vec<&'a T> {
    items.iter().filter(|item| filter.matches(*item)).collect()
}

/// Order in which derived tags are listed after "All"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagOrder {
    /// Order of first appearance in the content
    FirstSeen,
    /// Lexicographic, case-sensitive
    Sorted,
}

/// Distinct tags of `items`, prefixed with `All`
pub fn available_tags<T: Tagged>(items: &[T], order: TagOrder) -> Vec<TagFilter> {
    let mut tags = vec![TagFilter::All];
    match order {
        TagOrder::FirstSeen => {
            let mut seen = BTreeSet::new();
            for tag in items.iter().flat_map(|item| item.tags()) {
                if seen.insert(tag) {
                    tags.push(TagFilter::Tag(tag.to_string()));
                }
            }
        }
        TagOrder::Sorted => {
            let sorted: BTreeSet<&str> = items.iter().flat_map(|item| item.tags()).collect();
            tags.extend(sorted.into_iter().map(|t| TagFilter::Tag(t.to_string())));
        }
    }
    tags
}

/// Skill filter controls: categories in content order
pub fn skill_categories(skills: &[Skill]) -> Vec<TagFilter> {
    available_tags(skills, TagOrder::FirstSeen)
}

/// Project filter controls: sorted technologies
pub fn project_technologies(projects: &[Project]) -> Vec<TagFilter> {
    available_tags(projects, TagOrder::Sorted)
}
