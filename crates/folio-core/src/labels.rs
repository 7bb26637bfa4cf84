//! Distinct label sets for the tag, technology and category filters.

use std::collections::BTreeSet;

use crate::entities::{Post, Project, Resource};

/// Collect labels into a sorted list without duplicates.
pub fn distinct_sorted<'a, I>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    labels
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[must_use]
pub fn all_tags(posts: &[Post]) -> Vec<String> {
    distinct_sorted(posts.iter().flat_map(|p| p.tags.iter().map(String::as_str)))
}

#[must_use]
pub fn all_technologies(projects: &[Project]) -> Vec<String> {
    distinct_sorted(projects.iter().flat_map(|p| p.tech.iter().map(String::as_str)))
}

#[must_use]
pub fn all_categories(resources: &[Resource]) -> Vec<String> {
    distinct_sorted(
        resources
            .iter()
            .flat_map(|r| r.categories.iter().map(String::as_str)),
    )
}
