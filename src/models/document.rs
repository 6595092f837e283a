//! Export document aggregate

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Category, ExportSettings, Post, Tag};

/// Root aggregate of one export: settings, channel-level taxonomy and posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportDocument {
    pub settings: ExportSettings,
    /// Channel-level category declarations
    pub categories: Vec<Category>,
    /// Channel-level tag declarations
    pub tags: Vec<Tag>,
    /// Posts in output order
    pub posts: Vec<Post>,
}

impl ExportDocument {
    pub fn new(settings: ExportSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }

    /// Whether any category exists anywhere in the export
    pub fn has_categories(&self) -> bool {
        !self.categories.is_empty() || self.posts.iter().any(|p| !p.categories.is_empty())
    }

    /// Whether any tag exists anywhere in the export
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty() || self.posts.iter().any(|p| !p.tags.is_empty())
    }

    /// Category slugs referenced by posts (or as parents) but not declared
    /// at channel level, in first-seen order.
    pub fn unresolved_categories(&self) -> Vec<&str> {
        let declared: HashSet<&str> = self.categories.iter().map(|c| c.slug.as_str()).collect();
        let mut seen = HashSet::new();

        let parents = self
            .categories
            .iter()
            .filter(|c| !c.is_root())
            .map(|c| c.parent_slug());
        let referenced = self
            .posts
            .iter()
            .flat_map(|p| p.categories.iter().map(|c| c.slug.as_str()));

        parents
            .chain(referenced)
            .filter(|slug| !declared.contains(slug) && seen.insert(*slug))
            .collect()
    }

    /// Tag slugs referenced by posts but not declared at channel level.
    pub fn unresolved_tags(&self) -> Vec<&str> {
        let declared: HashSet<&str> = self.tags.iter().map(|t| t.slug.as_str()).collect();
        let mut seen = HashSet::new();

        self.posts
            .iter()
            .flat_map(|p| p.tags.iter().map(|t| t.slug.as_str()))
            .filter(|slug| !declared.contains(slug) && seen.insert(*slug))
            .collect()
    }
}
