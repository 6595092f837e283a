//! Category model
//!
//! This module defines the Category entity exported as both a channel-level
//! taxonomy declaration and a per-post reference.

use serde::{Deserialize, Serialize};

use super::slug::slugify;

/// Category entity.
///
/// Identity is the slug (the WXR "nicename"), unique within an export.
/// The hierarchy is expressed by the parent's slug. A category read without
/// a slug takes one derived from its name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CategoryRecord")]
pub struct Category {
    /// URL-friendly slug
    pub slug: String,
    /// Category name
    pub name: String,
    /// Parent category slug (None for root categories)
    pub parent: Option<String>,
}

/// Input shape for `Category`, before slug derivation
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CategoryRecord {
    slug: String,
    name: String,
    parent: Option<String>,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        if record.slug.trim().is_empty() {
            Self::from_name(record.name, record.parent)
        } else {
            Self::new(record.slug, record.name, record.parent)
        }
    }
}

impl Category {
    /// Create a new Category with the given parameters.
    pub fn new(slug: String, name: String, parent: Option<String>) -> Self {
        Self { slug, name, parent }
    }

    /// Create a category whose slug is derived from its name.
    pub fn from_name(name: String, parent: Option<String>) -> Self {
        Self {
            slug: slugify(&name),
            name,
            parent,
        }
    }

    /// Check if this is a root category (no parent)
    pub fn is_root(&self) -> bool {
        self.parent.as_deref().map_or(true, |p| p.trim().is_empty())
    }

    /// Parent slug, or an empty string for root categories
    pub fn parent_slug(&self) -> &str {
        if self.is_root() {
            ""
        } else {
            self.parent.as_deref().map(str::trim).unwrap_or_default()
        }
    }
}
