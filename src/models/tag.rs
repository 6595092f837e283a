//! Tag model

use serde::{Deserialize, Serialize};

use super::slug::slugify;

/// Tag entity. Identity is the slug, unique within an export.
/// A tag read without a slug takes one derived from its name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TagRecord")]
pub struct Tag {
    /// URL-friendly slug
    pub slug: String,
    /// Tag name
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TagRecord {
    slug: String,
    name: String,
}

impl From<TagRecord> for Tag {
    fn from(record: TagRecord) -> Self {
        if record.slug.trim().is_empty() {
            Self::from_name(record.name)
        } else {
            Self::new(record.slug, record.name)
        }
    }
}

impl Tag {
    pub fn new(slug: String, name: String) -> Self {
        Self { slug, name }
    }

    /// Create a tag whose slug is derived from its name.
    pub fn from_name(name: String) -> Self {
        Self {
            slug: slugify(&name),
            name,
        }
    }
}
