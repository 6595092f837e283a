//! Export settings model
//!
//! Feed-level metadata rendered into the `<channel>` header.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Feed-level settings for one export.
///
/// Every field defaults to empty so partially populated records from the
/// data source still deserialize; empty values render as empty elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Feed title
    pub title: String,
    /// Feed link (usually the blog front page)
    pub link: String,
    /// Feed description
    pub description: String,
    /// Publication date, passed through verbatim
    pub pub_date: String,
    /// Generator string
    pub generator: String,
    /// Language code (e.g. `en`)
    pub language: String,
    /// Base URL, rendered as both base site URL and base blog URL
    pub base_url: String,
    /// Blog author
    pub author: String,
    /// Extra namespace declarations, prefix -> URL
    pub namespaces: BTreeMap<String, String>,
}

impl ExportSettings {
    /// Create settings with a title and link; everything else empty.
    pub fn new(title: String, link: String) -> Self {
        Self {
            title,
            link,
            ..Default::default()
        }
    }

    /// Add an extra namespace declaration
    pub fn with_namespace(mut self, prefix: String, url: String) -> Self {
        self.namespaces.insert(prefix, url);
        self
    }
}
