//! Document assembly
//!
//! Validates an [`ExportDocument`] and sequences the builders into a
//! [`WxrWriter`]:
//!
//! ```text
//! <?xml ...?>            (Prolog::Declaration only)
//! <rss ...>
//! <channel>  header, wp:category*, wp:tag*
//!     <item>*
//! </channel>
//! </rss>
//! ```

use std::collections::HashSet;
use std::io::Write;

use super::category::render_categories;
use super::channel::{render_channel_header, render_rss_open, validate_namespaces};
use super::item::{render_item, ItemContext};
use super::tag::render_tags;
use super::writer::{Section, WxrWriter};
use super::TaxonomyShape;
use crate::error::ExportError;
use crate::models::ExportDocument;

/// XML declaration prepended to attachment downloads
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Value of `<wp:wxr_version>` unless configured otherwise
pub const DEFAULT_WXR_VERSION: &str = "1.0";

/// Whether the XML declaration line leads the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prolog {
    Declaration,
    /// Debug echo: body only
    Omit,
}

/// Rendering options that are not part of the content model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub wxr_version: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            wxr_version: DEFAULT_WXR_VERSION.to_string(),
        }
    }
}

/// Reject contract violations before any text is produced.
///
/// Posts need a guid and a slug; categories and tags need a slug, both at
/// channel level and where a post references them. Unresolved references
/// are logged, not rejected.
pub fn validate(document: &ExportDocument) -> Result<(), ExportError> {
    validate_namespaces(&document.settings.namespaces)?;

    for category in &document.categories {
        if category.slug.trim().is_empty() {
            return Err(ExportError::missing("category", "slug", format!("'{}'", category.name)));
        }
    }
    for tag in &document.tags {
        if tag.slug.trim().is_empty() {
            return Err(ExportError::missing("tag", "slug", format!("'{}'", tag.name)));
        }
    }

    for (index, post) in document.posts.iter().enumerate() {
        let context = || format!("#{} '{}'", index, post.title);
        if post.guid.trim().is_empty() {
            return Err(ExportError::missing("post", "guid", context()));
        }
        if post.slug.trim().is_empty() {
            return Err(ExportError::missing("post", "slug", context()));
        }
        if let Some(category) = post.categories.iter().find(|c| c.slug.trim().is_empty()) {
            return Err(ExportError::missing(
                "category",
                "slug",
                format!("'{}' on post {}", category.name, context()),
            ));
        }
        if let Some(tag) = post.tags.iter().find(|t| t.slug.trim().is_empty()) {
            return Err(ExportError::missing(
                "tag",
                "slug",
                format!("'{}' on post {}", tag.name, context()),
            ));
        }
    }

    log_unresolved(document);
    Ok(())
}

fn log_unresolved(document: &ExportDocument) {
    for slug in document.unresolved_categories() {
        tracing::warn!("Category '{}' is referenced but not declared at channel level", slug);
    }
    for slug in document.unresolved_tags() {
        tracing::warn!("Tag '{}' is referenced but not declared at channel level", slug);
    }
    for post in &document.posts {
        let ids: HashSet<u64> = post.comments.iter().map(|c| c.id).collect();
        for comment in post.comments.iter().filter(|c| !c.is_top_level()) {
            let parent = comment.parent_id();
            if !ids.contains(&parent) {
                tracing::warn!(
                    "Comment {} on '{}' replies to unknown comment {}",
                    comment.id,
                    post.slug,
                    parent
                );
            }
        }
    }
}

/// Assemble a complete document with default options.
pub fn assemble(document: &ExportDocument, prolog: Prolog) -> Result<String, ExportError> {
    assemble_with(document, prolog, &ExportOptions::default())
}

/// Assemble a complete document.
pub fn assemble_with(
    document: &ExportDocument,
    prolog: Prolog,
    options: &ExportOptions,
) -> Result<String, ExportError> {
    validate(document)?;

    let settings = &document.settings;
    let mut writer = WxrWriter::with_capacity(estimate_size(document));

    if prolog == Prolog::Declaration {
        writer.append(Section::Declaration, XML_DECLARATION)?;
    }
    writer.append(Section::RssOpen, &render_rss_open(settings))?;
    writer.append(
        Section::Channel,
        &render_channel_header(settings, &options.wxr_version),
    )?;

    if !document.categories.is_empty() {
        writer.append(
            Section::ChannelCategories,
            &render_categories(&document.categories, TaxonomyShape::Channel),
        )?;
    }
    if !document.tags.is_empty() {
        writer.append(
            Section::ChannelTags,
            &render_tags(&document.tags, TaxonomyShape::Channel),
        )?;
    }

    let context = ItemContext::for_document(document);
    for post in &document.posts {
        writer.append(Section::Items, &render_item(post, context))?;
    }

    writer.append(Section::Closed, "</channel>\n</rss>\n")?;

    let items = writer.item_count();
    let xml = writer.finish()?;
    tracing::info!(
        "WXR document assembled: {} items, {} categories, {} tags, {} bytes",
        items,
        document.categories.len(),
        document.tags.len(),
        xml.len()
    );
    Ok(xml)
}

/// Assemble a document and write it to `sink`.
///
/// Nothing is written unless assembly succeeds.
pub fn write_document<W: Write>(
    document: &ExportDocument,
    prolog: Prolog,
    options: &ExportOptions,
    mut sink: W,
) -> Result<(), ExportError> {
    let xml = assemble_with(document, prolog, options)?;
    sink.write_all(xml.as_bytes())?;
    sink.flush()?;
    Ok(())
}

fn estimate_size(document: &ExportDocument) -> usize {
    let content: usize = document
        .posts
        .iter()
        .map(|p| p.content.len() + p.comments.iter().map(|c| c.content.len() + 512).sum::<usize>() + 1024)
        .sum();
    2048 + (document.categories.len() + document.tags.len()) * 160 + content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Comment, ExportSettings, Post, Tag};

    fn settings() -> ExportSettings {
        let mut settings = ExportSettings::new("My Blog".to_string(), "http://x.test".to_string());
        settings.base_url = "http://x.test".to_string();
        settings
    }

    fn post(n: u32) -> Post {
        Post::new(format!("Post {}", n), format!("http://x.test/{}", n), format!("post-{}", n))
    }

    #[test]
    fn test_prolog_declaration_and_omit() {
        let doc = ExportDocument::new(settings());

        let with = assemble(&doc, Prolog::Declaration).unwrap();
        let without = assemble(&doc, Prolog::Omit).unwrap();

        assert!(with.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rss version=\"2.0\""));
        assert!(without.starts_with("<rss version=\"2.0\""));
        assert!(!without.contains("<?xml"));
        assert_eq!(&with[XML_DECLARATION.len()..], without);
    }

    #[test]
    fn test_empty_document_closes_channel_and_root() {
        let xml = assemble(&ExportDocument::new(settings()), Prolog::Omit).unwrap();

        assert!(xml.ends_with("</channel>\n</rss>\n"));
        assert!(!xml.contains("<item>"));
        assert!(!xml.contains("<wp:category>"));
        assert!(!xml.contains("<wp:tag>"));
    }

    #[test]
    fn test_section_order() {
        let doc = ExportDocument::new(settings())
            .with_categories(vec![Category::new("news".to_string(), "News".to_string(), None)])
            .with_tags(vec![Tag::new("rust".to_string(), "Rust".to_string())])
            .with_posts(vec![post(1), post(2)]);

        let xml = assemble(&doc, Prolog::Declaration).unwrap();

        let positions = [
            xml.find("<?xml").unwrap(),
            xml.find("<rss").unwrap(),
            xml.find("<channel>").unwrap(),
            xml.find("<dc:creator>").unwrap(),
            xml.find("<wp:category>").unwrap(),
            xml.find("<wp:tag>").unwrap(),
            xml.find("<item>").unwrap(),
            xml.find("</channel>").unwrap(),
            xml.find("</rss>").unwrap(),
        ];
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_custom_wxr_version() {
        let options = ExportOptions {
            wxr_version: "1.1".to_string(),
        };
        let xml = assemble_with(&ExportDocument::new(settings()), Prolog::Omit, &options).unwrap();

        assert!(xml.contains("<wp:wxr_version>1.1</wp:wxr_version>"));
    }

    #[test]
    fn test_missing_guid_rejected() {
        let mut bad = post(2);
        bad.guid = "  ".to_string();
        let doc = ExportDocument::new(settings()).with_posts(vec![post(1), bad]);

        let err = assemble(&doc, Prolog::Omit).unwrap_err();
        assert!(matches!(
            err,
            ExportError::MissingField {
                entity: "post",
                field: "guid",
                ..
            }
        ));
        assert!(err.to_string().contains("#1 'Post 2'"));
    }

    #[test]
    fn test_missing_slugs_rejected() {
        let mut no_slug = post(1);
        no_slug.slug = String::new();
        let doc = ExportDocument::new(settings()).with_posts(vec![no_slug]);
        assert!(matches!(
            validate(&doc),
            Err(ExportError::MissingField { entity: "post", field: "slug", .. })
        ));

        let doc = ExportDocument::new(settings())
            .with_categories(vec![Category::new(String::new(), "Nameless".to_string(), None)]);
        assert!(matches!(
            validate(&doc),
            Err(ExportError::MissingField { entity: "category", .. })
        ));

        let doc = ExportDocument::new(settings())
            .with_posts(vec![post(1).with_tags(vec![Tag::new(String::new(), "T".to_string())])]);
        assert!(matches!(
            validate(&doc),
            Err(ExportError::MissingField { entity: "tag", .. })
        ));
    }

    #[test]
    fn test_invalid_namespace_rejected() {
        let doc = ExportDocument::new(
            settings().with_namespace("wp".to_string(), "http://evil.test/".to_string()),
        );

        assert!(matches!(
            assemble(&doc, Prolog::Omit),
            Err(ExportError::InvalidNamespace { .. })
        ));
    }

    #[test]
    fn test_unresolved_references_are_not_errors() {
        let doc = ExportDocument::new(settings()).with_posts(vec![post(1)
            .with_categories(vec![Category::new("ghost".to_string(), "Ghost".to_string(), None)])
            .with_comments(vec![Comment::new(5, "A".to_string(), "x".to_string()).with_parent(99)])]);

        let xml = assemble(&doc, Prolog::Omit).unwrap();
        assert!(xml.contains("nicename=\"ghost\""));
        assert!(xml.contains("<wp:comment_parent>99</wp:comment_parent>"));
    }

    #[test]
    fn test_long_reply_chain_validates() {
        let comments: Vec<Comment> = (1..=5000u64)
            .map(|id| {
                let comment = Comment::new(id, "A".to_string(), "x".to_string());
                if id == 1 {
                    comment
                } else {
                    comment.with_parent(id - 1)
                }
            })
            .collect();
        let doc = ExportDocument::new(settings()).with_posts(vec![post(1).with_comments(comments)]);

        assert!(validate(&doc).is_ok());
        let xml = assemble(&doc, Prolog::Omit).unwrap();
        assert_eq!(xml.matches("<wp:comment>").count(), 5000);
        assert!(xml.contains("<wp:comment_parent>4999</wp:comment_parent>"));
    }

    #[test]
    fn test_write_document_to_sink() {
        let doc = ExportDocument::new(settings()).with_posts(vec![post(1)]);
        let mut sink = Vec::new();

        write_document(&doc, Prolog::Declaration, &ExportOptions::default(), &mut sink).unwrap();

        let written = String::from_utf8(sink).unwrap();
        assert_eq!(written, assemble(&doc, Prolog::Declaration).unwrap());
    }

    #[test]
    fn test_write_document_failure_writes_nothing() {
        let mut bad = post(1);
        bad.guid = String::new();
        let doc = ExportDocument::new(settings()).with_posts(vec![bad]);
        let mut sink = Vec::new();

        assert!(write_document(&doc, Prolog::Omit, &ExportOptions::default(), &mut sink).is_err());
        assert!(sink.is_empty());
    }
}
