//! Item rendering
//!
//! One `<item>` per post. Children appear in the order WordPress importers
//! read them: RSS fields, taxonomy references, guid, content, `wp:` post
//! fields, then the flat comment list.

use super::category::render_categories;
use super::comment::render_comments;
use super::tag::render_tags;
use super::xml::Fragment;
use super::{TaxonomyShape, ITEM_DEPTH};
use crate::models::{ExportDocument, Post};

/// Export-wide facts an item needs to decide which blocks to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemContext {
    /// Any category exists anywhere in the export
    pub categories: bool,
    /// Any tag exists anywhere in the export
    pub tags: bool,
}

impl ItemContext {
    pub fn for_document(document: &ExportDocument) -> Self {
        Self {
            categories: document.has_categories(),
            tags: document.has_tags(),
        }
    }
}

/// Render one post as an `<item>` element.
pub fn render_item(post: &Post, context: ItemContext) -> String {
    let mut out = Fragment::new(ITEM_DEPTH);
    out.open("item")
        .text("title", &post.title)
        .text("link", &post.link)
        .text("pubDate", &post.pub_date)
        .text("dc:creator", &post.author);

    if context.categories {
        out.raw(&render_categories(&post.categories, TaxonomyShape::Item));
    }
    if context.tags {
        out.raw(&render_tags(&post.tags, TaxonomyShape::Item));
    }

    out.text_with_attrs("guid", &[("isPermaLink", "false")], &post.guid)
        .text("description", "")
        .cdata("content:encoded", &[], &post.content)
        .text("wp:post_date", &post.post_date)
        .text("wp:post_date_gmt", &post.post_date_gmt)
        .text("wp:comment_status", post.comment_status())
        .text("wp:ping_status", post.ping_status())
        .text("wp:post_name", &post.slug)
        .text("wp:status", post.status.as_str())
        .text("wp:post_type", post.post_type.as_str())
        .raw(&render_comments(&post.comments))
        .close("item");

    out.into_string()
}

/// Render every post in input order.
pub fn render_items(posts: &[Post], context: ItemContext) -> String {
    posts.iter().map(|post| render_item(post, context)).collect()
}
