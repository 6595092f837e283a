//! WXR document builders
//!
//! Each builder is a pure function from borrowed models to a text fragment:
//! - `channel`: RSS root with namespaces, `<channel>` metadata
//! - `category` / `tag`: taxonomy in item or channel shape
//! - `item`: one `<item>` per post
//! - `comment`: flat `<wp:comment>` list of one post
//! - `document`: validation and ordered assembly through `WxrWriter`

pub mod category;
pub mod channel;
pub mod comment;
pub mod document;
pub mod item;
pub mod tag;
pub mod writer;
mod xml;

#[cfg(test)]
mod tests;

pub use category::render_categories;
pub use channel::{render_channel_header, render_rss_open, validate_namespaces, WXR_NAMESPACES};
pub use comment::render_comments;
pub use document::{
    assemble, assemble_with, validate, write_document, ExportOptions, Prolog, DEFAULT_WXR_VERSION,
    XML_DECLARATION,
};
pub use item::{render_item, render_items, ItemContext};
pub use tag::render_tags;
pub use writer::{Section, WxrWriter};
pub use xml::{cdata, escape_text};

/// Indentation of `<item>` inside `<channel>`
const ITEM_DEPTH: usize = 1;
/// Indentation of elements nested in an `<item>`
const ITEM_CHILD_DEPTH: usize = 2;

/// Which of the two taxonomy markups to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxonomyShape {
    /// References inside one `<item>` (`<category>` elements)
    Item,
    /// Declarations in the `<channel>` (`<wp:category>` / `<wp:tag>`)
    Channel,
}

impl TaxonomyShape {
    fn depth(self) -> usize {
        match self {
            TaxonomyShape::Item => ITEM_CHILD_DEPTH,
            TaxonomyShape::Channel => ITEM_DEPTH,
        }
    }
}
