//! Tag rendering

use super::xml::Fragment;
use super::TaxonomyShape;
use crate::models::Tag;

/// Render tags in the given shape, preserving input order.
///
/// An empty set yields an empty fragment in either shape.
pub fn render_tags(tags: &[Tag], shape: TaxonomyShape) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let mut out = Fragment::new(shape.depth());
    for tag in tags {
        match shape {
            TaxonomyShape::Item => {
                out.cdata("category", &[("domain", "tag")], &tag.name).cdata(
                    "category",
                    &[("domain", "tag"), ("nicename", tag.slug.as_str())],
                    &tag.name,
                );
            }
            TaxonomyShape::Channel => {
                out.open("wp:tag")
                    .text("wp:tag_slug", &tag.slug)
                    .cdata("wp:tag_name", &[], &tag.name)
                    .close("wp:tag");
            }
        }
    }
    out.into_string()
}
