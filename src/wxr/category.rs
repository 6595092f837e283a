//! Category rendering

use super::xml::Fragment;
use super::TaxonomyShape;
use crate::models::Category;

/// Render categories in the given shape, preserving input order.
///
/// Item shape emits two `<category>` elements per category: the bare RSS
/// form and the `domain="category"` form carrying the nicename. Channel
/// shape emits one `<wp:category>` declaration per category.
pub fn render_categories(categories: &[Category], shape: TaxonomyShape) -> String {
    if categories.is_empty() {
        return String::new();
    }

    let mut out = Fragment::new(shape.depth());
    for category in categories {
        match shape {
            TaxonomyShape::Item => {
                out.cdata("category", &[], &category.name).cdata(
                    "category",
                    &[("domain", "category"), ("nicename", category.slug.as_str())],
                    &category.name,
                );
            }
            TaxonomyShape::Channel => {
                out.open("wp:category")
                    .text("wp:category_nicename", &category.slug)
                    .text("wp:category_parent", category.parent_slug())
                    .cdata("wp:cat_name", &[], &category.name)
                    .close("wp:category");
            }
        }
    }
    out.into_string()
}
