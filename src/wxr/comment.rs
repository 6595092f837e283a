//! Comment rendering

use super::xml::Fragment;
use super::ITEM_CHILD_DEPTH;
use crate::models::Comment;

/// Render a post's comments as flat `<wp:comment>` blocks in input order.
///
/// Threading is expressed only through `wp:comment_parent`; replies are not
/// nested under their parents.
pub fn render_comments(comments: &[Comment]) -> String {
    if comments.is_empty() {
        return String::new();
    }

    let mut out = Fragment::new(ITEM_CHILD_DEPTH);
    for comment in comments {
        out.open("wp:comment")
            .text("wp:comment_id", &comment.id.to_string())
            .text("wp:comment_author", &comment.author)
            .text("wp:comment_author_email", &comment.author_email)
            .text("wp:comment_author_url", &comment.author_url)
            .text("wp:comment_author_IP", &comment.author_ip)
            .text("wp:comment_date", &comment.date)
            .text("wp:comment_date_gmt", &comment.date_gmt)
            .cdata("wp:comment_content", &[], &comment.content)
            .text("wp:comment_approved", comment.status.wxr_value())
            .text("wp:comment_type", comment.kind.wxr_value())
            .text("wp:comment_parent", &comment.parent_id().to_string())
            .close("wp:comment");
    }
    out.into_string()
}
