//! RSS root and channel header

use std::collections::BTreeMap;

use super::xml::{escape_text, Fragment};
use crate::error::ExportError;
use crate::models::ExportSettings;

/// Namespaces every WXR document declares, in declaration order
pub const WXR_NAMESPACES: [(&str, &str); 4] = [
    ("content", "http://purl.org/rss/1.0/modules/content/"),
    ("wfw", "http://wellformedweb.org/CommentAPI/"),
    ("dc", "http://purl.org/dc/elements/1.1/"),
    ("wp", "http://wordpress.org/export/1.0/"),
];

/// Check extra namespace prefixes before anything is emitted.
///
/// A prefix must be an XML name without a colon, must not start with `xml`
/// and must not redeclare one of the fixed WXR prefixes.
pub fn validate_namespaces(namespaces: &BTreeMap<String, String>) -> Result<(), ExportError> {
    for prefix in namespaces.keys() {
        let invalid = |reason| ExportError::InvalidNamespace {
            prefix: prefix.clone(),
            reason,
        };

        let mut chars = prefix.chars();
        match chars.next() {
            None => return Err(invalid("prefix is empty")),
            Some(c) if !(c.is_alphabetic() || c == '_') => {
                return Err(invalid("prefix must start with a letter or underscore"))
            }
            _ => {}
        }
        if !chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.')) {
            return Err(invalid("prefix contains characters not allowed in an XML name"));
        }
        if prefix.to_lowercase().starts_with("xml") {
            return Err(invalid("prefixes starting with 'xml' are reserved"));
        }
        if WXR_NAMESPACES.iter().any(|(fixed, _)| fixed == prefix) {
            return Err(invalid("prefix collides with a built-in WXR namespace"));
        }
    }
    Ok(())
}

/// `<rss version="2.0" ...>` with the fixed and the extra namespaces.
pub fn render_rss_open(settings: &ExportSettings) -> String {
    let mut out = String::from("<rss version=\"2.0\"\n");
    for (prefix, url) in WXR_NAMESPACES {
        push_xmlns(&mut out, prefix, url);
    }
    for (prefix, url) in &settings.namespaces {
        push_xmlns(&mut out, prefix, url);
    }
    out.push_str(">\n");
    out
}

fn push_xmlns(out: &mut String, prefix: &str, url: &str) {
    out.push_str("\txmlns:");
    out.push_str(prefix);
    out.push_str("=\"");
    out.push_str(&escape_text(url));
    out.push_str("\"\n");
}

/// `<channel>` opening and the feed metadata elements.
///
/// Missing settings render as empty elements. The channel is closed by the
/// document assembler after the items.
pub fn render_channel_header(settings: &ExportSettings, wxr_version: &str) -> String {
    let mut out = Fragment::new(0);
    out.open("channel")
        .text("title", &settings.title)
        .text("link", &settings.link)
        .text("description", &settings.description)
        .text("pubDate", &settings.pub_date)
        .text("generator", &settings.generator)
        .text("language", &settings.language)
        .text("wp:wxr_version", wxr_version)
        .text("wp:base_site_url", &settings.base_url)
        .text("wp:base_blog_url", &settings.base_url)
        .text("dc:creator", &settings.author);
    out.into_string()
}
