//! Document-level tests for the WXR builders
//!
//! Output is parsed back with quick-xml to check well-formedness and that
//! escaped and CDATA-wrapped text survives unchanged.

use super::xml::{is_xml_char, strip_invalid_chars};
use super::*;
use crate::models::{Category, Comment, ExportDocument, ExportSettings, Post, Tag};
use proptest::prelude::*;
use quick_xml::events::Event;
use quick_xml::Reader;

// ============================================================================
// Helpers
// ============================================================================

/// Every character must be an XML 1.0 `Char`; quick-xml does not check this.
fn assert_xml_chars(xml: &str) {
    if let Some((offset, c)) = xml.char_indices().find(|&(_, c)| !is_xml_char(c)) {
        panic!("non-XML character {:?} at byte {}", c, offset);
    }
}

/// Parse the whole document, checking that every element is closed by a
/// matching end tag and that there is exactly one root.
fn assert_well_formed(xml: &str) {
    assert_xml_chars(xml);
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<String> = Vec::new();
    let mut roots = 0;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if stack.is_empty() {
                    roots += 1;
                }
                stack.push(String::from_utf8(e.name().as_ref().to_vec()).unwrap());
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                assert_eq!(stack.pop().as_deref(), Some(name.as_str()), "mismatched end tag");
            }
            Ok(Event::Empty(_)) if stack.is_empty() => roots += 1,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("XML parse error at {}: {}", reader.buffer_position(), e),
        }
    }

    assert!(stack.is_empty(), "unclosed elements: {:?}", stack);
    assert_eq!(roots, 1, "document must have exactly one root element");
}

/// Text content (unescaped text plus CDATA) of every `name` element.
fn texts_of(xml: &str, name: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut found = Vec::new();
    let mut current: Option<String> = None;

    loop {
        match reader.read_event().expect("well-formed XML") {
            Event::Start(e) if e.name().as_ref() == name.as_bytes() => {
                current = Some(String::new());
            }
            Event::Empty(e) if e.name().as_ref() == name.as_bytes() => {
                found.push(String::new());
            }
            Event::End(e) if e.name().as_ref() == name.as_bytes() => {
                if let Some(text) = current.take() {
                    found.push(text);
                }
            }
            Event::Text(t) => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&t.unescape().unwrap());
                }
            }
            Event::CData(c) => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&String::from_utf8(c.into_inner().into_owned()).unwrap());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    found
}

fn my_blog() -> ExportSettings {
    ExportSettings {
        title: "My Blog".to_string(),
        link: "http://x.test".to_string(),
        description: "Just a blog".to_string(),
        pub_date: "Mon, 01 Jan 2024 00:00:00 +0000".to_string(),
        generator: "wxr-export".to_string(),
        language: "en".to_string(),
        base_url: "http://x.test".to_string(),
        author: "admin".to_string(),
        ..Default::default()
    }
}

fn news() -> Category {
    Category::new("news".to_string(), "News".to_string(), None)
}

fn hello() -> Post {
    Post::new(
        "Hello".to_string(),
        "http://x.test/1".to_string(),
        "hello".to_string(),
    )
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_end_to_end_single_post_with_category() {
    let doc = ExportDocument::new(my_blog())
        .with_categories(vec![news()])
        .with_posts(vec![hello().with_categories(vec![news()])]);

    let xml = assemble(&doc, Prolog::Declaration).unwrap();
    assert_well_formed(&xml);

    assert_eq!(xml.matches("<wp:category>").count(), 1);
    assert_eq!(texts_of(&xml, "wp:cat_name"), vec!["News"]);
    assert_eq!(xml.matches("<item>").count(), 1);
    assert_eq!(xml.matches("<category><![CDATA[News]]></category>").count(), 1);
    assert_eq!(
        xml.matches("<category domain=\"category\" nicename=\"news\"><![CDATA[News]]></category>")
            .count(),
        1
    );
    assert_eq!(xml.matches("<wp:comment>").count(), 0);
    assert_eq!(xml.matches("<wp:tag>").count(), 0);
    assert_eq!(texts_of(&xml, "guid"), vec!["http://x.test/1"]);
    assert_eq!(texts_of(&xml, "title"), vec!["My Blog", "Hello"]);
}

#[test]
fn test_post_without_comments_has_no_comment_block() {
    let doc = ExportDocument::new(my_blog()).with_posts(vec![hello(), hello()]);

    let xml = assemble(&doc, Prolog::Declaration).unwrap();

    assert_well_formed(&xml);
    assert_eq!(xml.matches("<wp:comment>").count(), 0);
    assert!(texts_of(&xml, "wp:comment_id").is_empty());
    assert_eq!(texts_of(&xml, "wp:comment_status"), vec!["open", "open"]);
}

#[test]
fn test_control_characters_are_dropped() {
    let pasted = "pasted\u{0B}from word\u{0}";
    let category = Category::new("c\u{1}".to_string(), "Ne\u{8}ws".to_string(), None);
    let post = hello()
        .with_content(pasted.to_string())
        .with_categories(vec![category.clone()])
        .with_comments(vec![Comment::new(1, "A\u{FFFE}nn".to_string(), "hi\u{1B}".to_string())]);
    let doc = ExportDocument::new(my_blog())
        .with_categories(vec![category])
        .with_posts(vec![post]);

    let xml = assemble(&doc, Prolog::Declaration).unwrap();
    assert_well_formed(&xml);

    assert_eq!(texts_of(&xml, "content:encoded"), vec!["pastedfrom word"]);
    assert_eq!(texts_of(&xml, "wp:cat_name"), vec!["News"]);
    assert_eq!(texts_of(&xml, "wp:category_nicename"), vec!["c"]);
    assert_eq!(texts_of(&xml, "wp:comment_author"), vec!["Ann"]);
    assert_eq!(texts_of(&xml, "wp:comment_content"), vec!["hi"]);
    assert!(xml.contains("nicename=\"c\""));
}

#[test]
fn test_post_without_taxonomy_has_no_domain_elements() {
    let doc = ExportDocument::new(my_blog()).with_posts(vec![hello()]);

    let xml = assemble(&doc, Prolog::Omit).unwrap();

    assert_well_formed(&xml);
    assert!(!xml.contains("domain=\"category\""));
    assert!(!xml.contains("domain=\"tag\""));
    assert!(!xml.contains("<category"));
}

#[test]
fn test_two_comments_are_flat_and_ordered() {
    let comments = vec![
        Comment::new(10, "Ann".to_string(), "First!".to_string()),
        Comment::new(11, "Bob".to_string(), "Replying to Ann".to_string()).with_parent(10),
    ];
    let doc = ExportDocument::new(my_blog()).with_posts(vec![hello().with_comments(comments)]);

    let xml = assemble(&doc, Prolog::Declaration).unwrap();
    assert_well_formed(&xml);

    assert_eq!(texts_of(&xml, "wp:comment_id"), vec!["10", "11"]);
    assert_eq!(texts_of(&xml, "wp:comment_parent"), vec!["0", "10"]);
    assert_eq!(texts_of(&xml, "wp:comment_content"), vec!["First!", "Replying to Ann"]);

    // no comment is nested in another
    let mut reader = Reader::from_str(&xml);
    let mut depth = 0;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.name().as_ref() == b"wp:comment" => {
                depth += 1;
                assert_eq!(depth, 1);
            }
            Event::End(e) if e.name().as_ref() == b"wp:comment" => depth -= 1,
            Event::Eof => break,
            _ => {}
        }
    }
}

#[test]
fn test_dual_shape_uses_distinct_element_names() {
    let categories = vec![news()];
    let tags = vec![Tag::new("rust".to_string(), "Rust".to_string())];

    let item_categories = render_categories(&categories, TaxonomyShape::Item);
    let channel_categories = render_categories(&categories, TaxonomyShape::Channel);
    let item_tags = render_tags(&tags, TaxonomyShape::Item);
    let channel_tags = render_tags(&tags, TaxonomyShape::Channel);

    assert!(item_categories.contains("<category>") && !item_categories.contains("<wp:category>"));
    assert!(channel_categories.contains("<wp:category>") && !channel_categories.contains("<category"));
    assert!(item_tags.contains("<category domain=\"tag\"") && !item_tags.contains("<wp:tag>"));
    assert!(channel_tags.contains("<wp:tag>") && !channel_tags.contains("<category"));
}

#[test]
fn test_markup_in_text_survives_round_trip() {
    let tricky = "a ]]> b < c & d > e \"f\" 'g'";
    let mut settings = my_blog();
    settings.title = tricky.to_string();

    let category = Category::new("tricky".to_string(), tricky.to_string(), None);
    let tag = Tag::new("t".to_string(), tricky.to_string());
    let post = hello()
        .with_content(tricky.to_string())
        .with_categories(vec![category.clone()])
        .with_tags(vec![tag.clone()])
        .with_comments(vec![Comment::new(1, tricky.to_string(), tricky.to_string())]);
    let doc = ExportDocument::new(settings)
        .with_categories(vec![category])
        .with_tags(vec![tag])
        .with_posts(vec![post]);

    let xml = assemble(&doc, Prolog::Declaration).unwrap();
    assert_well_formed(&xml);

    assert_eq!(texts_of(&xml, "title")[0], tricky);
    assert_eq!(texts_of(&xml, "content:encoded"), vec![tricky]);
    assert_eq!(texts_of(&xml, "wp:cat_name"), vec![tricky]);
    assert_eq!(texts_of(&xml, "wp:tag_name"), vec![tricky]);
    assert_eq!(texts_of(&xml, "wp:comment_author"), vec![tricky]);
    assert_eq!(texts_of(&xml, "wp:comment_content"), vec![tricky]);
    // bare category, category domain, tag domain x2
    assert_eq!(texts_of(&xml, "category"), vec![tricky; 4]);
}

#[test]
fn test_extra_namespaces_are_declared_on_root() {
    let settings =
        my_blog().with_namespace("media".to_string(), "http://search.yahoo.com/mrss/".to_string());
    let doc = ExportDocument::new(settings).with_posts(vec![hello()]);

    let xml = assemble(&doc, Prolog::Declaration).unwrap();
    assert_well_formed(&xml);

    let root_end = xml.find(">\n<channel>").unwrap();
    let media = xml.find("xmlns:media=\"http://search.yahoo.com/mrss/\"").unwrap();
    assert!(media < root_end);
}

#[test]
fn test_debug_and_download_bodies_differ_only_in_declaration() {
    let doc = ExportDocument::new(my_blog())
        .with_categories(vec![news()])
        .with_posts(vec![hello().with_categories(vec![news()])]);

    let debug = assemble(&doc, Prolog::Omit).unwrap();
    let download = assemble(&doc, Prolog::Declaration).unwrap();

    assert_well_formed(&debug);
    assert_well_formed(&download);
    assert_eq!(download, format!("{}{}", XML_DECLARATION, debug));
}

// ============================================================================
// Property tests
// ============================================================================

/// Printable text including markup characters and CDATA terminators
fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 <>&\"'\\]\\[!?/=-]{0,40}",
        Just("]]>".to_string()),
        Just("]]]]>".to_string()),
        Just("<![CDATA[x]]>".to_string()),
    ]
}

fn post_strategy() -> impl Strategy<Value = Post> {
    (
        text_strategy(),
        text_strategy(),
        "[a-z]{1,10}",
        proptest::collection::vec(text_strategy(), 0..3),
    )
        .prop_map(|(title, content, slug, comment_bodies)| {
            let comments = comment_bodies
                .into_iter()
                .enumerate()
                .map(|(i, body)| Comment::new(i as u64 + 1, "anon".to_string(), body))
                .collect();
            Post::new(title, format!("http://x.test/{}", slug), slug)
                .with_content(content)
                .with_comments(comments)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Arbitrary text never breaks well-formedness and reads back unchanged.
    #[test]
    fn property_text_round_trips(post in post_strategy(), name in text_strategy()) {
        let category = Category::new("c".to_string(), name.clone(), None);
        let doc = ExportDocument::new(my_blog())
            .with_categories(vec![category.clone()])
            .with_posts(vec![post.clone().with_categories(vec![category])]);

        let xml = assemble(&doc, Prolog::Declaration).unwrap();
        assert_well_formed(&xml);

        prop_assert_eq!(&texts_of(&xml, "title")[1], &post.title);
        prop_assert_eq!(texts_of(&xml, "content:encoded"), vec![post.content.clone()]);
        prop_assert_eq!(texts_of(&xml, "wp:cat_name"), vec![name]);
        let bodies: Vec<String> = post.comments.iter().map(|c| c.content.clone()).collect();
        prop_assert_eq!(texts_of(&xml, "wp:comment_content"), bodies);
    }

    /// Any input string yields only XML characters; content keeps the rest.
    #[test]
    fn property_output_has_only_xml_chars(title in any::<String>(), content in any::<String>()) {
        let post = Post::new(title, "http://x.test/1".to_string(), "p".to_string())
            .with_content(content.clone());
        let doc = ExportDocument::new(my_blog()).with_posts(vec![post]);

        let xml = assemble(&doc, Prolog::Declaration).unwrap();
        assert_well_formed(&xml);

        prop_assert_eq!(
            texts_of(&xml, "content:encoded"),
            vec![strip_invalid_chars(&content).into_owned()]
        );
    }

    /// N posts produce N items, in input order, after a single channel opening.
    #[test]
    fn property_items_follow_input_order(slugs in proptest::collection::vec("[a-z]{1,8}", 0..8)) {
        let posts: Vec<Post> = slugs
            .iter()
            .enumerate()
            .map(|(i, slug)| Post::new(format!("Post {}", i), format!("g-{}", i), slug.clone()))
            .collect();
        let doc = ExportDocument::new(my_blog()).with_posts(posts);

        let xml = assemble(&doc, Prolog::Omit).unwrap();
        assert_well_formed(&xml);

        prop_assert_eq!(xml.matches("<channel>").count(), 1);
        prop_assert_eq!(xml.matches("<item>").count(), slugs.len());
        if let Some(first_item) = xml.find("<item>") {
            prop_assert!(xml.find("<channel>").unwrap() < first_item);
        }
        prop_assert_eq!(texts_of(&xml, "wp:post_name"), slugs);
        let guids: Vec<String> = (0..doc.posts.len()).map(|i| format!("g-{}", i)).collect();
        prop_assert_eq!(texts_of(&xml, "guid"), guids);
    }
}
