//! Post model
//!
//! This module provides:
//! - `Post` entity rendered as one `<item>`
//! - `PostStatus` and `PostType`, which pass unknown values through
//!
//! A post owns its category and tag references and its comments.

use serde::{Deserialize, Serialize};

use super::{Category, Comment, Tag};

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    /// Post title
    pub title: String,
    /// Permalink
    pub link: String,
    /// Publication date (RSS `pubDate`), passed through verbatim
    pub pub_date: String,
    /// Author display name
    pub author: String,
    /// Globally unique identifier, not necessarily a permalink
    pub guid: String,
    /// Full body content
    pub content: String,
    /// Local creation date
    pub post_date: String,
    /// UTC creation date
    pub post_date_gmt: String,
    /// Whether comments are open
    pub comments_open: bool,
    /// Whether pings are open
    pub pings_open: bool,
    /// URL-friendly slug
    pub slug: String,
    /// Publication status
    pub status: PostStatus,
    /// Content type
    pub post_type: PostType,
    /// Associated categories, in order
    pub categories: Vec<Category>,
    /// Associated tags, in order
    pub tags: Vec<Tag>,
    /// Comments, in order
    pub comments: Vec<Comment>,
}

impl Default for Post {
    fn default() -> Self {
        Self {
            title: String::new(),
            link: String::new(),
            pub_date: String::new(),
            author: String::new(),
            guid: String::new(),
            content: String::new(),
            post_date: String::new(),
            post_date_gmt: String::new(),
            comments_open: true,
            pings_open: true,
            slug: String::new(),
            status: PostStatus::default(),
            post_type: PostType::default(),
            categories: Vec::new(),
            tags: Vec::new(),
            comments: Vec::new(),
        }
    }
}

impl Post {
    /// Create a new post with the given identifiers
    pub fn new(title: String, guid: String, slug: String) -> Self {
        Self {
            title,
            guid,
            slug,
            ..Default::default()
        }
    }

    /// Set the body content
    pub fn with_content(mut self, content: String) -> Self {
        self.content = content;
        self
    }

    /// Set the categories
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the comments
    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    /// Value of `<wp:comment_status>`
    pub fn comment_status(&self) -> &'static str {
        open_or_closed(self.comments_open)
    }

    /// Value of `<wp:ping_status>`
    pub fn ping_status(&self) -> &'static str {
        open_or_closed(self.pings_open)
    }
}

fn open_or_closed(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

/// Post publication status
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PostStatus {
    #[default]
    Publish,
    Draft,
    Pending,
    Private,
    Future,
    /// Any other status, passed through verbatim
    Other(String),
}

impl PostStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Publish => "publish",
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Private => "private",
            Self::Future => "future",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for PostStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "publish" | "published" => Self::Publish,
            "draft" => Self::Draft,
            "pending" => Self::Pending,
            "private" => Self::Private,
            "future" => Self::Future,
            _ => Self::Other(s),
        }
    }
}

impl From<PostStatus> for String {
    fn from(status: PostStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Post content type
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PostType {
    #[default]
    Post,
    Page,
    Attachment,
    /// Custom post type name
    Custom(String),
}

impl PostType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Post => "post",
            Self::Page => "page",
            Self::Attachment => "attachment",
            Self::Custom(s) => s,
        }
    }
}

impl From<String> for PostType {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "post" => Self::Post,
            "page" => Self::Page,
            "attachment" => Self::Attachment,
            _ => Self::Custom(s),
        }
    }
}

impl From<PostType> for String {
    fn from(post_type: PostType) -> Self {
        post_type.as_str().to_string()
    }
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
