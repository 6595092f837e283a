//! Comment model

use serde::{Deserialize, Serialize};

/// Comment approval status
///
/// Deserializes from the names or the WXR values (`1`, `0`, `spam`) and
/// serializes as the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CommentStatus {
    Pending,
    Approved,
    Spam,
}

impl Default for CommentStatus {
    fn default() -> Self {
        Self::Approved
    }
}

impl CommentStatus {
    /// Value of `<wp:comment_approved>`
    pub fn wxr_value(&self) -> &'static str {
        match self {
            Self::Approved => "1",
            Self::Pending => "0",
            Self::Spam => "spam",
        }
    }
}

impl std::fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Spam => write!(f, "spam"),
        }
    }
}

impl std::str::FromStr for CommentStatus {
    type Err = String;

    /// Accepts both the names and the WXR values (`1`, `0`, `spam`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "0" => Ok(Self::Pending),
            "approved" | "1" => Ok(Self::Approved),
            "spam" => Ok(Self::Spam),
            _ => Err(format!("Invalid comment status: {}", s)),
        }
    }
}

impl TryFrom<String> for CommentStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CommentStatus> for String {
    fn from(status: CommentStatus) -> Self {
        status.to_string()
    }
}

/// Comment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentType {
    /// Ordinary comment
    #[default]
    Comment,
    Pingback,
    Trackback,
}

impl CommentType {
    /// Value of `<wp:comment_type>`; ordinary comments are empty.
    pub fn wxr_value(&self) -> &'static str {
        match self {
            Self::Comment => "",
            Self::Pingback => "pingback",
            Self::Trackback => "trackback",
        }
    }
}

/// Comment entity, owned by the post it belongs to.
///
/// Threading is carried by `parent` as a flat id; no tree is materialised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: u64,
    pub author: String,
    pub author_email: String,
    pub author_url: String,
    pub author_ip: String,
    /// Local creation date, passed through verbatim
    pub date: String,
    /// UTC creation date, passed through verbatim
    pub date_gmt: String,
    pub content: String,
    pub status: CommentStatus,
    #[serde(rename = "type")]
    pub kind: CommentType,
    /// Parent comment id (None for top-level comments)
    pub parent: Option<u64>,
}

impl Comment {
    pub fn new(id: u64, author: String, content: String) -> Self {
        Self {
            id,
            author,
            content,
            ..Default::default()
        }
    }

    /// Set the parent comment
    pub fn with_parent(mut self, parent: u64) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Set the approval status
    pub fn with_status(mut self, status: CommentStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the comment type
    pub fn with_kind(mut self, kind: CommentType) -> Self {
        self.kind = kind;
        self
    }

    /// Parent id as rendered, 0 for top-level comments
    pub fn parent_id(&self) -> u64 {
        self.parent.unwrap_or(0)
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id() == 0
    }
}
