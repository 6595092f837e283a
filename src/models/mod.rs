//! Data models
//!
//! Typed entities handed to the WXR builders by the data-fetch layer:
//! - Feed-level settings (ExportSettings)
//! - Taxonomy entities (Category, Tag)
//! - Content entities (Post, Comment)
//! - The export aggregate (ExportDocument)
//!
//! All models are plain data. Builders borrow them and never mutate.

mod category;
mod comment;
mod document;
mod post;
mod settings;
mod slug;
mod tag;

pub use category::Category;
pub use comment::{Comment, CommentStatus, CommentType};
pub use document::ExportDocument;
pub use post::{Post, PostStatus, PostType};
pub use settings::ExportSettings;
pub use slug::slugify;
pub use tag::Tag;
