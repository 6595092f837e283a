//! Export error types

use thiserror::Error;

use crate::wxr::Section;

/// Errors raised while assembling a WXR document.
///
/// Missing optional data never fails; only violated contracts do, and they
/// are detected before any text is emitted.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A required identifier is empty
    #[error("{entity} {context} is missing required field '{field}'")]
    MissingField {
        entity: &'static str,
        field: &'static str,
        context: String,
    },

    /// An extra namespace declaration cannot be emitted
    #[error("Invalid namespace prefix '{prefix}': {reason}")]
    InvalidNamespace { prefix: String, reason: &'static str },

    /// A section was appended after a later one, or before its prerequisite
    #[error("Section {requested:?} cannot follow {current:?}")]
    OutOfOrder { current: Section, requested: Section },

    /// The document was finished before the root element was closed
    #[error("Document is unfinished: last section was {section:?}")]
    Unfinished { section: Section },

    /// Output sink failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    pub(crate) fn missing(entity: &'static str, field: &'static str, context: impl Into<String>) -> Self {
        Self::MissingField {
            entity,
            field,
            context: context.into(),
        }
    }
}
