//! Export service
//!
//! Runs one export: validates and assembles the document with the
//! configured options, then shapes it for the chosen delivery mode.

use std::io::Write;

use crate::config::Config;
use crate::delivery::{DeliveryMode, ExportResponse};
use crate::error::ExportError;
use crate::models::ExportDocument;
use crate::wxr::{assemble_with, write_document, ExportOptions, Prolog};

/// Export service
#[derive(Debug, Clone, Default)]
pub struct ExportService {
    options: ExportOptions,
}

impl ExportService {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.export.options())
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Render the complete document as a string
    pub fn render(&self, document: &ExportDocument, prolog: Prolog) -> Result<String, ExportError> {
        assemble_with(document, prolog, &self.options)
    }

    /// Render the document into an output sink
    pub fn write_to<W: Write>(
        &self,
        document: &ExportDocument,
        prolog: Prolog,
        sink: W,
    ) -> Result<(), ExportError> {
        write_document(document, prolog, &self.options, sink)
    }

    /// Render the document for a delivery mode
    pub fn deliver(
        &self,
        document: &ExportDocument,
        mode: &DeliveryMode,
    ) -> Result<ExportResponse, ExportError> {
        tracing::debug!("Exporting {} posts for {:?}", document.posts.len(), mode);
        let body = self.render(document, mode.prolog())?;
        Ok(ExportResponse::new(mode, body))
    }
}
