//! Delivery payloads
//!
//! The host decides how an export leaves the process:
//! - Debug: plain-text echo of the document body, no XML declaration
//! - Attachment: `text/xml` download with a filename, body prefixed with the
//!   XML declaration
//!
//! This module only describes the response; transmitting it is the host's job.

use chrono::NaiveDate;

use crate::config::DeliveryConfig;
use crate::wxr::Prolog;

pub const DEBUG_CONTENT_TYPE: &str = "text/plain";
pub const ATTACHMENT_CONTENT_TYPE: &str = "text/xml; charset=UTF-8";

/// How the finished document is delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryMode {
    Debug,
    Attachment { filename: String },
}

impl DeliveryMode {
    /// Pick the mode from configuration; attachments without a configured
    /// filename are named after `today`.
    pub fn from_config(config: &DeliveryConfig, today: NaiveDate) -> Self {
        if config.debug {
            return Self::Debug;
        }
        let filename = config
            .filename
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| default_filename(today));
        Self::Attachment { filename }
    }

    /// Whether the body carries the XML declaration
    pub fn prolog(&self) -> Prolog {
        match self {
            Self::Debug => Prolog::Omit,
            Self::Attachment { .. } => Prolog::Declaration,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Debug => DEBUG_CONTENT_TYPE,
            Self::Attachment { .. } => ATTACHMENT_CONTENT_TYPE,
        }
    }
}

/// Default download name: `wxr-YYYY-MM-DD.xml`
pub fn default_filename(date: NaiveDate) -> String {
    format!("wxr-{}.xml", date.format("%Y-%m-%d"))
}

/// A rendered export ready to hand to the host's transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResponse {
    pub content_type: &'static str,
    /// `Content-Description`, set for attachments
    pub content_description: Option<&'static str>,
    /// `Content-Disposition`, set for attachments
    pub content_disposition: Option<String>,
    pub body: String,
}

impl ExportResponse {
    pub fn new(mode: &DeliveryMode, body: String) -> Self {
        match mode {
            DeliveryMode::Debug => Self {
                content_type: DEBUG_CONTENT_TYPE,
                content_description: None,
                content_disposition: None,
                body,
            },
            DeliveryMode::Attachment { filename } => Self {
                content_type: ATTACHMENT_CONTENT_TYPE,
                content_description: Some("File Transfer"),
                content_disposition: Some(format!(
                    "attachment; filename=\"{}\"",
                    sanitize_filename(filename)
                )),
                body,
            },
        }
    }

    /// Header name/value pairs in the order they should be sent
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::with_capacity(3);
        if let Some(description) = self.content_description {
            headers.push(("Content-Description", description.to_string()));
        }
        if let Some(disposition) = &self.content_disposition {
            headers.push(("Content-Disposition", disposition.clone()));
        }
        headers.push(("Content-Type", self.content_type.to_string()));
        headers
    }
}

/// Strip characters that would break a quoted header parameter
fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, '"' | '\\'))
        .collect()
}
