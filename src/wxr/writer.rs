//! Section-tracking document buffer
//!
//! WXR consumers rely on a fixed order: declaration, root, channel header,
//! channel categories, channel tags, items, close. `WxrWriter` records the
//! section of every append and refuses to go backwards or to skip a
//! prerequisite, so the order is enforced independently of formatting.

use crate::error::ExportError;

/// Document sections in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Start,
    Declaration,
    RssOpen,
    Channel,
    ChannelCategories,
    ChannelTags,
    Items,
    Closed,
}

impl Section {
    /// Sections that may receive several appends in a row
    fn is_repeatable(self) -> bool {
        matches!(
            self,
            Section::ChannelCategories | Section::ChannelTags | Section::Items
        )
    }

    /// Earliest section the writer must have reached before entering `self`
    fn prerequisite(self) -> Section {
        match self {
            Section::Start | Section::Declaration | Section::RssOpen => Section::Start,
            Section::Channel => Section::RssOpen,
            Section::ChannelCategories
            | Section::ChannelTags
            | Section::Items
            | Section::Closed => Section::Channel,
        }
    }
}

/// Ordered-append buffer for one WXR document.
#[derive(Debug)]
pub struct WxrWriter {
    buf: String,
    section: Section,
    items: usize,
}

impl Default for WxrWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl WxrWriter {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
            section: Section::Start,
            items: 0,
        }
    }

    /// Section of the most recent append
    pub fn section(&self) -> Section {
        self.section
    }

    /// Number of items appended so far
    pub fn item_count(&self) -> usize {
        self.items
    }

    /// Append a fragment to `section`.
    pub fn append(&mut self, section: Section, fragment: &str) -> Result<(), ExportError> {
        self.enter(section)?;
        self.buf.push_str(fragment);
        if section == Section::Items {
            self.items += 1;
        }
        Ok(())
    }

    fn enter(&mut self, next: Section) -> Result<(), ExportError> {
        let backwards = next < self.section;
        let repeated = next == self.section && !next.is_repeatable();
        let skipped = self.section < next.prerequisite();

        if next == Section::Start || backwards || repeated || skipped {
            return Err(ExportError::OutOfOrder {
                current: self.section,
                requested: next,
            });
        }

        if next != self.section {
            tracing::trace!("entering section {:?}", next);
        }
        self.section = next;
        Ok(())
    }

    /// Return the document; the root must have been closed.
    pub fn finish(self) -> Result<String, ExportError> {
        if self.section != Section::Closed {
            return Err(ExportError::Unfinished {
                section: self.section,
            });
        }
        Ok(self.buf)
    }
}
