//! XML text helpers
//!
//! Element text and attribute values are escaped. CDATA sections carry text
//! verbatim; an embedded `]]>` is split across two sections so parsers
//! reconstruct the original text exactly. Characters outside the XML 1.0
//! `Char` range are dropped from both.

use quick_xml::escape::escape;
use std::borrow::Cow;

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";
const CDATA_SPLIT: &str = "]]]]><![CDATA[>";

/// XML 1.0 `Char`: tab, newline, carriage return, and U+0020 upwards
/// except U+FFFE and U+FFFF. Surrogates never occur in a `str`.
pub fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Drop characters that cannot appear in an XML 1.0 document.
pub fn strip_invalid_chars(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|&c| is_xml_char(c)).collect())
    }
}

/// Escape text for element content or a quoted attribute value.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    match strip_invalid_chars(text) {
        Cow::Borrowed(clean) => escape(clean),
        Cow::Owned(clean) => Cow::Owned(escape(clean.as_str()).into_owned()),
    }
}

/// Wrap text in a CDATA section.
pub fn cdata(text: &str) -> String {
    let text = strip_invalid_chars(text);
    let mut out = String::with_capacity(text.len() + CDATA_OPEN.len() + CDATA_CLOSE.len());
    out.push_str(CDATA_OPEN);
    if text.contains(CDATA_CLOSE) {
        out.push_str(&text.replace(CDATA_CLOSE, CDATA_SPLIT));
    } else {
        out.push_str(&text);
    }
    out.push_str(CDATA_CLOSE);
    out
}

/// Line-oriented fragment builder.
///
/// Each call emits one indented line. `open` and `close` move the
/// indentation level; nesting correctness is the caller's job.
#[derive(Debug, Default)]
pub(crate) struct Fragment {
    buf: String,
    depth: usize,
}

impl Fragment {
    pub fn new(depth: usize) -> Self {
        Self {
            buf: String::new(),
            depth,
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.buf.push('\t');
        }
    }

    fn start_tag(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.buf.push('<');
        self.buf.push_str(name);
        for (key, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(key);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape_text(value));
            self.buf.push('"');
        }
        self.buf.push('>');
    }

    fn end_tag(&mut self, name: &str) {
        self.buf.push_str("</");
        self.buf.push_str(name);
        self.buf.push('>');
    }

    /// `<name>escaped text</name>`
    pub fn text(&mut self, name: &str, text: &str) -> &mut Self {
        self.indent();
        self.start_tag(name, &[]);
        self.buf.push_str(&escape_text(text));
        self.end_tag(name);
        self.buf.push('\n');
        self
    }

    /// `<name attrs...>escaped text</name>`
    pub fn text_with_attrs(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> &mut Self {
        self.indent();
        self.start_tag(name, attrs);
        self.buf.push_str(&escape_text(text));
        self.end_tag(name);
        self.buf.push('\n');
        self
    }

    /// `<name attrs...><![CDATA[text]]></name>`
    pub fn cdata(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> &mut Self {
        self.indent();
        self.start_tag(name, attrs);
        self.buf.push_str(&cdata(text));
        self.end_tag(name);
        self.buf.push('\n');
        self
    }

    pub fn open(&mut self, name: &str) -> &mut Self {
        self.indent();
        self.start_tag(name, &[]);
        self.buf.push('\n');
        self.depth += 1;
        self
    }

    pub fn close(&mut self, name: &str) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        self.end_tag(name);
        self.buf.push('\n');
        self
    }

    /// Append a pre-rendered fragment verbatim
    pub fn raw(&mut self, fragment: &str) -> &mut Self {
        self.buf.push_str(fragment);
        self
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
