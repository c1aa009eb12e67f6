//! Balanced element stream on top of quick-xml.
//!
//! Every element opened on an [`ElementStream`] is pushed onto a frame stack
//! and must be closed by name. The document is buffered in memory and only
//! released by [`ElementStream::finish`] once the stack is empty, so a failed
//! or unbalanced document never reaches the caller's sink.

use crate::error::{Result, SerializationError};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// Formatting options for generated documents.
///
/// Options change whitespace and the XML declaration only, never element
/// order or content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriterOptions {
    /// Indent nested elements by this many spaces. `None` writes a compact
    /// document.
    pub indent: Option<usize>,

    /// Start the document with `<?xml version="1.0" encoding="UTF-8"?>`.
    pub xml_declaration: bool,
}

impl WriterOptions {
    /// Indented by four spaces with an XML declaration.
    pub fn pretty() -> Self {
        Self {
            indent: Some(4),
            xml_declaration: true,
        }
    }
}

/// In-memory XML event stream that tracks open elements.
pub struct ElementStream {
    writer: Writer<Vec<u8>>,
    open: Vec<String>,
}

impl ElementStream {
    /// Creates a stream, writing the XML declaration if requested.
    pub fn new(options: &WriterOptions) -> Result<Self> {
        let writer = match options.indent {
            Some(width) => Writer::new_with_indent(Vec::new(), b' ', width),
            None => Writer::new(Vec::new()),
        };
        let mut stream = Self {
            writer,
            open: Vec::new(),
        };

        if options.xml_declaration {
            stream
                .writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }

        Ok(stream)
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Opens an element.
    pub fn start(&mut self, name: &str) -> Result<()> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))?;
        self.open.push(name.to_string());
        Ok(())
    }

    /// Closes the innermost open element, which must be `name`.
    pub fn end(&mut self, name: &str) -> Result<()> {
        match self.open.last() {
            Some(innermost) if innermost == name => {}
            innermost => {
                return Err(SerializationError::Unbalanced {
                    expected: innermost.cloned(),
                    found: name.to_string(),
                });
            }
        }

        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        self.open.pop();
        Ok(())
    }

    /// Writes `name` with the children produced by `children`, closing it in
    /// the same scope it was opened.
    pub fn element<F>(&mut self, name: &str, children: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.start(name)?;
        children(self)?;
        self.end(name)
    }

    /// Writes `<name>text</name>`. Empty text still produces an explicit
    /// start and end tag.
    pub fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.start(name)?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    /// Writes `<name/>`, an element without any text node.
    pub fn empty_element(&mut self, name: &str) -> Result<()> {
        self.writer
            .write_event(Event::Empty(BytesStart::new(name)))?;
        Ok(())
    }

    /// Returns the finished document.
    ///
    /// Fails if any element is still open.
    pub fn finish(self) -> Result<Vec<u8>> {
        if !self.open.is_empty() {
            return Err(SerializationError::Unclosed(self.open));
        }
        Ok(self.writer.into_inner())
    }
}
