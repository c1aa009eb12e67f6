//! Shared helpers for XML documentation tests.
//!
//! Generated documents are parsed back into a small element tree so tests can
//! assert on structure rather than raw strings.

#![allow(dead_code)]

use quick_xml::Reader;
use quick_xml::events::Event;

/// A parsed XML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    /// `None` for a self-closing element, `Some("")` for `<a></a>`.
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    fn new(name: String) -> Self {
        Self {
            name,
            text: None,
            children: Vec::new(),
        }
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Follows a `/`-separated path of child names, taking the first match at
    /// each step.
    pub fn find(&self, path: &str) -> Option<&Node> {
        path.split('/')
            .try_fold(self, |node, name| node.child(name))
    }

    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.name.as_str()).collect()
    }

    /// Text of each child, in document order.
    pub fn child_texts(&self) -> Vec<&str> {
        self.children
            .iter()
            .map(|c| c.text.as_deref().unwrap_or_default())
            .collect()
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Finds the `property` element whose `name` child has the given text.
    pub fn property(&self, name: &str) -> Option<&Node> {
        self.child("properties")?
            .children
            .iter()
            .find(|p| p.child("name").map(Node::text) == Some(name))
    }
}

/// Parses a document into its root element.
pub fn parse(xml: &str) -> Node {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Node> = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event().expect("well-formed XML") {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                stack.push(Node::new(name));
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                attach(&mut stack, &mut root, Node::new(name));
            }
            Event::Text(t) => {
                // Indentation between elements.
                let bytes: &[u8] = t.as_ref();
                if bytes.contains(&b'\n') && bytes.iter().all(|b| b.is_ascii_whitespace()) {
                    continue;
                }
                let text = String::from_utf8_lossy(t.as_ref()).to_string();
                append_text(&mut stack, &text);
            }
            Event::GeneralRef(r) => {
                let entity: &[u8] = &r;
                let text = match entity {
                    b"amp" => "&",
                    b"lt" => "<",
                    b"gt" => ">",
                    b"quot" => "\"",
                    b"apos" => "'",
                    other => panic!("unexpected entity {:?}", String::from_utf8_lossy(other)),
                };
                append_text(&mut stack, text);
            }
            Event::End(_) => {
                let mut node = stack.pop().expect("balanced end tag");
                if node.text.is_none() && node.children.is_empty() {
                    node.text = Some(String::new());
                }
                attach(&mut stack, &mut root, node);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    assert!(stack.is_empty(), "unclosed elements: {:?}", stack);
    root.expect("document has a root element")
}

fn append_text(stack: &mut [Node], text: &str) {
    let node = stack.last_mut().expect("text inside an element");
    node.text.get_or_insert_with(String::new).push_str(text);
}

fn attach(stack: &mut [Node], root: &mut Option<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            assert!(root.is_none(), "document has more than one root");
            *root = Some(node);
        }
    }
}
