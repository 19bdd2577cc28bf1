//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it to the arena tree.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use pat_dom::{Document, DomTree, NodeId};

use crate::HtmlError;

/// HTML5 parser
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, HtmlError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a base URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, HtmlError> {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = read_dom(html)?;
        let mut document = Document::empty(url);
        self.convert_node(&dom.document, document.tree_mut(), NodeId::ROOT)?;
        document.finalize();

        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }

    /// Parse `html` as body content and append the resulting nodes as
    /// the last children of `parent`. Returns the top-level nodes added.
    pub fn append_fragment(
        &self,
        document: &mut Document,
        parent: NodeId,
        html: &str,
    ) -> Result<Vec<NodeId>, HtmlError> {
        let dom = read_dom(html)?;
        let Some(body) = find_element(&dom.document, "body") else {
            return Ok(Vec::new());
        };

        let mut added = Vec::new();
        for child in body.children.borrow().iter() {
            if let Some(id) = self.convert_node(child, document.tree_mut(), parent)? {
                added.push(id);
            }
        }
        tracing::trace!("Appended {} nodes under {}", added.len(), parent);
        Ok(added)
    }

    /// Convert an RcDom node, returning the arena node it became
    fn convert_node(
        &self,
        handle: &Handle,
        tree: &mut DomTree,
        parent: NodeId,
    ) -> Result<Option<NodeId>, HtmlError> {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent)?;
                }
                Ok(None)
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow();
                if text.trim().is_empty() {
                    return Ok(None);
                }
                let id = tree.create_text(&text);
                tree.append_child(parent, id)?;
                Ok(Some(id))
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents);
                tree.append_child(parent, id)?;
                Ok(Some(id))
            }
            RcNodeData::Element { name, attrs, .. } => {
                let id = tree.create_element(&name.local);
                if let Some(elem) = tree.element_mut(id) {
                    for attr in attrs.borrow().iter() {
                        elem.set_attr(&attr.name.local, &attr.value);
                    }
                }
                tree.append_child(parent, id)?;

                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, id)?;
                }
                Ok(Some(id))
            }
            // Doctype and processing instructions carry nothing focus cares about
            RcNodeData::Doctype { .. } | RcNodeData::ProcessingInstruction { .. } => Ok(None),
        }
    }
}

fn read_dom(html: &str) -> Result<RcDom, HtmlError> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())?;
    Ok(dom)
}

/// First element named `tag` below `handle`, depth first
fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if let RcNodeData::Element { name, .. } = &child.data {
            if &*name.local == tag {
                return Some(child.clone());
            }
        }
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }
    None
}
