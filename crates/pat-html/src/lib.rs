//! Plus-as-Tab HTML
//!
//! Builds `pat-dom` documents from HTML markup using html5ever, both
//! whole documents and fragments appended under an existing node.

mod parser;

pub use parser::HtmlParser;
pub use pat_dom::{Document, NodeId};

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Result<Document, HtmlError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("Failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to build DOM: {0}")]
    Dom(#[from] pat_dom::DomError),
}
