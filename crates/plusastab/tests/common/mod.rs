//! Page harness shared by the integration tests
//!
//! A parsed document with an empty `#fixture` div, plus-as-tab
//! initialized on it, and helpers that speak element ids.

#![allow(dead_code)]

use plusastab::html::HtmlParser;
use plusastab::{Dispatch, Document, NavigationScope, NodeId, Options, PlusAsTab};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head><title>plus-as-tab</title></head>
    <body>
        <div id="fixture"></div>
    </body>
</html>"#;

pub struct Page {
    pub doc: Document,
    pub plus: PlusAsTab,
}

impl Page {
    /// Empty fixture page, initialized in the default (eligible) scope
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Empty fixture page navigating like a real Tab press
    pub fn tabbable() -> Self {
        Self::with_options(Options::default().with_scope(NavigationScope::Tabbable))
    }

    pub fn with_options(options: Options) -> Self {
        Self::from_html(PAGE, options)
    }

    /// Page whose markup is present before initialization
    pub fn from_html(html: &str, options: Options) -> Self {
        let doc = HtmlParser::new().parse(html).expect("fixture page parses");
        let mut plus = PlusAsTab::new(options).expect("valid options");
        plus.init(&doc);
        Self { doc, plus }
    }

    /// Append markup to the fixture, after initialization
    pub fn append(&mut self, markup: &str) -> &mut Self {
        let fixture = self.id("fixture");
        HtmlParser::new()
            .append_fragment(&mut self.doc, fixture, markup)
            .expect("fixture markup parses");
        self
    }

    pub fn id(&self, id: &str) -> NodeId {
        self.doc
            .get_element_by_id(id)
            .unwrap_or_else(|| panic!("no element #{id}"))
    }

    /// `$("#id").plusAsTab(enabled)`
    pub fn plus_as_tab(&mut self, id: &str, enabled: bool) {
        let node = self.id(id);
        self.plus.enable(node, enabled);
    }

    pub fn focus(&mut self, id: &str) {
        let node = self.id(id);
        assert!(self.doc.focus(node), "#{id} did not take focus");
        self.assert_focused(id);
    }

    pub fn focused_id(&self) -> Option<String> {
        let focused = self.doc.active_element()?;
        self.doc.element_id(focused).map(str::to_string)
    }

    pub fn assert_focused(&self, id: &str) {
        assert_eq!(self.focused_id().as_deref(), Some(id), "The id did not match for the focused element");
    }

    /// Press numpad plus on the focused element
    pub fn press(&mut self, shift: bool) -> Dispatch {
        self.plus.simulate_key_press(&mut self.doc, shift)
    }

    /// Press numpad plus and assert where focus landed
    pub fn press_expect(&mut self, shift: bool, id: &str) {
        self.press(shift);
        self.assert_focused(id);
    }

    /// Ids of the current eligibility set
    pub fn eligible_ids(&self) -> Vec<String> {
        self.plus
            .resolve(&self.doc, None)
            .iter()
            .map(|node| self.doc.element_id(node).unwrap_or("?").to_string())
            .collect()
    }

    pub fn value_of(&self, id: &str) -> String {
        let node = self.id(id);
        self.doc
            .element(node)
            .and_then(|el| el.get_attr("value"))
            .unwrap_or_default()
            .to_string()
    }
}
