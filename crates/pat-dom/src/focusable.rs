//! Focusability
//!
//! Which elements accept native focus, and which of those take part
//! in sequential (Tab) navigation.

use crate::ElementData;

/// Parsed `tabindex` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    /// Negative value: focusable by script, skipped by Tab
    Programmatic(i32),
    /// Zero or positive: reachable by Tab
    Sequential(i32),
}

impl TabIndex {
    /// Parse an attribute value. Non-numeric values are ignored, as
    /// browsers do.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().parse::<i32>() {
            Ok(n) if n < 0 => Some(Self::Programmatic(n)),
            Ok(n) => Some(Self::Sequential(n)),
            Err(_) => None,
        }
    }

    pub fn is_sequential(&self) -> bool {
        matches!(self, Self::Sequential(_))
    }
}

const FORM_CONTROLS: &[&str] = &["input", "select", "textarea", "button"];

impl ElementData {
    /// Form control carrying the `disabled` attribute
    pub fn is_disabled_control(&self) -> bool {
        FORM_CONTROLS.contains(&self.tag.as_str()) && self.has_attr("disabled")
    }

    fn is_hidden_input(&self) -> bool {
        self.tag == "input"
            && self
                .get_attr("type")
                .is_some_and(|t| t.trim().eq_ignore_ascii_case("hidden"))
    }

    fn is_natively_focusable(&self) -> bool {
        match self.tag.as_str() {
            "input" | "select" | "textarea" | "button" => true,
            "a" | "area" => self.has_attr("href"),
            _ => false,
        }
    }

    /// Element accepts native focus: a form control, a link, or
    /// anything with an explicit `tabindex`
    pub fn is_focusable(&self) -> bool {
        if self.is_hidden_input() || self.is_disabled_control() {
            return false;
        }
        self.is_natively_focusable() || self.tab_index().is_some()
    }

    /// Element is reached by sequential Tab navigation
    pub fn is_tabbable(&self) -> bool {
        self.is_focusable() && self.tab_index().is_none_or(|t| t.is_sequential())
    }

    /// Element receives typed characters when focused
    pub fn is_text_field(&self) -> bool {
        match self.tag.as_str() {
            "textarea" => !self.is_disabled_control(),
            "input" => {
                let kind = self.get_attr("type").unwrap_or("text").trim().to_ascii_lowercase();
                matches!(
                    kind.as_str(),
                    "text" | "search" | "email" | "url" | "tel" | "password" | "number" | ""
                ) && !self.is_disabled_control()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(tag: &str, attrs: &[(&str, &str)]) -> ElementData {
        let mut el = ElementData::new(tag);
        for (name, value) in attrs {
            el.set_attr(name, value);
        }
        el
    }

    #[test]
    fn test_tab_index() {
        assert_eq!(TabIndex::parse("-1"), Some(TabIndex::Programmatic(-1)));
        assert_eq!(TabIndex::parse(" 0 "), Some(TabIndex::Sequential(0)));
        assert_eq!(TabIndex::parse("5"), Some(TabIndex::Sequential(5)));
        assert_eq!(TabIndex::parse("abc"), None);
        assert!(!TabIndex::Programmatic(-1).is_sequential());
    }

    #[test]
    fn test_form_controls_focusable() {
        assert!(element("input", &[("type", "text")]).is_focusable());
        assert!(element("input", &[("type", "submit")]).is_focusable());
        assert!(element("button", &[]).is_focusable());
        assert!(element("select", &[]).is_focusable());
        assert!(element("textarea", &[]).is_focusable());
        assert!(!element("input", &[("type", "hidden")]).is_focusable());
        assert!(!element("input", &[("disabled", "")]).is_focusable());
    }

    #[test]
    fn test_links_and_tabindex() {
        assert!(element("a", &[("href", "#")]).is_focusable());
        assert!(!element("a", &[]).is_focusable());
        assert!(!element("div", &[]).is_focusable());
        assert!(element("div", &[("tabindex", "0")]).is_tabbable());

        let scripted = element("div", &[("tabindex", "-1")]);
        assert!(scripted.is_focusable());
        assert!(!scripted.is_tabbable());
    }

    #[test]
    fn test_text_fields() {
        assert!(element("input", &[]).is_text_field());
        assert!(element("input", &[("type", "TEXT")]).is_text_field());
        assert!(element("textarea", &[]).is_text_field());
        assert!(!element("input", &[("type", "submit")]).is_text_field());
        assert!(!element("button", &[]).is_text_field());
    }
}
