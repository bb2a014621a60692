use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};

/// Attribute holding an element's dotted translation key.
pub const I18N_ATTR: &str = "data-i18n";
/// Attribute holding a language-switch control's language tag.
pub const LANG_ATTR: &str = "data-lang";

/// A single node of the page tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name, compared case-insensitively.
    pub tag: String,
    /// Attributes by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    /// Text content.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Child elements in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// The `data-i18n` key, if the element is bound.
    #[must_use]
    pub fn i18n_key(&self) -> Option<&str> {
        self.attr(I18N_ATTR)
    }

    /// The `data-lang` tag, if the element is a language-switch control.
    #[must_use]
    pub fn lang_control(&self) -> Option<&str> {
        self.attr(LANG_ATTR)
    }

    #[must_use]
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or_default().split_whitespace()
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Add or remove `class`, keeping the other classes in order.
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if self.has_class(class) == on {
            return;
        }
        let mut classes: Vec<&str> = self.classes().filter(|c| *c != class).collect();
        if on {
            classes.push(class);
        }
        let joined = classes.join(" ");
        if joined.is_empty() {
            self.attributes.remove("class");
        } else {
            self.set_attr("class", joined);
        }
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[googletest::test]
    fn toggle_class_adds_and_removes() {
        let mut button = Element::new("button").with_attr("class", "lang-btn");

        button.toggle_class("active", true);
        expect_that!(button.attr("class"), some(eq("lang-btn active")));

        button.toggle_class("active", true);
        expect_that!(button.attr("class"), some(eq("lang-btn active")));

        button.toggle_class("active", false);
        expect_that!(button.attr("class"), some(eq("lang-btn")));
    }

    #[googletest::test]
    fn toggle_class_drops_empty_attribute() {
        let mut element = Element::new("span");

        element.toggle_class("active", true);
        expect_that!(element.has_class("active"), eq(true));

        element.toggle_class("active", false);
        expect_that!(element.has_attr("class"), eq(false));
    }

    #[googletest::test]
    fn accessors_read_marker_attributes() {
        let control = Element::new("BUTTON").with_attr(LANG_ATTR, "es");
        let bound = Element::new("a").with_attr(I18N_ATTR, "nav.home");

        expect_that!(control.lang_control(), some(eq("es")));
        expect_that!(control.is_tag("button"), eq(true));
        expect_that!(control.i18n_key(), none());
        expect_that!(bound.i18n_key(), some(eq("nav.home")));
    }
}
