//! In-memory page model the translation layer binds to.

/// Where translations are written on an element.
mod bind;
/// The element node type.
mod element;

pub use bind::BindTarget;
pub use element::{
    Element,
    I18N_ATTR,
    LANG_ATTR,
};
use serde::{
    Deserialize,
    Serialize,
};

/// A document: root language, title and body tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// `lang` attribute of the root element.
    #[serde(default)]
    pub lang: String,
    /// Document title.
    #[serde(default)]
    pub title: String,
    /// Top-level elements.
    #[serde(default)]
    pub body: Vec<Element>,
}

impl Page {
    #[must_use]
    pub fn new(body: Vec<Element>) -> Self {
        Self { lang: String::new(), title: String::new(), body }
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Visit every element in document order.
    pub fn for_each_element(&self, mut f: impl FnMut(&Element)) {
        fn visit(elements: &[Element], f: &mut impl FnMut(&Element)) {
            for element in elements {
                f(element);
                visit(&element.children, f);
            }
        }
        visit(&self.body, &mut f);
    }

    /// Visit every element in document order, mutably.
    pub fn for_each_element_mut(&mut self, mut f: impl FnMut(&mut Element)) {
        fn visit(elements: &mut [Element], f: &mut impl FnMut(&mut Element)) {
            for element in elements {
                f(element);
                visit(&mut element.children, f);
            }
        }
        visit(&mut self.body, &mut f);
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        fn find<'a>(elements: &'a [Element], id: &str) -> Option<&'a Element> {
            elements.iter().find_map(|element| {
                if element.id() == Some(id) { Some(element) } else { find(&element.children, id) }
            })
        }
        find(&self.body, id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        fn find<'a>(elements: &'a mut [Element], id: &str) -> Option<&'a mut Element> {
            for element in elements {
                if element.id() == Some(id) {
                    return Some(element);
                }
                if let Some(found) = find(&mut element.children, id) {
                    return Some(found);
                }
            }
            None
        }
        find(&mut self.body, id)
    }
}
