use super::Element;

/// Where a resolved translation is written on an element.
///
/// Chosen once per element, checking the variants in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindTarget {
    /// `<input type="submit">`: the `value` attribute is its label.
    SubmitValue,
    /// Elements with a `placeholder` attribute.
    Placeholder,
    /// `<meta>` elements with a `content` attribute.
    MetaContent,
    /// Elements with a `title` attribute (tooltip).
    Tooltip,
    /// Everything else: text content.
    Text,
}

impl BindTarget {
    #[must_use]
    pub fn of(element: &Element) -> Self {
        let is_submit = element.is_tag("input")
            && element.attr("type").is_some_and(|ty| ty.eq_ignore_ascii_case("submit"));

        if is_submit {
            Self::SubmitValue
        } else if element.has_attr("placeholder") {
            Self::Placeholder
        } else if element.is_tag("meta") && element.has_attr("content") {
            Self::MetaContent
        } else if element.has_attr("title") {
            Self::Tooltip
        } else {
            Self::Text
        }
    }

    /// Write `text` into the element's slot for this target.
    ///
    /// Writing text content replaces the element's children as well.
    pub fn write(self, element: &mut Element, text: &str) {
        match self {
            Self::SubmitValue => element.set_attr("value", text),
            Self::Placeholder => element.set_attr("placeholder", text),
            Self::MetaContent => element.set_attr("content", text),
            Self::Tooltip => element.set_attr("title", text),
            Self::Text => {
                text.clone_into(&mut element.text);
                element.children.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Element::new("input").with_attr("type", "submit"), BindTarget::SubmitValue)]
    #[case(Element::new("INPUT").with_attr("type", "Submit"), BindTarget::SubmitValue)]
    // Submit wins over placeholder
    #[case(
        Element::new("input").with_attr("type", "submit").with_attr("placeholder", ""),
        BindTarget::SubmitValue
    )]
    #[case(Element::new("input").with_attr("type", "text").with_attr("placeholder", ""), BindTarget::Placeholder)]
    #[case(Element::new("textarea").with_attr("placeholder", ""), BindTarget::Placeholder)]
    #[case(Element::new("meta").with_attr("content", ""), BindTarget::MetaContent)]
    // A meta without content falls through
    #[case(Element::new("meta").with_attr("name", "description"), BindTarget::Text)]
    #[case(Element::new("a").with_attr("title", ""), BindTarget::Tooltip)]
    // Placeholder wins over title
    #[case(Element::new("input").with_attr("placeholder", "").with_attr("title", ""), BindTarget::Placeholder)]
    #[case(Element::new("span"), BindTarget::Text)]
    #[case(Element::new("input").with_attr("type", "text"), BindTarget::Text)]
    fn bind_target_priority(#[case] element: Element, #[case] expected: BindTarget) {
        assert_eq!(BindTarget::of(&element), expected);
    }

    #[rstest]
    #[case(BindTarget::SubmitValue, Element::new("input").with_attr("type", "submit"), "value")]
    #[case(BindTarget::Placeholder, Element::new("input").with_attr("placeholder", "old"), "placeholder")]
    #[case(BindTarget::MetaContent, Element::new("meta").with_attr("content", "old"), "content")]
    #[case(BindTarget::Tooltip, Element::new("a").with_attr("title", "old"), "title")]
    fn write_sets_attribute(
        #[case] target: BindTarget,
        #[case] mut element: Element,
        #[case] attribute: &str,
    ) {
        target.write(&mut element, "new");

        assert_that!(element.attr(attribute), some(eq("new")));
    }

    #[googletest::test]
    fn write_text_replaces_children() {
        let mut element = Element::new("a")
            .with_text("Home")
            .with_child(Element::new("span").with_text("old child"));

        BindTarget::Text.write(&mut element, "Inicio");

        expect_that!(element.text, eq("Inicio"));
        expect_that!(element.children, is_empty());
    }

    #[googletest::test]
    fn write_leaves_text_alone_for_attribute_targets() {
        let mut element = Element::new("a").with_attr("title", "old").with_text("GitHub");

        BindTarget::Tooltip.write(&mut element, "Perfil de GitHub");

        expect_that!(element.text, eq("GitHub"));
        expect_that!(element.attr("title"), some(eq("Perfil de GitHub")));
    }
}
