use std::cell::OnceCell;
use std::collections::BTreeMap;

use ahash::HashMap;

use crate::entity::escape;
use crate::names::{AttrId, ElementId};

/// Known attributes, keyed by identifier. Iteration order is unspecified.
pub type Attributes = HashMap<AttrId, String>;
/// Custom attributes, keyed by name. Iteration order is unspecified.
pub type CustomAttributes = HashMap<String, String>;

/// An HTML element: a name, attributes, and a cache of its rendered
/// opening tag.
///
/// Every mutator marks the cache dirty; compact rendering fills it again
/// the next time the element is written.
///
/// There is no public way to create or clone an `Element`, so an element
/// reached through [`Html::element_mut`](crate::Html::element_mut) keeps its
/// name and can only have its attributes changed.
#[derive(Debug)]
pub struct Element {
    pub(crate) element_id: ElementId,
    pub(crate) is_void: bool,
    pub(crate) attributes: Attributes,
    pub(crate) custom_attributes: CustomAttributes,
    open_tag: OnceCell<String>,
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.element_id == other.element_id
            && self.is_void == other.is_void
            && self.attributes == other.attributes
            && self.custom_attributes == other.custom_attributes
    }
}

impl Element {
    pub(crate) fn new(element_id: ElementId) -> Self {
        Element {
            element_id,
            is_void: element_id.is_void(),
            attributes: Attributes::default(),
            custom_attributes: CustomAttributes::default(),
            open_tag: OnceCell::new(),
        }
    }

    /// The element identifier.
    pub fn element_id(&self) -> ElementId {
        self.element_id
    }

    /// The element name, e.g. `"div"`.
    pub fn name(&self) -> &'static str {
        self.element_id.as_str()
    }

    /// Whether this element is self-closing and can't have children.
    pub fn is_void(&self) -> bool {
        self.is_void
    }

    /// The known attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The custom attributes.
    pub fn custom_attributes(&self) -> &CustomAttributes {
        &self.custom_attributes
    }

    fn mark_dirty(&mut self) {
        self.open_tag.take();
    }

    /// Get a known attribute.
    pub fn attr(&self, attr_id: AttrId) -> Option<&str> {
        self.attributes.get(&attr_id).map(|s| s.as_str())
    }

    /// Whether a known attribute is present (possibly with an empty value).
    pub fn has_attr(&self, attr_id: AttrId) -> bool {
        self.attributes.contains_key(&attr_id)
    }

    /// Set a known attribute. An empty value removes it.
    pub fn set_attr<S: Into<String>>(&mut self, attr_id: AttrId, value: S) {
        let value = value.into();
        if value.is_empty() {
            self.attributes.remove(&attr_id);
        } else {
            self.attributes.insert(attr_id, value);
        }
        self.mark_dirty();
    }

    /// Set or clear a boolean attribute such as `checked` or `selected`.
    ///
    /// A set flag is rendered with an empty value: `checked=""`.
    pub fn set_flag(&mut self, attr_id: AttrId, on: bool) {
        if on {
            self.attributes.insert(attr_id, String::new());
        } else {
            self.attributes.remove(&attr_id);
        }
        self.mark_dirty();
    }

    /// Remove a known attribute.
    pub fn remove_attr(&mut self, attr_id: AttrId) {
        self.attributes.remove(&attr_id);
        self.mark_dirty();
    }

    /// Get a custom attribute.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.custom_attributes.get(key).map(|s| s.as_str())
    }

    /// Set a custom attribute. Unlike [`Element::set_attr`] an empty value
    /// is kept.
    ///
    /// Custom attributes live apart from known ones: setting a custom
    /// `"href"` does not replace a known [`AttrId::Href`].
    pub fn set_attribute<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.custom_attributes.insert(key.into(), value.into());
        self.mark_dirty();
    }

    /// Set several custom attributes.
    pub fn set_attributes<I, K, V>(&mut self, attributes: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in attributes {
            self.custom_attributes.insert(key.into(), value.into());
        }
        self.mark_dirty();
    }

    /// Remove a custom attribute.
    pub fn remove_attribute(&mut self, key: &str) {
        self.custom_attributes.remove(key);
        self.mark_dirty();
    }

    /// Remove several custom attributes.
    pub fn remove_attributes<'a, I: IntoIterator<Item = &'a str>>(&mut self, keys: I) {
        for key in keys {
            self.custom_attributes.remove(key);
        }
        self.mark_dirty();
    }

    /// The `id` attribute, if set.
    pub fn id(&self) -> Option<&str> {
        self.attr(AttrId::Id)
    }

    /// Set the `id` attribute. An empty id removes it.
    pub fn set_id<S: Into<String>>(&mut self, id: S) {
        self.set_attr(AttrId::Id, id);
    }

    /// Set the `title` attribute. An empty title removes it.
    pub fn set_title<S: Into<String>>(&mut self, title: S) {
        self.set_attr(AttrId::Title, title);
    }

    /// The classes in the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr(AttrId::Class)
            .into_iter()
            .flat_map(|classes| classes.split_ascii_whitespace())
    }

    /// Append classes to the `class` attribute.
    pub fn add_classes<I, S>(&mut self, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let added = join_classes(classes);
        if added.is_empty() {
            return;
        }
        match self.attributes.get_mut(&AttrId::Class) {
            Some(existing) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(&added);
            }
            _ => {
                self.attributes.insert(AttrId::Class, added);
            }
        }
        self.mark_dirty();
    }

    /// Replace the `class` attribute. No classes removes the attribute.
    pub fn set_classes<I, S>(&mut self, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_attr(AttrId::Class, join_classes(classes));
    }

    /// The rendered opening tag, e.g. `<a href="x">` or `<br />`.
    ///
    /// Attributes appear in hash map order; known attributes come before
    /// custom ones.
    pub(crate) fn open_tag(&self) -> &str {
        self.open_tag.get_or_init(|| {
            tracing::trace!(element = self.name(), "rendering open tag");
            let known = self
                .attributes
                .iter()
                .map(|(attr_id, value)| (attr_id.as_str(), value.as_str()));
            let custom = self
                .custom_attributes
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str()));
            self.render_open_tag(known.chain(custom))
        })
    }

    #[cfg(test)]
    pub(crate) fn is_cached(&self) -> bool {
        self.open_tag.get().is_some()
    }

    /// The opening tag with attributes in a deterministic order.
    ///
    /// Without custom attributes, known attributes are ordered by
    /// identifier. Otherwise all attributes are ordered by name, and a
    /// custom attribute hides a known one with the same name.
    pub(crate) fn sorted_open_tag(&self) -> String {
        if self.custom_attributes.is_empty() {
            let mut sorted: Vec<_> = self.attributes.iter().collect();
            sorted.sort_unstable_by_key(|(attr_id, _)| **attr_id);
            return self.render_open_tag(
                sorted
                    .into_iter()
                    .map(|(attr_id, value)| (attr_id.as_str(), value.as_str())),
            );
        }
        let mut merged = BTreeMap::new();
        for (attr_id, value) in &self.attributes {
            merged.insert(attr_id.as_str(), value.as_str());
        }
        for (key, value) in &self.custom_attributes {
            merged.insert(key.as_str(), value.as_str());
        }
        self.render_open_tag(merged.into_iter())
    }

    fn render_open_tag<'a>(&self, attributes: impl Iterator<Item = (&'a str, &'a str)>) -> String {
        let mut s = String::with_capacity(16);
        s.push('<');
        s.push_str(self.name());
        for (key, value) in attributes {
            s.push(' ');
            s.push_str(key);
            s.push_str("=\"");
            s.push_str(&escape(value));
            s.push('"');
        }
        s.push_str(if self.is_void { " />" } else { ">" });
        s
    }

    /// Fill the open tag cache (so a clone shares it) and clone.
    pub(crate) fn copy(&self) -> Element {
        Element {
            element_id: self.element_id,
            is_void: self.is_void,
            attributes: self.attributes.clone(),
            custom_attributes: self.custom_attributes.clone(),
            open_tag: OnceCell::from(self.open_tag().to_owned()),
        }
    }
}

fn join_classes<I, S>(classes: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for class in classes {
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(class.as_ref());
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_tag_cached_until_mutation() {
        let mut element = Element::new(ElementId::Div);
        element.set_id("x");
        assert!(!element.is_cached());
        assert_eq!(element.open_tag(), r#"<div id="x">"#);
        assert!(element.is_cached());
        element.set_title("t");
        assert!(!element.is_cached());
        assert_eq!(element.sorted_open_tag(), r#"<div id="x" title="t">"#);
    }

    #[test]
    fn test_void_open_tag() {
        let mut element = Element::new(ElementId::Br);
        assert_eq!(element.open_tag(), "<br />");
        element.set_flag(AttrId::Checked, true);
        assert_eq!(element.open_tag(), r#"<br checked="" />"#);
    }

    #[test]
    fn test_classes() {
        let mut element = Element::new(ElementId::Div);
        element.add_classes(["a"]);
        element.add_classes(Vec::<&str>::new());
        element.add_classes(["b", "c"]);
        assert_eq!(element.attr(AttrId::Class), Some("a b c"));
        assert_eq!(element.classes().collect::<Vec<_>>(), ["a", "b", "c"]);
        element.set_classes(["d"]);
        assert_eq!(element.attr(AttrId::Class), Some("d"));
        element.set_classes(Vec::<String>::new());
        assert!(!element.has_attr(AttrId::Class));
    }

    #[test]
    fn test_empty_value_clears_known_attribute() {
        let mut element = Element::new(ElementId::A);
        element.set_attr(AttrId::Href, "#");
        element.set_attr(AttrId::Href, "");
        assert_eq!(element.attr(AttrId::Href), None);
    }

    #[test]
    fn test_sorted_merges_custom_attributes_by_name() {
        let mut element = Element::new(ElementId::Div);
        element.set_attr(AttrId::Title, "t");
        element.set_attributes([("data-x", "1"), ("align", "left")]);
        assert_eq!(
            element.sorted_open_tag(),
            r#"<div align="left" data-x="1" title="t">"#
        );
    }

    #[test]
    fn test_sorted_custom_shadows_known() {
        let mut element = Element::new(ElementId::A);
        element.set_attr(AttrId::Href, "known");
        element.set_attribute("href", "custom");
        assert_eq!(element.sorted_open_tag(), r#"<a href="custom">"#);
    }

    #[test]
    fn test_sorted_by_ordinal_without_custom() {
        let mut element = Element::new(ElementId::Body);
        element.set_attr(AttrId::Onkeydown, "k");
        element.set_attr(AttrId::Onload, "l");
        // onload's ordinal is before onkeydown's
        assert_eq!(
            element.sorted_open_tag(),
            r#"<body onload="l" onkeydown="k">"#
        );
    }

    #[test]
    fn test_attribute_values_escaped() {
        let mut element = Element::new(ElementId::Div);
        element.set_attr(AttrId::Onclick, r#"say("hi")"#);
        assert_eq!(
            element.sorted_open_tag(),
            r#"<div onclick="say(&#34;hi&#34;)">"#
        );
    }

    #[test]
    fn test_copy_shares_validated_cache() {
        let mut element = Element::new(ElementId::Div);
        element.set_id("a");
        let copy = element.copy();
        assert!(element.is_cached());
        assert!(copy.is_cached());
        assert_eq!(copy.open_tag(), r#"<div id="a">"#);
    }
}
