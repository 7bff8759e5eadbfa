use crate::events::Events;
use html::{Attributes, HtmlChildren, HtmlElement};
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Two siblings under the same parent share a key, so their paths would collide.
    DuplicateKey { key: String },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::DuplicateKey { key } => write!(f, "duplicate sibling key {key:?}"),
        }
    }
}

impl std::error::Error for ViewError {}

/// An element that may carry event handlers.
#[derive(Debug, Clone)]
pub struct ViewElement<M> {
    pub name: String,
    pub attributes: Attributes,
    pub events: Option<Events<M>>,
    pub children: ViewChildren<M>,
}

impl<M> ViewElement<M> {
    pub fn new(
        name: impl Into<String>,
        attributes: Attributes,
        children: impl Into<ViewChildren<M>>,
    ) -> Self {
        Self {
            name: name.into(),
            attributes,
            events: None,
            children: children.into(),
        }
    }

    pub fn no_end_tag(name: impl Into<String>, attributes: Attributes) -> Self {
        Self::new(name, attributes, ViewChildren::NoEndTag)
    }

    pub fn with_events(mut self, events: Events<M>) -> Self {
        self.events = Some(events);
        self
    }

    /// Markup-only copy: keys and handlers are dropped, sibling order is kept.
    pub fn to_html_element(&self) -> HtmlElement {
        HtmlElement {
            name: self.name.clone(),
            attributes: self.attributes.clone(),
            children: self.children.to_html_children(),
        }
    }
}

/// Lifts plain markup (for example from `html::tags`) into a view without
/// handlers. Element-list children are keyed by their position.
impl<M> From<HtmlElement> for ViewElement<M> {
    fn from(element: HtmlElement) -> Self {
        let children = match element.children {
            HtmlChildren::ElementList(list) => ViewChildren::ElementList(
                list.into_iter()
                    .enumerate()
                    .map(|(index, child)| (index.to_string(), ViewElement::from(child)))
                    .collect(),
            ),
            HtmlChildren::Text(text) => ViewChildren::Text(text),
            HtmlChildren::RawText(text) => ViewChildren::RawText(text),
            HtmlChildren::NoEndTag => ViewChildren::NoEndTag,
        };
        Self {
            name: element.name,
            attributes: element.attributes,
            events: None,
            children,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ViewChildren<M> {
    ElementList(KeyedChildren<M>),
    Text(String),
    RawText(String),
    NoEndTag,
}

impl<M> ViewChildren<M> {
    pub fn to_html_children(&self) -> HtmlChildren {
        match self {
            ViewChildren::ElementList(children) => HtmlChildren::ElementList(
                children.values().map(ViewElement::to_html_element).collect(),
            ),
            ViewChildren::Text(text) => HtmlChildren::Text(text.clone()),
            ViewChildren::RawText(text) => HtmlChildren::RawText(text.clone()),
            ViewChildren::NoEndTag => HtmlChildren::NoEndTag,
        }
    }
}

impl<M> From<&str> for ViewChildren<M> {
    fn from(text: &str) -> Self {
        ViewChildren::Text(text.to_string())
    }
}

impl<M> From<String> for ViewChildren<M> {
    fn from(text: String) -> Self {
        ViewChildren::Text(text)
    }
}

impl<M> From<KeyedChildren<M>> for ViewChildren<M> {
    fn from(children: KeyedChildren<M>) -> Self {
        ViewChildren::ElementList(children)
    }
}

/// Children addressed by a key that is unique among siblings.
///
/// Iteration follows insertion order, which is also render order.
#[derive(Debug, Clone)]
pub struct KeyedChildren<M>(IndexMap<String, ViewElement<M>>);

impl<M> KeyedChildren<M> {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Appends `element` under `key`. A key already present is rejected and the
    /// existing child is left untouched.
    pub fn try_insert(
        &mut self,
        key: impl Into<String>,
        element: ViewElement<M>,
    ) -> Result<(), ViewError> {
        match self.0.entry(key.into()) {
            Entry::Occupied(entry) => Err(ViewError::DuplicateKey {
                key: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(element);
                Ok(())
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ViewElement<M>> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ViewElement<M>)> {
        self.0.iter().map(|(key, element)| (key.as_str(), element))
    }

    pub fn values(&self) -> impl Iterator<Item = &ViewElement<M>> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<M> Default for KeyedChildren<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// A repeated key replaces the earlier element in place (last write wins).
impl<M, K: Into<String>> FromIterator<(K, ViewElement<M>)> for KeyedChildren<M> {
    fn from_iter<I: IntoIterator<Item = (K, ViewElement<M>)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(key, element)| (key.into(), element)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Events;
    use html::{attributes, element_to_string};

    fn text(name: &str, body: &str) -> ViewElement<u8> {
        ViewElement::new(name, Attributes::new(), body)
    }

    #[test]
    fn try_insert_rejects_duplicate_keys() {
        let mut children = KeyedChildren::new();
        children.try_insert("a", text("p", "first")).unwrap();
        let err = children.try_insert("a", text("p", "second")).unwrap_err();
        assert_eq!(
            err,
            ViewError::DuplicateKey {
                key: "a".to_string()
            }
        );
        assert_eq!(err.to_string(), "duplicate sibling key \"a\"");
        let kept = children.get("a").unwrap();
        assert!(matches!(&kept.children, ViewChildren::Text(t) if t == "first"));
    }

    #[test]
    fn collect_keeps_last_duplicate_in_first_position() {
        let children: KeyedChildren<u8> = vec![
            ("a", text("p", "1")),
            ("b", text("p", "2")),
            ("a", text("p", "3")),
        ]
        .into_iter()
        .collect();
        let keys: Vec<&str> = children.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert!(matches!(&children.get("a").unwrap().children, ViewChildren::Text(t) if t == "3"));
    }

    #[test]
    fn html_conversion_drops_keys_and_events() {
        let children: KeyedChildren<u8> = [
            ("second", text("span", "b")),
            ("first", text("span", "a")),
        ]
        .into_iter()
        .collect();
        let root = ViewElement::new("div", attributes([("class", Some("row"))]), children)
            .with_events(Events::click(1));
        assert_eq!(
            element_to_string(&root.to_html_element()),
            "<div class=\"row\"><span>b</span><span>a</span></div>"
        );
    }

    #[test]
    fn plain_markup_lifts_with_positional_keys() {
        let markup = html::element(
            "ul",
            Attributes::new(),
            vec![
                html::element("li", Attributes::new(), "a"),
                html::element("li", Attributes::new(), "b"),
            ],
        );
        let lifted: ViewElement<u8> = ViewElement::from(markup.clone());
        assert!(lifted.events.is_none());
        let ViewChildren::ElementList(children) = &lifted.children else {
            panic!("expected an element list, got {:?}", lifted.children);
        };
        let keys: Vec<&str> = children.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["0", "1"]);
        assert_eq!(lifted.to_html_element(), markup);
    }

    #[test]
    fn html_conversion_keeps_child_kinds() {
        let script: ViewElement<u8> =
            ViewElement::new("script", Attributes::new(), ViewChildren::RawText("a<b".into()));
        let img: ViewElement<u8> = ViewElement::no_end_tag("img", attributes([("src", Some("x"))]));
        assert_eq!(element_to_string(&script.to_html_element()), "<script>a<b</script>");
        assert_eq!(element_to_string(&img.to_html_element()), "<img src=\"x\">");
    }
}
