use indexmap::IndexMap;

/// Attribute name to value, in render order.
///
/// `None` is a boolean attribute written without a value (`<button disabled>`).
/// Names must already be valid attribute names; nothing here checks them.
pub type Attributes = IndexMap<String, Option<String>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlElement {
    /// Tag name, `div`, `h1`, ...
    pub name: String,
    pub attributes: Attributes,
    pub children: HtmlChildren,
}

/// What sits between the start and end tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HtmlChildren {
    ElementList(Vec<HtmlElement>),
    /// Escaped on output.
    Text(String),
    /// Written verbatim. For `<style>` and `<script>` bodies.
    RawText(String),
    /// No children and no end tag: `<img src="...">`.
    NoEndTag,
}

impl From<&str> for HtmlChildren {
    fn from(text: &str) -> Self {
        HtmlChildren::Text(text.to_string())
    }
}

impl From<String> for HtmlChildren {
    fn from(text: String) -> Self {
        HtmlChildren::Text(text)
    }
}

impl From<Vec<HtmlElement>> for HtmlChildren {
    fn from(children: Vec<HtmlElement>) -> Self {
        HtmlChildren::ElementList(children)
    }
}

impl<const N: usize> From<[HtmlElement; N]> for HtmlChildren {
    fn from(children: [HtmlElement; N]) -> Self {
        HtmlChildren::ElementList(children.into())
    }
}

/// Element with either escaped text (`&str`/`String`) or child elements.
pub fn element(
    name: impl Into<String>,
    attributes: Attributes,
    children: impl Into<HtmlChildren>,
) -> HtmlElement {
    HtmlElement {
        name: name.into(),
        attributes,
        children: children.into(),
    }
}

/// Element whose text is written without escaping.
///
/// ```text
/// <script type="x-shader/x-vertex">
/// void main(void) { gl_Position = mvpMatrix * vec4(position, 1.0); }
/// </script>
/// ```
pub fn element_raw_text(
    name: impl Into<String>,
    attributes: Attributes,
    text: impl Into<String>,
) -> HtmlElement {
    HtmlElement {
        name: name.into(),
        attributes,
        children: HtmlChildren::RawText(text.into()),
    }
}

/// Void element, `<meta name="x">`.
pub fn element_no_end_tag(name: impl Into<String>, attributes: Attributes) -> HtmlElement {
    HtmlElement {
        name: name.into(),
        attributes,
        children: HtmlChildren::NoEndTag,
    }
}

/// Builds an attribute map from `(name, value)` pairs, keeping their order.
pub fn attributes<K, V, I>(pairs: I) -> Attributes
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.map(Into::into)))
        .collect()
}
