use crate::element::ViewChildren;
use crate::event_map::{EventMap, build_event_map};
use html::DocumentOptions;

/// A whole page: document metadata plus a keyed body carrying handlers.
#[derive(Debug, Clone)]
pub struct View<M> {
    pub options: DocumentOptions,
    pub children: ViewChildren<M>,
}

impl<M> View<M> {
    pub fn new(options: DocumentOptions, children: impl Into<ViewChildren<M>>) -> Self {
        Self {
            options,
            children: children.into(),
        }
    }

    /// Server-side markup for the first paint.
    ///
    /// A view relies on script for its handlers, so the `<noscript>` warning is
    /// always included whatever `options` says.
    pub fn to_html_string(&self) -> String {
        let mut options = self.options.clone();
        options.javascript_must_be_available = true;
        html::serialize(&options, &self.children.to_html_children())
    }
}

impl<M: Clone> View<M> {
    pub fn event_map(&self) -> EventMap<M> {
        build_event_map(&self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{KeyedChildren, ViewElement};
    use crate::events::Events;
    use html::{Attributes, Url};

    fn options() -> DocumentOptions {
        let url = Url::parse("https://example.com/").unwrap();
        DocumentOptions::new("Counter", "Demo", "count things", url.clone(), url.clone(), url)
    }

    #[test]
    fn html_string_always_carries_noscript() {
        let children: KeyedChildren<u32> = [(
            "inc",
            ViewElement::new("button", Attributes::new(), "+1").with_events(Events::click(1)),
        )]
        .into_iter()
        .collect();
        let view = View::new(options(), children);
        assert!(!view.options.javascript_must_be_available);
        let out = view.to_html_string();
        assert!(out.contains(
            "<body><noscript>DemoではJavaScriptを使用します。ブラウザの設定で有効にしてください。</noscript><button>+1</button></body>"
        ));
        assert_eq!(view.event_map().len(), 1);
    }
}
