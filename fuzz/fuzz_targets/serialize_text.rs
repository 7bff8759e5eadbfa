#![no_main]

use html::{Attributes, HtmlChildren, HtmlElement, element, element_to_string, escape_in_html};
use libfuzzer_sys::fuzz_target;

// Text and attribute values come from the input; the markup around them must not move.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let mut attrs = Attributes::new();
    attrs.insert("title".to_string(), Some(text.to_string()));
    let el = HtmlElement {
        name: "p".to_string(),
        attributes: attrs,
        children: HtmlChildren::ElementList(vec![element("span", Attributes::new(), text)]),
    };
    let out = element_to_string(&el);
    let escaped = escape_in_html(text);
    assert_eq!(
        out,
        format!("<p title=\"{escaped}\"><span>{escaped}</span></p>")
    );
    assert_eq!(element_to_string(&el), out);
});
