use crate::escape::escape_in_html;
use crate::types::{Attributes, HtmlChildren, HtmlElement};

/// Render one element and its subtree.
pub fn element_to_string(element: &HtmlElement) -> String {
    let mut out = String::new();
    write_element(&mut out, element);
    out
}

/// Append the markup for `element` to `out`.
///
/// `NoEndTag` elements get no end tag; every other variant is closed with
/// `</name>`, including empty element lists (`<script src="x"></script>`).
pub fn write_element(out: &mut String, element: &HtmlElement) {
    out.push('<');
    out.push_str(&element.name);
    write_attributes(out, &element.attributes);
    out.push('>');

    match &element.children {
        HtmlChildren::ElementList(children) => {
            for child in children {
                write_element(out, child);
            }
        }
        HtmlChildren::Text(text) => out.push_str(&escape_in_html(text)),
        HtmlChildren::RawText(text) => out.push_str(text),
        HtmlChildren::NoEndTag => return,
    }

    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
}

fn write_attributes(out: &mut String, attributes: &Attributes) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        if let Some(value) = value {
            out.push_str("=\"");
            out.push_str(&escape_in_html(value));
            out.push('"');
        }
    }
}
