use memchr::{memchr, memchr3};
use std::borrow::Cow;

/// Escape text content and attribute values.
///
/// Contract:
/// - `&` → `&amp;`, `>` → `&gt;`, `<` → `&lt;`, `"` → `&quot;`, `'` → `&#x27;`,
///   `` ` `` → `&#x60;`.
/// - Single left-to-right pass, so entities produced here are never escaped
///   a second time (same result as replacing `&` first).
/// - Input without any of the six characters is returned borrowed.
pub fn escape_in_html(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let Some(first) = first_escapable(bytes) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 8);
    out.push_str(&text[..first]);
    let mut copy_start = first;
    for (i, &b) in bytes.iter().enumerate().skip(first) {
        let Some(entity) = entity_for(b) else {
            continue;
        };
        out.push_str(&text[copy_start..i]);
        out.push_str(entity);
        copy_start = i + 1;
    }
    out.push_str(&text[copy_start..]);
    Cow::Owned(out)
}

/// Exact inverse of [`escape_in_html`].
///
/// Only the six entities written by the escaper are decoded; any other `&`
/// sequence passes through unchanged.
pub fn unescape_in_html(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let Some(first) = memchr(b'&', bytes) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);
    let mut i = first;
    while i < bytes.len() {
        let Some(rel) = memchr(b'&', &bytes[i..]) else {
            out.push_str(&text[i..]);
            break;
        };
        let amp = i + rel;
        out.push_str(&text[i..amp]);
        match decode_entity_at(&bytes[amp..]) {
            Some((ch, len)) => {
                out.push(ch);
                i = amp + len;
            }
            None => {
                out.push('&');
                i = amp + 1;
            }
        }
    }
    Cow::Owned(out)
}

const ENTITIES: [(&str, char); 6] = [
    ("&amp;", '&'),
    ("&gt;", '>'),
    ("&lt;", '<'),
    ("&quot;", '"'),
    ("&#x27;", '\''),
    ("&#x60;", '`'),
];

fn entity_for(b: u8) -> Option<&'static str> {
    match b {
        b'&' => Some("&amp;"),
        b'>' => Some("&gt;"),
        b'<' => Some("&lt;"),
        b'"' => Some("&quot;"),
        b'\'' => Some("&#x27;"),
        b'`' => Some("&#x60;"),
        _ => None,
    }
}

fn first_escapable(bytes: &[u8]) -> Option<usize> {
    let markup = memchr3(b'&', b'<', b'>', bytes);
    let quotes = memchr3(b'"', b'\'', b'`', bytes);
    match (markup, quotes) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn decode_entity_at(bytes: &[u8]) -> Option<(char, usize)> {
    ENTITIES
        .iter()
        .find(|(entity, _)| bytes.starts_with(entity.as_bytes()))
        .map(|(entity, ch)| (*ch, entity.len()))
}
