/// URL path building from raw segments.
///
/// Each segment goes through the URI-component escape (everything except
/// ASCII alphanumerics and `- _ . ! ~ * ' ( )` becomes `%XX` over its UTF-8
/// bytes), and then `! ' ( ) *` are escaped as well, so the only characters
/// left verbatim are ASCII alphanumerics and `- _ . ~`.
///
/// The second pass writes lowercase hex (`*` becomes `%2a`) while the first
/// pass writes uppercase hex. Both decode identically.
pub fn escape_url_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for &byte in segment.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            b'!' | b'\'' | b'(' | b')' | b'*' => push_percent(&mut out, byte, LOWER_HEX),
            _ => push_percent(&mut out, byte, UPPER_HEX),
        }
    }
    out
}

/// `"/" + segments.map(escape_url_segment).join("/")`.
pub fn path_from_segments<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    out.push('/');
    for (i, segment) in segments.iter().enumerate() {
        if i != 0 {
            out.push('/');
        }
        out.push_str(&escape_url_segment(segment.as_ref()));
    }
    out
}

const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";
const LOWER_HEX: &[u8; 16] = b"0123456789abcdef";

fn push_percent(out: &mut String, byte: u8, digits: &[u8; 16]) {
    out.push('%');
    out.push(digits[(byte >> 4) as usize] as char);
    out.push(digits[(byte & 0x0f) as usize] as char);
}
