#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let escaped = html::escape_in_html(text);
    for reserved in ['<', '>', '"', '\'', '`'] {
        assert!(!escaped.contains(reserved), "{reserved:?} survived escaping");
    }
    assert_eq!(html::unescape_in_html(&escaped), text);
});
