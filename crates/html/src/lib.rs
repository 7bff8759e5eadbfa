#[cfg(feature = "config")]
pub mod config;
pub mod tags;

mod document;
mod escape;
mod serialize;
mod types;

pub use crate::document::{DOCTYPE, DocumentOptions, NOSCRIPT_SUFFIX, head_element, serialize};
pub use crate::escape::{escape_in_html, unescape_in_html};
pub use crate::serialize::{element_to_string, write_element};
pub use crate::types::{
    Attributes, HtmlChildren, HtmlElement, attributes, element, element_no_end_tag,
    element_raw_text,
};

pub use core_types::{Color, Language, TwitterCard};
pub use url::Url;
