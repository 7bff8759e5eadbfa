//! Declarative page description that can be read from TOML (or any serde
//! format) and turned into [`DocumentOptions`] plus a body tree.
//!
//! ```toml
//! page_name = "Top"
//! app_name = "Example"
//! description = "An example page"
//! icon_url = "https://example.com/icon.png"
//! cover_image_url = "https://example.com/cover.png"
//! url = "https://example.com/"
//! language = "English"
//!
//! [[body]]
//! name = "button"
//! text = "Send"
//! attributes = [{ name = "disabled" }]
//! ```

use crate::document::DocumentOptions;
use crate::types::{Attributes, HtmlChildren, HtmlElement};
use core_types::{Color, Language, TwitterCard};
use serde::Deserialize;
use std::fmt;
use url::Url;

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    pub page_name: String,
    pub app_name: String,
    pub description: String,
    #[serde(default)]
    pub theme_color: Option<Color>,
    pub icon_url: String,
    #[serde(default)]
    pub language: Option<Language>,
    pub cover_image_url: String,
    pub url: String,
    #[serde(default)]
    pub twitter_card: TwitterCard,
    #[serde(default)]
    pub manifest_path: Option<Vec<String>>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub style_urls: Vec<String>,
    #[serde(default)]
    pub script: Option<String>,
    #[serde(default)]
    pub script_urls: Vec<String>,
    #[serde(default)]
    pub body_class: Option<String>,
    #[serde(default)]
    pub javascript_must_be_available: bool,
    #[serde(default)]
    pub body: Vec<NodeConfig>,
}

/// One element. At most one of `text`, `raw_text`, `void` and `children`
/// may be given; with none of them the element is empty.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeConfig {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<AttributeConfig>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub raw_text: Option<String>,
    #[serde(default)]
    pub void: bool,
    #[serde(default)]
    pub children: Vec<NodeConfig>,
}

/// An attribute without `value` is written bare (`disabled`).
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeConfig {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidUrl {
        field: &'static str,
        value: String,
        source: url::ParseError,
    },
    ConflictingChildren {
        element: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidUrl { field, value, source } => {
                write!(f, "invalid URL in `{field}` ({value:?}): {source}")
            }
            ConfigError::ConflictingChildren { element } => write!(
                f,
                "element <{element}> sets more than one of text, raw_text, void and children"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidUrl { source, .. } => Some(source),
            ConfigError::ConflictingChildren { .. } => None,
        }
    }
}

impl PageConfig {
    pub fn into_document(self) -> Result<(DocumentOptions, HtmlChildren), ConfigError> {
        let options = DocumentOptions {
            page_name: self.page_name,
            app_name: self.app_name,
            description: self.description,
            theme_color: self.theme_color,
            icon_url: parse_url("icon_url", &self.icon_url)?,
            language: self.language,
            cover_image_url: parse_url("cover_image_url", &self.cover_image_url)?,
            url: parse_url("url", &self.url)?,
            twitter_card: self.twitter_card,
            manifest_path: self.manifest_path,
            style: self.style,
            style_urls: parse_urls("style_urls", &self.style_urls)?,
            script: self.script,
            script_urls: parse_urls("script_urls", &self.script_urls)?,
            body_class: self.body_class,
            javascript_must_be_available: self.javascript_must_be_available,
        };
        let body = self
            .body
            .into_iter()
            .map(NodeConfig::into_element)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((options, HtmlChildren::ElementList(body)))
    }
}

impl NodeConfig {
    pub fn into_element(self) -> Result<HtmlElement, ConfigError> {
        let given = [
            self.text.is_some(),
            self.raw_text.is_some(),
            self.void,
            !self.children.is_empty(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count();
        if given > 1 {
            return Err(ConfigError::ConflictingChildren { element: self.name });
        }

        let attributes: Attributes = self
            .attributes
            .into_iter()
            .map(|attr| (attr.name, attr.value))
            .collect();
        let children = if let Some(text) = self.text {
            HtmlChildren::Text(text)
        } else if let Some(raw) = self.raw_text {
            HtmlChildren::RawText(raw)
        } else if self.void {
            HtmlChildren::NoEndTag
        } else {
            HtmlChildren::ElementList(
                self.children
                    .into_iter()
                    .map(NodeConfig::into_element)
                    .collect::<Result<_, _>>()?,
            )
        };
        Ok(HtmlElement {
            name: self.name,
            attributes,
            children,
        })
    }
}

fn parse_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
        source,
    })
}

fn parse_urls(field: &'static str, values: &[String]) -> Result<Vec<Url>, ConfigError> {
    values.iter().map(|value| parse_url(field, value)).collect()
}
