use crate::serialize::write_element;
use crate::types::{Attributes, HtmlChildren, HtmlElement, attributes, element, element_no_end_tag, element_raw_text};
use core_types::{Color, Language, TwitterCard};
use url::Url;

pub const DOCTYPE: &str = "<!doctype html>";

/// Appended to the app name in the `<noscript>` warning.
pub const NOSCRIPT_SUFFIX: &str = "ではJavaScriptを使用します。ブラウザの設定で有効にしてください。";

/// Page-level metadata that ends up in `<html>`, `<head>` and `<body>`.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentOptions {
    /// Used for `<title>`, `og:title`, tabs and bookmarks.
    pub page_name: String,
    /// Site name (`og:site_name`) and the `<noscript>` warning.
    pub app_name: String,
    pub description: String,
    pub theme_color: Option<Color>,
    pub icon_url: Url,
    pub language: Option<Language>,
    /// `og:image`. Not subject to CORS.
    pub cover_image_url: Url,
    /// Canonical page URL, `og:url`.
    pub url: Url,
    pub twitter_card: TwitterCard,
    /// Path segments of the web app manifest, escaped segment by segment.
    pub manifest_path: Option<Vec<String>>,
    /// Inline CSS.
    pub style: Option<String>,
    pub style_urls: Vec<Url>,
    /// Inline ES module.
    pub script: Option<String>,
    pub script_urls: Vec<Url>,
    pub body_class: Option<String>,
    /// Prepend a `<noscript>` warning to the body.
    pub javascript_must_be_available: bool,
}

impl DocumentOptions {
    /// Options with every optional part left out.
    pub fn new(
        page_name: impl Into<String>,
        app_name: impl Into<String>,
        description: impl Into<String>,
        icon_url: Url,
        cover_image_url: Url,
        url: Url,
    ) -> Self {
        Self {
            page_name: page_name.into(),
            app_name: app_name.into(),
            description: description.into(),
            theme_color: None,
            icon_url,
            language: None,
            cover_image_url,
            url,
            twitter_card: TwitterCard::default(),
            manifest_path: None,
            style: None,
            style_urls: Vec::new(),
            script: None,
            script_urls: Vec::new(),
            body_class: None,
            javascript_must_be_available: false,
        }
    }
}

/// Render a full document: doctype, `<html>`, `<head>` built from `options`,
/// and `<body>` holding `body`.
///
/// Deterministic and infallible. Invalid tag or attribute names in `body`
/// produce invalid markup rather than an error.
pub fn serialize(options: &DocumentOptions, body: &HtmlChildren) -> String {
    let root = html_element(options, body);
    let mut out = String::with_capacity(1024);
    out.push_str(DOCTYPE);
    write_element(&mut out, &root);
    log::trace!(target: "html.serialize", "serialized document {:?}: {} bytes", options.page_name, out.len());
    out
}

fn html_element(options: &DocumentOptions, body: &HtmlChildren) -> HtmlElement {
    let mut attrs = Attributes::new();
    if let Some(language) = options.language {
        attrs.insert("lang".to_string(), Some(language.ietf_tag().to_string()));
    }
    element("html", attrs, vec![head_element(options), body_element(options, body)])
}

/// The `<head>` element for `options`, children in fixed order.
pub fn head_element(options: &DocumentOptions) -> HtmlElement {
    let mut children = vec![
        meta([("charset", "utf-8")]),
        meta([("name", "viewport"), ("content", "width=device-width,initial-scale=1.0")]),
        element("title", Attributes::new(), options.page_name.as_str()),
        meta([("name", "description"), ("content", options.description.as_str())]),
    ];
    if let Some(color) = &options.theme_color {
        children.push(meta([("name", "theme-color"), ("content", color.to_hex_string().as_str())]));
    }
    children.push(link("icon", options.icon_url.as_str()));
    if let Some(path) = &options.manifest_path {
        children.push(link("manifest", &tools::url::path_from_segments(path)));
    }
    if let Some(style) = &options.style {
        children.push(element_raw_text("style", Attributes::new(), style.as_str()));
    }
    for style_url in &options.style_urls {
        children.push(link("stylesheet", style_url.as_str()));
    }
    children.push(meta([("name", "twitter:card"), ("content", options.twitter_card.as_str())]));
    children.push(meta([("property", "og:url"), ("content", options.url.as_str())]));
    children.push(meta([("property", "og:title"), ("content", options.page_name.as_str())]));
    children.push(meta([("property", "og:site_name"), ("content", options.app_name.as_str())]));
    children.push(meta([("property", "og:description"), ("content", options.description.as_str())]));
    children.push(meta([("property", "og:image"), ("content", options.cover_image_url.as_str())]));
    if let Some(script) = &options.script {
        children.push(element_raw_text("script", attributes([("type", Some("module"))]), script.as_str()));
    }
    for script_url in &options.script_urls {
        children.push(element(
            "script",
            attributes([("defer", None), ("src", Some(script_url.as_str()))]),
            Vec::<HtmlElement>::new(),
        ));
    }
    element("head", Attributes::new(), children)
}

fn body_element(options: &DocumentOptions, body: &HtmlChildren) -> HtmlElement {
    let mut attrs = Attributes::new();
    if let Some(class) = &options.body_class {
        attrs.insert("class".to_string(), Some(class.clone()));
    }
    let children = if options.javascript_must_be_available {
        with_noscript_warning(&options.app_name, body)
    } else {
        body.clone()
    };
    HtmlElement {
        name: "body".to_string(),
        attributes: attrs,
        children,
    }
}

// Text bodies move into a `<div>` so the warning can sit in front of them.
fn with_noscript_warning(app_name: &str, body: &HtmlChildren) -> HtmlChildren {
    let noscript = element("noscript", Attributes::new(), format!("{app_name}{NOSCRIPT_SUFFIX}"));
    let mut children = vec![noscript];
    match body {
        HtmlChildren::ElementList(list) => children.extend(list.iter().cloned()),
        HtmlChildren::Text(_) | HtmlChildren::RawText(_) => children.push(HtmlElement {
            name: "div".to_string(),
            attributes: Attributes::new(),
            children: body.clone(),
        }),
        HtmlChildren::NoEndTag => {}
    }
    HtmlChildren::ElementList(children)
}

fn meta<const N: usize>(pairs: [(&str, &str); N]) -> HtmlElement {
    element_no_end_tag("meta", attributes(pairs.map(|(k, v)| (k, Some(v)))))
}

fn link(rel: &str, href: &str) -> HtmlElement {
    element_no_end_tag("link", attributes([("rel", Some(rel)), ("href", Some(href))]))
}
