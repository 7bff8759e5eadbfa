//! Per-tag shorthands over [`element`], [`element_no_end_tag`] and friends.
//!
//! `class` values are expected to be resolved already (for example by a
//! style-to-class-name function living outside this crate).

use crate::types::{Attributes, HtmlChildren, HtmlElement, element, element_no_end_tag};
use url::Url;

/// Attributes most elements accept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommonAttributes {
    pub id: Option<String>,
    pub class: Option<String>,
}

impl CommonAttributes {
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            class: None,
        }
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self {
            id: None,
            class: Some(class.into()),
        }
    }

    fn to_map(&self) -> Attributes {
        let mut map = Attributes::new();
        if let Some(id) = &self.id {
            map.insert("id".to_string(), Some(id.clone()));
        }
        if let Some(class) = &self.class {
            map.insert("class".to_string(), Some(class.clone()));
        }
        map
    }

    fn with(&self, pairs: &[(&str, String)]) -> Attributes {
        let mut map = self.to_map();
        for (name, value) in pairs {
            map.insert((*name).to_string(), Some(value.clone()));
        }
        map
    }
}

pub fn div(attrs: &CommonAttributes, children: impl Into<HtmlChildren>) -> HtmlElement {
    element("div", attrs.to_map(), children)
}

/// Page heading.
pub fn h1(attrs: &CommonAttributes, children: impl Into<HtmlChildren>) -> HtmlElement {
    element("h1", attrs.to_map(), children)
}

pub fn h2(attrs: &CommonAttributes, children: impl Into<HtmlChildren>) -> HtmlElement {
    element("h2", attrs.to_map(), children)
}

pub fn h3(attrs: &CommonAttributes, children: impl Into<HtmlChildren>) -> HtmlElement {
    element("h3", attrs.to_map(), children)
}

pub fn section(attrs: &CommonAttributes, children: Vec<HtmlElement>) -> HtmlElement {
    element("section", attrs.to_map(), children)
}

pub fn code(attrs: &CommonAttributes, children: impl Into<HtmlChildren>) -> HtmlElement {
    element("code", attrs.to_map(), children)
}

pub fn quote(
    attrs: &CommonAttributes,
    cite: Option<&Url>,
    children: impl Into<HtmlChildren>,
) -> HtmlElement {
    let map = match cite {
        Some(cite) => attrs.with(&[("cite", cite.to_string())]),
        None => attrs.to_map(),
    };
    element("quote", map, children)
}

pub fn anchor(attrs: &CommonAttributes, url: &Url, children: impl Into<HtmlChildren>) -> HtmlElement {
    element("a", attrs.with(&[("href", url.to_string())]), children)
}

pub fn button(attrs: &CommonAttributes, children: impl Into<HtmlChildren>) -> HtmlElement {
    element("button", attrs.to_map(), children)
}

/// `<img alt=.. src=..>`. `src` is a string so blob URLs fit too.
pub fn image(attrs: &CommonAttributes, alt: &str, src: &str) -> HtmlElement {
    element_no_end_tag(
        "img",
        attrs.with(&[("alt", alt.to_string()), ("src", src.to_string())]),
    )
}

/// One-line text field, `<input type="text" value=..>`.
pub fn input_text(attrs: &CommonAttributes, value: &str) -> HtmlElement {
    let mut map = attrs.with(&[("type", "text".to_string())]);
    map.insert("value".to_string(), Some(value.to_string()));
    element_no_end_tag("input", map)
}

/// Multi-line text field. The current value is the (escaped) body.
pub fn textarea(attrs: &CommonAttributes, value: &str) -> HtmlElement {
    element("textarea", attrs.to_map(), value)
}

/// Radio button. `group` is the `name` shared by the choices of one question.
pub fn input_radio(attrs: &CommonAttributes, group: &str, checked: bool) -> HtmlElement {
    let mut map = attrs.with(&[("type", "radio".to_string()), ("name", group.to_string())]);
    if checked {
        map.insert("checked".to_string(), None);
    }
    element_no_end_tag("input", map)
}

/// `<label for=..>` pointing at the control with id `target_id`.
pub fn label(
    attrs: &CommonAttributes,
    target_id: &str,
    children: impl Into<HtmlChildren>,
) -> HtmlElement {
    element("label", attrs.with(&[("for", target_id.to_string())]), children)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub fn svg(attrs: &CommonAttributes, view_box: ViewBox, children: Vec<HtmlElement>) -> HtmlElement {
    let view_box = format!(
        "{} {} {} {}",
        view_box.x, view_box.y, view_box.width, view_box.height
    );
    element("svg", attrs.with(&[("viewBox", view_box)]), children)
}

pub fn path(attrs: &CommonAttributes, d: &str, fill: &str) -> HtmlElement {
    element(
        "path",
        attrs.with(&[("d", d.to_string()), ("fill", fill.to_string())]),
        "",
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatedAttribute {
    Cy,
    R,
    Stroke,
}

impl AnimatedAttribute {
    fn as_str(self) -> &'static str {
        match self {
            AnimatedAttribute::Cy => "cy",
            AnimatedAttribute::R => "r",
            AnimatedAttribute::Stroke => "stroke",
        }
    }
}

/// Repeats forever.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgAnimation {
    pub attribute: AnimatedAttribute,
    /// Seconds.
    pub dur: f64,
    pub from: String,
    pub to: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
    pub stroke: String,
    pub animations: Vec<SvgAnimation>,
}

pub fn circle(attrs: &CommonAttributes, circle: &Circle) -> HtmlElement {
    let map = attrs.with(&[
        ("cx", circle.cx.to_string()),
        ("cy", circle.cy.to_string()),
        ("fill", circle.fill.clone()),
        ("r", circle.r.to_string()),
        ("stroke", circle.stroke.clone()),
    ]);
    if circle.animations.is_empty() {
        element("circle", map, "")
    } else {
        element("circle", map, circle.animations.iter().map(animate).collect::<Vec<_>>())
    }
}

fn animate(animation: &SvgAnimation) -> HtmlElement {
    let map = CommonAttributes::default().with(&[
        ("attributeName", animation.attribute.as_str().to_string()),
        ("dur", animation.dur.to_string()),
        ("from", animation.from.clone()),
        ("repeatCount", "indefinite".to_string()),
        ("to", animation.to.clone()),
    ]);
    element("animate", map, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::element_to_string;

    #[test]
    fn common_attributes_come_first() {
        let url = Url::parse("https://example.com/a b").unwrap();
        let a = anchor(&CommonAttributes::id("top"), &url, "home");
        assert_eq!(
            element_to_string(&a),
            r#"<a id="top" href="https://example.com/a%20b">home</a>"#
        );
    }

    #[test]
    fn image_is_void() {
        let img = image(&CommonAttributes::class("c"), "a cat", "blob:xyz");
        assert_eq!(
            element_to_string(&img),
            r#"<img class="c" alt="a cat" src="blob:xyz">"#
        );
    }

    #[test]
    fn svg_circle_with_animation() {
        let c = circle(
            &CommonAttributes::default(),
            &Circle {
                cx: 10.0,
                cy: 5.5,
                r: 2.0,
                fill: "none".to_string(),
                stroke: "#000".to_string(),
                animations: vec![SvgAnimation {
                    attribute: AnimatedAttribute::R,
                    dur: 1.5,
                    from: "2".to_string(),
                    to: "4".to_string(),
                }],
            },
        );
        let view_box = ViewBox { x: 0.0, y: 0.0, width: 20.0, height: 10.0 };
        let out = element_to_string(&svg(&CommonAttributes::default(), view_box, vec![c]));
        assert_eq!(
            out,
            concat!(
                r#"<svg viewBox="0 0 20 10">"#,
                r##"<circle cx="10" cy="5.5" fill="none" r="2" stroke="#000">"##,
                r#"<animate attributeName="r" dur="1.5" from="2" repeatCount="indefinite" to="4"></animate>"#,
                "</circle></svg>"
            )
        );
    }

    #[test]
    fn text_controls_carry_their_value() {
        let attrs = CommonAttributes::id("name");
        assert_eq!(
            element_to_string(&input_text(&attrs, "Tom & \"Jerry\"")),
            r#"<input id="name" type="text" value="Tom &amp; &quot;Jerry&quot;">"#
        );
        assert_eq!(
            element_to_string(&textarea(&attrs, "a<b\nc")),
            "<textarea id=\"name\">a&lt;b\nc</textarea>"
        );
    }

    #[test]
    fn radio_checked_is_a_bare_attribute() {
        let on = input_radio(&CommonAttributes::id("yes"), "answer", true);
        let off = input_radio(&CommonAttributes::default(), "answer", false);
        assert_eq!(
            element_to_string(&on),
            r#"<input id="yes" type="radio" name="answer" checked>"#
        );
        assert_eq!(element_to_string(&off), r#"<input type="radio" name="answer">"#);
    }

    #[test]
    fn label_points_at_its_control() {
        let l = label(&CommonAttributes::class("l"), "yes", "Yes");
        assert_eq!(element_to_string(&l), r#"<label class="l" for="yes">Yes</label>"#);
    }

    #[test]
    fn path_is_closed_explicitly() {
        let p = path(&CommonAttributes::default(), "M1,2 L20,53", "red");
        assert_eq!(
            element_to_string(&p),
            r#"<path d="M1,2 L20,53" fill="red"></path>"#
        );
    }
}
