//! Minimal SVG document builder.
//!
//! Every generator formats coordinates through [`f1`] (one decimal place)
//! and opacities through [`num`], so output is byte-stable across runs and
//! platforms.

use std::fmt::{self, Write as _};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Format a coordinate with exactly one decimal place.
pub fn f1(value: f64) -> String {
    let s = format!("{:.1}", value);
    if s == "-0.0" {
        "0.0".to_string()
    } else {
        s
    }
}

/// Format a scalar (opacity, width) with up to three decimals, trailing
/// zeros removed.
pub fn num(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-0" => "0".to_string(),
        s => s.to_string(),
    }
}

/// Escape text for use in XML content or attribute values.
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Encode an SVG document as a `data:` URI.
pub fn data_uri(svg: &str) -> String {
    format!(
        "data:image/svg+xml,{}",
        utf8_percent_encode(svg, URI_COMPONENT)
    )
}

/// A single SVG element with attributes and optional children or text.
#[derive(Debug, Clone)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Add an attribute. Values are escaped on output.
    pub fn attr(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    /// Add an attribute only when `value` is present.
    pub fn attr_opt(self, name: &'static str, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(v) => self.attr(name, v),
            None => self,
        }
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, escape_xml(value))?;
        }

        if self.children.is_empty() && self.text.is_none() {
            return f.write_str("/>");
        }

        f.write_char('>')?;
        if let Some(text) = &self.text {
            f.write_str(&escape_xml(text))?;
        }
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.name)
    }
}

/// A standalone `<svg>` document.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    preserve_aspect_ratio: Option<&'static str>,
    defs: Vec<Element>,
    body: Vec<Element>,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            preserve_aspect_ratio: None,
            defs: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn preserve_aspect_ratio(mut self, value: &'static str) -> Self {
        self.preserve_aspect_ratio = Some(value);
        self
    }

    /// Add an element to `<defs>`.
    pub fn def(&mut self, element: Element) {
        self.defs.push(element);
    }

    /// Append an element to the body. Later elements paint on top.
    pub fn push(&mut self, element: Element) {
        self.body.push(element);
    }

    pub fn finish(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<svg xmlns=\"{}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\"",
            SVG_NS,
            w = self.width,
            h = self.height
        )?;
        if let Some(par) = self.preserve_aspect_ratio {
            write!(f, " preserveAspectRatio=\"{}\"", par)?;
        }
        f.write_str(">\n")?;

        if !self.defs.is_empty() {
            f.write_str("<defs>\n")?;
            for def in &self.defs {
                writeln!(f, "{}", def)?;
            }
            f.write_str("</defs>\n")?;
        }
        for element in &self.body {
            writeln!(f, "{}", element)?;
        }
        f.write_str("</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_f1() {
        assert_eq!(f1(10.0), "10.0");
        assert_eq!(f1(3.14159), "3.1");
        assert_eq!(f1(-0.04), "0.0");
        assert_eq!(f1(-12.26), "-12.3");
    }

    #[test]
    fn test_num() {
        assert_eq!(num(0.08), "0.08");
        assert_eq!(num(1.0), "1");
        assert_eq!(num(0.0), "0");
        assert_eq!(num(0.0426), "0.043");
        assert_eq!(num(10.0), "10");
    }

    #[test]
    fn test_element_self_closing() {
        let el = Element::new("circle")
            .attr("cx", f1(16.0))
            .attr("r", 3)
            .attr("fill", "#306E5E");
        assert_eq!(el.to_string(), r##"<circle cx="16.0" r="3" fill="#306E5E"/>"##);
    }

    #[test]
    fn test_element_escapes_text() {
        let el = Element::new("text").text("<&>");
        assert_eq!(el.to_string(), "<text>&lt;&amp;&gt;</text>");
    }

    #[test]
    fn test_document() {
        let mut doc = SvgDocument::new(64, 32).preserve_aspect_ratio("none");
        doc.push(Element::new("rect").attr("width", 64));
        assert_eq!(
            doc.finish(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"64\" height=\"32\" viewBox=\"0 0 64 32\" preserveAspectRatio=\"none\">\n<rect width=\"64\"/>\n</svg>"
        );
    }

    #[test]
    fn test_data_uri_encodes_markup() {
        let uri = data_uri("<svg fill=\"#fff\"/>");
        assert_eq!(uri, "data:image/svg+xml,%3Csvg%20fill%3D%22%23fff%22%2F%3E");
    }
}
