//! HTML import/export for [`Fragment`]
//!
//! Parsing goes through `scraper` in body context, so `<html>`, `<head>`
//! and `<body>` wrappers are dropped and only their content is kept.
//! Comments and doctypes are discarded. Text under raw-text elements
//! (`<script>`, `<style>` and friends) is written back unescaped, the same
//! way html5ever serializes it.

use std::path::Path;

use scraper::{ElementRef, Html};

use crate::error::AccordionResult;
use crate::fragment::{Child, ElementId, Fragment};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe", "noembed", "noframes", "plaintext", "script", "style", "xmp",
];

impl Fragment {
    /// Build a fragment from HTML markup
    pub fn parse_html(markup: &str) -> AccordionResult<Self> {
        let parsed = Html::parse_fragment(markup);
        let mut fragment = Fragment::new();
        let root = fragment.root();
        import_children(&mut fragment, root, parsed.root_element())?;
        Ok(fragment)
    }

    /// Read and parse an HTML file
    pub fn load_html(path: impl AsRef<Path>) -> AccordionResult<Self> {
        let markup = std::fs::read_to_string(path)?;
        Self::parse_html(&markup)
    }

    /// Serialize the attached tree back to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_children(self.root(), &mut out);
        out
    }

    fn write_children(&self, id: ElementId, out: &mut String) {
        let raw = self
            .tag(id)
            .is_some_and(|tag| RAW_TEXT_ELEMENTS.contains(&tag));
        for child in self.children(id) {
            match child {
                Child::Text(text) if raw => out.push_str(text),
                Child::Text(text) => escape_into(text, false, out),
                Child::Element(child_id) => self.write_element(*child_id, out),
            }
        }
    }

    fn write_element(&self, id: ElementId, out: &mut String) {
        let tag = self.tag(id).unwrap_or("div");
        out.push('<');
        out.push_str(tag);
        let attributes = self.attributes(id);
        let class_slot = self.class_position(id);
        let class_value = self.classes(id).join(" ");
        for position in 0..=attributes.len() {
            if class_slot == Some(position) {
                write_attribute("class", &class_value, out);
            }
            if let Some((name, value)) = attributes.get(position) {
                write_attribute(name, value, out);
            }
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&tag) {
            return;
        }
        self.write_children(id, out);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

fn import_children(
    fragment: &mut Fragment,
    parent: ElementId,
    source: ElementRef<'_>,
) -> AccordionResult<()> {
    for node in source.children() {
        if let Some(element) = ElementRef::wrap(node) {
            let id = fragment.append_element(parent, element.value().name())?;
            for (name, value) in element.value().attrs() {
                fragment.set_attribute(id, name, value)?;
            }
            import_children(fragment, id, element)?;
        } else if let Some(text) = node.value().as_text() {
            fragment.append_text(parent, text)?;
        }
    }
    Ok(())
}

fn write_attribute(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(value, true, out);
    out.push('"');
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
