//! In-memory document fragment
//!
//! An arena of elements addressed by [`ElementId`]. Element 0 is a synthetic
//! root that owns the top-level elements; it is never returned by queries.
//! Structural edits (insert, replace, detach) exist so a host can reshape the
//! document between clicks, but detached elements stay in the arena and keep
//! their classes.

use serde::{Deserialize, Serialize};

use crate::document::DocumentTree;
use crate::error::{AccordionError, AccordionResult};

const ROOT_TAG: &str = "#fragment";

/// Handle to an element inside a [`Fragment`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(usize);

impl ElementId {
    /// Position of the element in the fragment's arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// A child slot of an element
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Element(ElementId),
    Text(String),
}

#[derive(Debug, Clone)]
struct ElementData {
    tag: String,
    /// Attributes other than `class`, in insertion order
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    /// Number of attributes preceding `class`; `None` until a class is set
    class_slot: Option<usize>,
    parent: Option<ElementId>,
    children: Vec<Child>,
}

impl ElementData {
    fn new(tag: &str, parent: Option<ElementId>) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            classes: Vec::new(),
            class_slot: None,
            parent,
            children: Vec::new(),
        }
    }
}

/// Mutable in-memory document
#[derive(Debug, Clone)]
pub struct Fragment {
    elements: Vec<ElementData>,
}

impl Default for Fragment {
    fn default() -> Self {
        Self::new()
    }
}

impl Fragment {
    /// Create an empty fragment containing only the root
    pub fn new() -> Self {
        Self {
            elements: vec![ElementData::new(ROOT_TAG, None)],
        }
    }

    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    /// Number of elements ever created, attached or not, excluding the root
    pub fn len(&self) -> usize {
        self.elements.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up an id, failing for ids minted by another fragment
    pub fn check(&self, id: ElementId) -> AccordionResult<ElementId> {
        if id.0 < self.elements.len() {
            Ok(id)
        } else {
            Err(AccordionError::UnknownElement(id.0))
        }
    }

    /// Append a new element as the last child of `parent`
    pub fn append_element(&mut self, parent: ElementId, tag: &str) -> AccordionResult<ElementId> {
        self.check(parent)?;
        let id = ElementId(self.elements.len());
        self.elements.push(ElementData::new(tag, Some(parent)));
        self.elements[parent.0].children.push(Child::Element(id));
        Ok(id)
    }

    /// Append a text node as the last child of `parent`
    pub fn append_text(&mut self, parent: ElementId, text: &str) -> AccordionResult<()> {
        self.check(parent)?;
        self.elements[parent.0].children.push(Child::Text(text.to_string()));
        Ok(())
    }

    /// Insert a new element directly after `reference` under the same parent
    pub fn insert_after(&mut self, reference: ElementId, tag: &str) -> AccordionResult<ElementId> {
        let (parent, position) = self.slot_of(reference)?;
        let id = ElementId(self.elements.len());
        self.elements.push(ElementData::new(tag, Some(parent)));
        self.elements[parent.0]
            .children
            .insert(position + 1, Child::Element(id));
        Ok(id)
    }

    /// Put a new element in the slot held by `old`; `old` becomes detached
    pub fn replace(&mut self, old: ElementId, tag: &str) -> AccordionResult<ElementId> {
        let (parent, position) = self.slot_of(old)?;
        let id = ElementId(self.elements.len());
        self.elements.push(ElementData::new(tag, Some(parent)));
        self.elements[parent.0].children[position] = Child::Element(id);
        self.elements[old.0].parent = None;
        Ok(id)
    }

    /// Remove an element (and its subtree) from its parent.
    /// Detaching the root or an already detached element does nothing.
    pub fn detach(&mut self, id: ElementId) -> AccordionResult<()> {
        self.check(id)?;
        let Some(parent) = self.elements[id.0].parent else {
            return Ok(());
        };
        self.elements[parent.0]
            .children
            .retain(|child| *child != Child::Element(id));
        self.elements[id.0].parent = None;
        Ok(())
    }

    /// Whether the element is reachable from the root
    pub fn is_attached(&self, id: ElementId) -> bool {
        let mut current = id;
        loop {
            if current.0 == 0 {
                return true;
            }
            match self.elements.get(current.0).and_then(|e| e.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    pub fn tag(&self, id: ElementId) -> Option<&str> {
        self.elements.get(id.0).map(|e| e.tag.as_str())
    }

    pub fn classes(&self, id: ElementId) -> &[String] {
        self.elements
            .get(id.0)
            .map(|e| e.classes.as_slice())
            .unwrap_or(&[])
    }

    pub fn children(&self, id: ElementId) -> &[Child] {
        self.elements
            .get(id.0)
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements.get(id.0).and_then(|e| e.parent)
    }

    /// Set an attribute. `class` is routed to the class list, and its
    /// position among the other attributes is remembered for serialization.
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) -> AccordionResult<()> {
        self.check(id)?;
        let element = &mut self.elements[id.0];
        if name == "class" {
            element.classes = value.split_whitespace().map(str::to_string).collect();
            if element.class_slot.is_none() {
                element.class_slot = Some(element.attributes.len());
            }
            return Ok(());
        }
        match element.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => element.attributes.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.elements
            .get(id.0)?
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes other than `class`
    pub fn attributes(&self, id: ElementId) -> &[(String, String)] {
        self.elements
            .get(id.0)
            .map(|e| e.attributes.as_slice())
            .unwrap_or(&[])
    }

    /// Where `class` sits among [`Fragment::attributes`], if the element has one
    pub fn class_position(&self, id: ElementId) -> Option<usize> {
        self.elements.get(id.0).and_then(|e| e.class_slot)
    }

    /// Attached elements in document order (pre-order, root excluded)
    pub fn descendants(&self) -> Vec<ElementId> {
        let mut out = Vec::new();
        self.walk(self.root(), &mut out);
        out
    }

    fn walk(&self, id: ElementId, out: &mut Vec<ElementId>) {
        for child in &self.elements[id.0].children {
            if let Child::Element(child_id) = child {
                out.push(*child_id);
                self.walk(*child_id, out);
            }
        }
    }

    fn slot_of(&self, id: ElementId) -> AccordionResult<(ElementId, usize)> {
        self.check(id)?;
        let parent = self.elements[id.0]
            .parent
            .ok_or(AccordionError::DetachedElement(id.0))?;
        let position = self.elements[parent.0]
            .children
            .iter()
            .position(|child| *child == Child::Element(id))
            .ok_or(AccordionError::DetachedElement(id.0))?;
        Ok((parent, position))
    }

    fn collect_text(&self, id: ElementId, out: &mut String) {
        for child in &self.elements[id.0].children {
            match child {
                Child::Text(text) => out.push_str(text),
                Child::Element(child_id) => self.collect_text(*child_id, out),
            }
        }
    }
}

impl DocumentTree for Fragment {
    type Element = ElementId;

    fn elements_with_class(&self, class: &str) -> Vec<ElementId> {
        self.descendants()
            .into_iter()
            .filter(|id| self.has_class(id, class))
            .collect()
    }

    fn next_element_sibling(&self, element: &ElementId) -> Option<ElementId> {
        let (parent, position) = self.slot_of(*element).ok()?;
        self.elements[parent.0].children[position + 1..]
            .iter()
            .find_map(|child| match child {
                Child::Element(id) => Some(*id),
                Child::Text(_) => None,
            })
    }

    fn has_class(&self, element: &ElementId, class: &str) -> bool {
        self.classes(*element).iter().any(|c| c == class)
    }

    fn add_class(&mut self, element: &ElementId, class: &str) {
        if let Some(data) = self.elements.get_mut(element.0) {
            if !data.classes.iter().any(|c| c == class) {
                data.classes.push(class.to_string());
            }
            if data.class_slot.is_none() {
                data.class_slot = Some(data.attributes.len());
            }
        }
    }

    fn remove_class(&mut self, element: &ElementId, class: &str) {
        if let Some(data) = self.elements.get_mut(element.0) {
            data.classes.retain(|c| c != class);
        }
    }

    fn text_content(&self, element: &ElementId) -> String {
        let mut out = String::new();
        if self.check(*element).is_ok() {
            self.collect_text(*element, &mut out);
        }
        out
    }

    fn describe(&self, element: &ElementId) -> String {
        let tag = self.tag(*element).unwrap_or("?");
        let classes = self.classes(*element);
        if classes.is_empty() {
            format!("<{}>#{}", tag, element.0)
        } else {
            format!("<{} class=\"{}\">#{}", tag, classes.join(" "), element.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Fragment, ElementId, ElementId, ElementId) {
        let mut doc = Fragment::new();
        let root = doc.root();
        let section = doc.append_element(root, "section").unwrap();
        let header = doc.append_element(section, "h3").unwrap();
        doc.append_text(section, "\n  ").unwrap();
        let body = doc.append_element(section, "div").unwrap();
        (doc, section, header, body)
    }

    #[test]
    fn test_next_sibling_skips_text() {
        let (doc, _, header, body) = sample();
        assert_eq!(doc.next_element_sibling(&header), Some(body));
        assert_eq!(doc.next_element_sibling(&body), None);
    }

    #[test]
    fn test_root_has_no_sibling() {
        let (doc, section, _, _) = sample();
        assert_eq!(doc.next_element_sibling(&doc.root()), None);
        assert_eq!(doc.next_element_sibling(&section), None);
    }

    #[test]
    fn test_document_order() {
        let (mut doc, section, header, body) = sample();
        let inner = doc.append_element(header, "span").unwrap();
        assert_eq!(doc.descendants(), vec![section, header, inner, body]);
    }

    #[test]
    fn test_class_list_behaves_like_a_set() {
        let (mut doc, _, header, _) = sample();
        doc.add_class(&header, "a");
        doc.add_class(&header, "a");
        doc.add_class(&header, "b");
        assert_eq!(doc.classes(header), ["a", "b"]);
        doc.remove_class(&header, "a");
        doc.remove_class(&header, "missing");
        assert_eq!(doc.classes(header), ["b"]);
    }

    #[test]
    fn test_replace_detaches_old() {
        let (mut doc, _, header, body) = sample();
        let fresh = doc.replace(body, "div").unwrap();
        assert_eq!(doc.next_element_sibling(&header), Some(fresh));
        assert!(!doc.is_attached(body));
        assert!(doc.is_attached(fresh));
    }

    #[test]
    fn test_detached_elements_are_not_queried() {
        let (mut doc, _, _, body) = sample();
        doc.add_class(&body, "expanded");
        doc.detach(body).unwrap();
        assert!(doc.elements_with_class("expanded").is_empty());
        assert!(matches!(
            doc.insert_after(body, "p"),
            Err(AccordionError::DetachedElement(_))
        ));
    }

    #[test]
    fn test_insert_after() {
        let (mut doc, _, header, body) = sample();
        let inserted = doc.insert_after(header, "div").unwrap();
        assert_eq!(doc.next_element_sibling(&header), Some(inserted));
        assert_eq!(doc.next_element_sibling(&inserted), Some(body));
    }

    #[test]
    fn test_class_attribute_sets_class_list() {
        let (mut doc, _, header, _) = sample();
        doc.set_attribute(header, "class", " accordion-header  big ").unwrap();
        doc.set_attribute(header, "id", "h1").unwrap();
        assert_eq!(doc.classes(header), ["accordion-header", "big"]);
        assert_eq!(doc.attribute(header, "id"), Some("h1"));
        assert_eq!(doc.attribute(header, "class"), None);
    }

    #[test]
    fn test_unknown_id() {
        let doc = Fragment::new();
        let mut other = Fragment::new();
        let foreign = other.append_element(other.root(), "div").unwrap();
        assert!(matches!(doc.check(foreign), Err(AccordionError::UnknownElement(1))));
        assert!(!doc.has_class(&foreign, "x"));
        assert_eq!(doc.text_content(&foreign), "");
    }

    #[test]
    fn test_append_under_foreign_parent_fails() {
        let mut doc = Fragment::new();
        let mut other = Fragment::new();
        let outer = other.append_element(other.root(), "div").unwrap();
        let nested = other.append_element(outer, "div").unwrap();

        assert!(matches!(
            doc.append_element(nested, "p"),
            Err(AccordionError::UnknownElement(2))
        ));
        assert!(matches!(
            doc.append_text(nested, "x"),
            Err(AccordionError::UnknownElement(2))
        ));
        assert!(doc.is_empty());
        assert!(doc.children(doc.root()).is_empty());
    }

    #[test]
    fn test_class_position_tracks_first_class() {
        let (mut doc, _, header, body) = sample();
        doc.set_attribute(header, "id", "q1").unwrap();
        doc.set_attribute(header, "class", "accordion-header").unwrap();
        doc.set_attribute(header, "title", "Q").unwrap();
        assert_eq!(doc.class_position(header), Some(1));

        assert_eq!(doc.class_position(body), None);
        doc.set_attribute(body, "id", "a1").unwrap();
        doc.add_class(&body, "expanded");
        assert_eq!(doc.class_position(body), Some(1));
    }

    #[test]
    fn test_text_content_is_recursive() {
        let (mut doc, _, header, _) = sample();
        doc.append_text(header, "Shipping ").unwrap();
        let em = doc.append_element(header, "em").unwrap();
        doc.append_text(em, "options").unwrap();
        assert_eq!(doc.text_content(&header), "Shipping options");
    }
}
