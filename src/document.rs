//! Document abstraction used by the controller
//!
//! The controller only needs a handful of structural queries and class-list
//! mutations. Implementations exist for the in-memory [`crate::fragment::Fragment`]
//! and, behind the `wasm` feature, for the browser DOM.

use std::fmt::Debug;

/// Read structure and mutate class markers on a document
pub trait DocumentTree {
    /// Handle to one element of the document
    type Element: Clone + PartialEq + Debug;

    /// All attached elements carrying `class`, in document order
    fn elements_with_class(&self, class: &str) -> Vec<Self::Element>;

    /// The element immediately following `element` under the same parent,
    /// skipping text nodes
    fn next_element_sibling(&self, element: &Self::Element) -> Option<Self::Element>;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Add `class`; no-op when already present
    fn add_class(&mut self, element: &Self::Element, class: &str);

    /// Remove `class`; no-op when absent
    fn remove_class(&mut self, element: &Self::Element, class: &str);

    /// Concatenated text of the element and its descendants
    fn text_content(&self, element: &Self::Element) -> String;

    /// Short human-readable label for log messages
    fn describe(&self, element: &Self::Element) -> String;
}
