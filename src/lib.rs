//! Accordion Toggle - click-to-expand panels for HTML documents
//!
//! Every element carrying the header class becomes clickable; a click flips
//! the marker class on the element that immediately follows the header.
//! The controller is generic over [`document::DocumentTree`], so the same
//! logic drives:
//! - the live browser DOM (`wasm` feature, via `web-sys`)
//! - an in-memory [`fragment::Fragment`], optionally parsed from HTML
//!   (`html` feature)
//!
//! ## Example
//! ```rust
//! use accordion_toggle::prelude::*;
//!
//! let mut doc = Fragment::new();
//! let root = doc.root();
//! let header = doc.append_element(root, "h3").unwrap();
//! doc.add_class(&header, "accordion-header");
//! let body = doc.append_element(root, "div").unwrap();
//!
//! let controller = AccordionController::initialize(&doc, AccordionConfig::default()).unwrap();
//! assert_eq!(controller.on_header_click(&mut doc, &header), ToggleOutcome::Expanded { collapsed_others: 0 });
//! assert!(doc.has_class(&body, "expanded"));
//! ```

pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod fragment;
pub mod panel;

#[cfg(feature = "html")]
pub mod html;

// Re-export common types
pub mod prelude {
    pub use crate::config::AccordionConfig;
    pub use crate::controller::{AccordionController, ToggleOutcome};
    pub use crate::document::DocumentTree;
    pub use crate::error::{AccordionError, AccordionResult};
    pub use crate::fragment::{ElementId, Fragment};
    pub use crate::panel::{Panel, PanelState};
}

#[cfg(feature = "wasm")]
pub mod wasm;
