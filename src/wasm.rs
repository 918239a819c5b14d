//! WASM bindings for the accordion controller
//!
//! Exposes `initAccordions` to the page. It binds every header present once
//! the document structure is ready, attaching one click listener per header.
//! Listeners live for the life of the page; there is no unbind, and only the
//! first call per page binds anything.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::config::AccordionConfig;
use crate::controller::AccordionController;
use crate::document::DocumentTree;

// Use wee_alloc for smaller WASM binary
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Forwards `log` records to the browser console
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[accordion] {}", record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

thread_local! {
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Mark the page as bound. Returns false when a previous call already did.
fn claim_install() -> bool {
    INSTALLED.with(|installed| !installed.replace(true))
}

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Warn);
    }
}

/// Live browser document
#[derive(Clone)]
pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the current window
    pub fn current() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        Ok(Self::new(document))
    }
}

impl DocumentTree for BrowserDocument {
    type Element = Element;

    fn elements_with_class(&self, class: &str) -> Vec<Element> {
        // HtmlCollection is live; copy it out before anything mutates classes
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn next_element_sibling(&self, element: &Element) -> Option<Element> {
        element.next_element_sibling()
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&mut self, element: &Element, class: &str) {
        if let Err(e) = element.class_list().add_1(class) {
            log::error!("Failed to add class '{}': {:?}", class, e);
        }
    }

    fn remove_class(&mut self, element: &Element, class: &str) {
        if let Err(e) = element.class_list().remove_1(class) {
            log::error!("Failed to remove class '{}': {:?}", class, e);
        }
    }

    fn text_content(&self, element: &Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn describe(&self, element: &Element) -> String {
        let tag = element.tag_name().to_lowercase();
        let class = element.class_name();
        if class.is_empty() {
            format!("<{}>", tag)
        } else {
            format!("<{} class=\"{}\">", tag, class)
        }
    }
}

/// Bind accordion headers in the current page.
///
/// `config_json` is an optional JSON object with any of `header_class`,
/// `expanded_class`, `exclusive` and `log_missing_content`. When the page
/// is still loading, binding waits for `DOMContentLoaded`.
///
/// Only the first call binds; later calls log a warning and return.
#[wasm_bindgen(js_name = "initAccordions")]
pub fn init_accordions(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(json) => AccordionConfig::from_json(&json)
            .map_err(|e| JsValue::from_str(&format!("Invalid accordion config: {}", e)))?,
        None => AccordionConfig::default(),
    };
    let document = BrowserDocument::current()?;

    if !claim_install() {
        log::warn!("initAccordions called again; headers are already bound");
        return Ok(());
    }

    if document.document.ready_state() != "loading" {
        return bind_headers(document, config);
    }

    let target = document.document.clone();
    let on_ready = Closure::once(move |_event: Event| {
        if let Err(e) = bind_headers(document, config) {
            web_sys::console::error_1(&e);
        }
    });
    target.add_event_listener_with_callback(
        "DOMContentLoaded",
        on_ready.as_ref().unchecked_ref::<js_sys::Function>(),
    )?;
    on_ready.forget();
    Ok(())
}

fn bind_headers(document: BrowserDocument, config: AccordionConfig) -> Result<(), JsValue> {
    let controller = AccordionController::initialize(&document, config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let controller = Rc::new(controller);

    for header in controller.headers() {
        let controller = Rc::clone(&controller);
        let mut document = document.clone();
        let bound = header.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            controller.on_header_click(&mut document, &bound);
        });
        header.add_event_listener_with_callback(
            "click",
            on_click.as_ref().unchecked_ref::<js_sys::Function>(),
        )?;
        on_click.forget();
    }

    log::info!("Bound {} accordion header(s)", controller.len());
    Ok(())
}
