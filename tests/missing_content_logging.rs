use std::cell::RefCell;
use std::sync::Once;

use accordion_toggle::prelude::*;

thread_local! {
    static RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Keeps records per test thread so parallel tests don't see each other's output
struct CapturingLogger;

impl log::Log for CapturingLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;
static INIT: Once = Once::new();

fn capture() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(log::LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

fn warnings() -> Vec<String> {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(level, _)| *level == log::Level::Warn)
            .map(|(_, message)| message.clone())
            .collect()
    })
}

fn lone_header() -> (Fragment, ElementId) {
    let mut doc = Fragment::new();
    let root = doc.root();
    let header = doc.append_element(root, "h3").unwrap();
    doc.add_class(&header, "accordion-header");
    (doc, header)
}

#[test]
fn missing_content_warns_by_default() {
    capture();
    let (mut doc, header) = lone_header();
    let controller = AccordionController::initialize(&doc, AccordionConfig::default()).unwrap();

    assert_eq!(controller.on_header_click(&mut doc, &header), ToggleOutcome::MissingContent);
    let warnings = warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("no following content"));
}

#[test]
fn missing_content_warning_can_be_silenced() {
    capture();
    let (mut doc, header) = lone_header();
    let config = AccordionConfig::default().with_log_missing_content(false);
    let controller = AccordionController::initialize(&doc, config).unwrap();

    assert_eq!(controller.on_header_click(&mut doc, &header), ToggleOutcome::MissingContent);
    assert!(warnings().is_empty());
}
