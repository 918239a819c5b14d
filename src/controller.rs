//! Accordion controller - binds headers and toggles their content

use crate::config::AccordionConfig;
use crate::document::DocumentTree;
use crate::error::{AccordionError, AccordionResult};
use crate::panel::{Panel, PanelState};

/// What a click on a header did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Marker added to the content. In exclusive mode `collapsed_others`
    /// counts the elements that lost the marker first.
    Expanded { collapsed_others: usize },
    /// Marker removed from the content
    Collapsed,
    /// The header has no element after it; nothing changed
    MissingContent,
    /// The header was not present at initialization; nothing changed
    Unbound,
}

/// Click handling for every header present when it was initialized.
///
/// The controller holds header handles only. Content is looked up as the
/// header's next element sibling on every click, so reshaping the document
/// between clicks retargets the toggle.
pub struct AccordionController<D: DocumentTree> {
    config: AccordionConfig,
    headers: Vec<D::Element>,
}

impl<D: DocumentTree> AccordionController<D> {
    /// Validate `config` and bind every header currently in `document`
    pub fn initialize(document: &D, config: AccordionConfig) -> AccordionResult<Self> {
        config.validate()?;
        let headers = document.elements_with_class(&config.header_class);
        log::debug!(
            "Bound {} accordion header(s) with class '{}'",
            headers.len(),
            config.header_class
        );
        Ok(Self { config, headers })
    }

    pub fn config(&self) -> &AccordionConfig {
        &self.config
    }

    /// Bound headers in document order
    pub fn headers(&self) -> &[D::Element] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn is_bound(&self, header: &D::Element) -> bool {
        self.headers.contains(header)
    }

    /// The element right after `header`, looked up fresh each time
    pub fn resolve_content(&self, document: &D, header: &D::Element) -> AccordionResult<D::Element> {
        document
            .next_element_sibling(header)
            .ok_or_else(|| AccordionError::MissingContent(document.describe(header)))
    }

    /// Handle a click on `header`
    pub fn on_header_click(&self, document: &mut D, header: &D::Element) -> ToggleOutcome {
        if !self.is_bound(header) {
            log::debug!("Ignoring click on unbound element {}", document.describe(header));
            return ToggleOutcome::Unbound;
        }

        let content = match self.resolve_content(document, header) {
            Ok(content) => content,
            Err(e) => {
                if self.config.log_missing_content {
                    log::warn!("{}", e);
                }
                return ToggleOutcome::MissingContent;
            }
        };

        let marker = self.config.expanded_class.as_str();
        if document.has_class(&content, marker) {
            document.remove_class(&content, marker);
            log::debug!("Collapsed {}", document.describe(&content));
            return ToggleOutcome::Collapsed;
        }

        let mut collapsed_others = 0;
        if self.config.exclusive {
            for open in document.elements_with_class(marker) {
                document.remove_class(&open, marker);
                collapsed_others += 1;
            }
        }
        document.add_class(&content, marker);
        log::debug!("Expanded {}", document.describe(&content));
        ToggleOutcome::Expanded { collapsed_others }
    }

    /// Click the header bound at `index`
    pub fn click(&self, document: &mut D, index: usize) -> AccordionResult<ToggleOutcome> {
        let header = self
            .headers
            .get(index)
            .cloned()
            .ok_or(AccordionError::HeaderIndexOutOfRange {
                index,
                bound: self.headers.len(),
            })?;
        Ok(self.on_header_click(document, &header))
    }

    /// Current state of the content after `header`, `None` when there is none
    pub fn state_of(&self, document: &D, header: &D::Element) -> Option<PanelState> {
        let content = document.next_element_sibling(header)?;
        Some(document.has_class(&content, &self.config.expanded_class).into())
    }

    /// Snapshot of every bound panel
    pub fn panels(&self, document: &D) -> Vec<Panel> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, header)| Panel {
                index,
                header: document.text_content(header).trim().to_string(),
                state: self.state_of(document, header),
            })
            .collect()
    }
}
