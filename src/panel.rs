//! Panel view-model

use serde::{Deserialize, Serialize};

/// Presentation state of one content element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    #[default]
    Collapsed,
    Expanded,
}

impl PanelState {
    pub fn is_expanded(self) -> bool {
        self == PanelState::Expanded
    }

    pub fn toggled(self) -> Self {
        match self {
            PanelState::Collapsed => PanelState::Expanded,
            PanelState::Expanded => PanelState::Collapsed,
        }
    }
}

impl From<bool> for PanelState {
    fn from(expanded: bool) -> Self {
        if expanded {
            PanelState::Expanded
        } else {
            PanelState::Collapsed
        }
    }
}

impl std::fmt::Display for PanelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelState::Collapsed => write!(f, "collapsed"),
            PanelState::Expanded => write!(f, "expanded"),
        }
    }
}

/// Snapshot of one bound header and its content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    /// Binding index (document order at initialization)
    pub index: usize,
    /// Trimmed text of the header
    pub header: String,
    /// `None` when the header has no content element after it
    pub state: Option<PanelState>,
}

impl Panel {
    pub fn is_expanded(&self) -> bool {
        self.state.is_some_and(PanelState::is_expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let state = PanelState::default();
        assert_eq!(state, PanelState::Collapsed);
        assert_eq!(state.toggled(), PanelState::Expanded);
        assert_eq!(state.toggled().toggled(), state);
    }

    #[test]
    fn test_serializes_lowercase() {
        let panel = Panel {
            index: 0,
            header: "Returns".to_string(),
            state: Some(PanelState::Expanded),
        };
        let json = serde_json::to_string(&panel).unwrap();
        assert_eq!(json, r#"{"index":0,"header":"Returns","state":"expanded"}"#);
    }

    #[test]
    fn test_missing_content_is_not_expanded() {
        let panel = Panel { index: 2, header: String::new(), state: None };
        assert!(!panel.is_expanded());
    }
}
