//! Render state - data structure sent from App layer to UI for rendering

use crate::app::state::{DocsStatus, EndpointUnit};
use crate::messages::ui_events::{InputMode, Panel};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Document
    pub docs: DocsStatus,
    pub units: Vec<EndpointUnit>,

    // Selection
    pub selected: usize,
    pub selected_param: usize,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub show_help: bool,

    // Session (displayed in the status bar)
    pub api_url: String,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            docs: DocsStatus::Loading,
            units: Vec::new(),
            selected: 0,
            selected_param: 0,
            active_panel: Panel::Endpoints,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            show_help: false,
            api_url: String::new(),
        }
    }
}
