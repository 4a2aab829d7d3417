//! App state - pure data structure with no I/O logic

use std::collections::HashMap;

use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::RenderState;
use crate::models::{EndpointDescriptor, InvocationOutcome, InvocationStatus};
use crate::session::Session;

/// Page-level document loading state. A failed load is terminal for the
/// endpoint list; the view itself stays interactive.
#[derive(Clone, Debug, PartialEq)]
pub enum DocsStatus {
    Loading,
    Ready,
    Failed(String),
}

/// One endpoint's invocation unit.
///
/// Each unit exclusively owns its parameter values and its last outcome;
/// units never share state, so one unit's failure cannot touch a sibling.
#[derive(Clone, Debug)]
pub struct EndpointUnit {
    pub descriptor: EndpointDescriptor,
    /// User-entered values parallel to `descriptor.param_names`
    pub values: Vec<String>,
    pub status: InvocationStatus,
    pub outcome: Option<InvocationOutcome>,
    pub scroll: u16,
}

impl EndpointUnit {
    pub fn new(descriptor: EndpointDescriptor) -> Self {
        let values = vec![String::new(); descriptor.param_names.len()];
        EndpointUnit {
            descriptor,
            values,
            status: InvocationStatus::Idle,
            outcome: None,
            scroll: 0,
        }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Document
    pub docs: DocsStatus,
    pub units: Vec<EndpointUnit>,
    pub docs_request_id: Option<u64>,

    // Selection
    pub selected: usize,
    pub selected_param: usize,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub show_help: bool,

    // Session (immutable for the life of the process)
    pub session: Session,

    // Request routing
    pub next_request_id: u64,
    /// request id -> unit index for in-flight invocations
    pub inflight: HashMap<u64, usize>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        AppState {
            docs: DocsStatus::Loading,
            units: Vec::new(),
            docs_request_id: None,
            selected: 0,
            selected_param: 0,
            active_panel: Panel::Endpoints,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            show_help: false,
            session,
            next_request_id: 1,
            inflight: HashMap::new(),
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn selected_unit(&self) -> Option<&EndpointUnit> {
        self.units.get(self.selected)
    }

    pub fn selected_unit_mut(&mut self) -> Option<&mut EndpointUnit> {
        self.units.get_mut(self.selected)
    }

    /// The parameter value currently under the cursor
    pub fn current_input(&self) -> &str {
        self.selected_unit()
            .and_then(|u| u.values.get(self.selected_param))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        let param = self.selected_param;
        self.selected_unit_mut().and_then(|u| u.values.get_mut(param))
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            docs: self.docs.clone(),
            units: self.units.clone(),
            selected: self.selected,
            selected_param: self.selected_param,
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            show_help: self.show_help,
            api_url: self.session.api_url.clone(),
        }
    }
}
