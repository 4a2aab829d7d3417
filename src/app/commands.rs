//! Command handlers - business logic for processing UI events

use crate::app::state::{AppState, DocsStatus, EndpointUnit};
use crate::constants::DOCS_URL;
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{InvocationOutcome, InvocationStatus};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.active_panel = self.active_panel.next();
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = self.active_panel.prev();
    }

    pub fn next_endpoint(&mut self) {
        if !self.units.is_empty() {
            self.selected = (self.selected + 1) % self.units.len();
            self.selected_param = 0;
        }
    }

    pub fn prev_endpoint(&mut self) {
        if !self.units.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.units.len() - 1);
            self.selected_param = 0;
        }
    }

    pub fn next_param(&mut self) {
        let count = self
            .selected_unit()
            .map(|u| u.descriptor.param_names.len())
            .unwrap_or(0);
        if count > 0 {
            self.selected_param = (self.selected_param + 1) % count;
        }
    }

    pub fn prev_param(&mut self) {
        let count = self
            .selected_unit()
            .map(|u| u.descriptor.param_names.len())
            .unwrap_or(0);
        if count > 0 {
            self.selected_param = self.selected_param.checked_sub(1).unwrap_or(count - 1);
        }
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        if self
            .selected_unit()
            .map(|u| !u.descriptor.param_names.is_empty())
            .unwrap_or(false)
        {
            self.input_mode = InputMode::Editing;
            self.cursor_position = self.current_input().len();
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        if let Some(input) = self.current_input_mut() {
            if cursor_pos <= input.len() {
                input.insert(cursor_pos, c);
                self.cursor_position = cursor_pos + c.len_utf8();
            }
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let cursor_pos = self.cursor_position;
        if let Some(input) = self.current_input_mut() {
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    // ========================
    // Response scrolling
    // ========================

    pub fn scroll_up(&mut self) {
        if let Some(unit) = self.selected_unit_mut() {
            unit.scroll = unit.scroll.saturating_sub(1);
        }
    }

    pub fn scroll_down(&mut self) {
        if let Some(unit) = self.selected_unit_mut() {
            unit.scroll = unit.scroll.saturating_add(1);
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Document loading
    // ========================

    /// Issue the one-shot document fetch. Called once at startup; the
    /// resulting endpoint list is never mutated afterwards.
    pub fn start_document_load(&mut self) -> NetworkCommand {
        let id = self.next_id();
        self.docs = DocsStatus::Loading;
        self.docs_request_id = Some(id);

        NetworkCommand::FetchDocument {
            id,
            url: String::from(DOCS_URL),
        }
    }

    // ========================
    // Invocation
    // ========================

    /// Build the invocation command for the selected unit.
    ///
    /// Refused while that unit is already loading - the unit's own status
    /// is the only concurrency guard. Other units are unaffected.
    pub fn prepare_invocation(&mut self) -> Option<NetworkCommand> {
        let idx = self.selected;
        let unit = self.units.get(idx)?;
        if unit.status == InvocationStatus::Loading {
            return None;
        }

        let method = unit.descriptor.method.clone();
        let path = unit.descriptor.resolve_path(&unit.values);
        let id = self.next_id();

        let unit = &mut self.units[idx];
        unit.status = InvocationStatus::Loading;
        unit.scroll = 0;
        self.inflight.insert(id, idx);

        Some(NetworkCommand::Invoke {
            id,
            method,
            path,
            base_url: self.session.api_url.clone(),
            api_key: self.session.api_key.clone(),
        })
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::DocumentLoaded { id, endpoints } => {
                if self.docs_request_id == Some(id) {
                    self.units = endpoints.into_iter().map(EndpointUnit::new).collect();
                    self.docs = DocsStatus::Ready;
                    self.selected = 0;
                    self.selected_param = 0;
                    self.docs_request_id = None;
                }
            }
            NetworkResponse::DocumentFailed { id, message } => {
                if self.docs_request_id == Some(id) {
                    self.docs = DocsStatus::Failed(message);
                    self.docs_request_id = None;
                }
            }
            NetworkResponse::Completed {
                id,
                status,
                body,
                time_ms,
            } => {
                // Any received response is a result, 4xx/5xx included
                self.finish_invocation(id, InvocationStatus::Succeeded, Some(status), body, time_ms);
            }
            NetworkResponse::Failed {
                id,
                status,
                body,
                time_ms,
            } => {
                self.finish_invocation(id, InvocationStatus::Failed, status, body, time_ms);
            }
        }
    }

    fn finish_invocation(
        &mut self,
        id: u64,
        status: InvocationStatus,
        status_code: Option<u16>,
        body: String,
        time_ms: u64,
    ) {
        // Last response to arrive wins for its unit
        if let Some(idx) = self.inflight.remove(&id) {
            if let Some(unit) = self.units.get_mut(idx) {
                unit.status = status;
                unit.outcome = Some(InvocationOutcome {
                    status_code,
                    body,
                    time_ms,
                });
                unit.scroll = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EndpointDescriptor;
    use crate::session::Session;

    fn loaded_state() -> AppState {
        let mut state = AppState::new(Session::default());
        let cmd = state.start_document_load();
        let id = match cmd {
            NetworkCommand::FetchDocument { id, .. } => id,
            _ => panic!("expected FetchDocument"),
        };

        let mut get_user = EndpointDescriptor::new("get", "/users/{id}");
        get_user.description = String::from("Get user");
        get_user.param_names = vec![String::from("id")];

        let list_users = EndpointDescriptor::new("get", "/users");

        state.handle_response(NetworkResponse::DocumentLoaded {
            id,
            endpoints: vec![get_user, list_users],
        });
        state
    }

    fn pending_id(cmd: &NetworkCommand) -> u64 {
        match cmd {
            NetworkCommand::Invoke { id, .. } => *id,
            _ => panic!("expected Invoke"),
        }
    }

    #[test]
    fn document_load_populates_idle_units() {
        let state = loaded_state();
        assert_eq!(state.docs, DocsStatus::Ready);
        assert_eq!(state.units.len(), 2);
        assert!(state
            .units
            .iter()
            .all(|u| u.status == InvocationStatus::Idle && u.outcome.is_none()));
        assert_eq!(state.units[0].values, vec![String::new()]);
    }

    #[test]
    fn document_failure_is_terminal_for_the_list() {
        let mut state = AppState::new(Session::default());
        let id = match state.start_document_load() {
            NetworkCommand::FetchDocument { id, .. } => id,
            _ => unreachable!(),
        };
        state.handle_response(NetworkResponse::DocumentFailed {
            id,
            message: String::from("failed to load documentation"),
        });

        assert_eq!(
            state.docs,
            DocsStatus::Failed(String::from("failed to load documentation"))
        );
        assert!(state.units.is_empty());
    }

    #[test]
    fn successful_response_moves_unit_to_succeeded() {
        let mut state = loaded_state();
        state.units[0].values[0] = String::from("7");

        let cmd = state.prepare_invocation().unwrap();
        let id = pending_id(&cmd);
        assert_eq!(state.units[0].status, InvocationStatus::Loading);
        match &cmd {
            NetworkCommand::Invoke { method, path, .. } => {
                assert_eq!(method, "get");
                assert_eq!(path, "/users/7");
            }
            _ => unreachable!(),
        }

        state.handle_response(NetworkResponse::Completed {
            id,
            status: 201,
            body: String::from(r#"{"ok":true}"#),
            time_ms: 12,
        });

        let unit = &state.units[0];
        assert_eq!(unit.status, InvocationStatus::Succeeded);
        let outcome = unit.outcome.as_ref().unwrap();
        assert_eq!(outcome.status_code, Some(201));
        assert_eq!(outcome.body, r#"{"ok":true}"#);
    }

    #[test]
    fn http_error_statuses_are_still_results() {
        let mut state = loaded_state();
        let id = pending_id(&state.prepare_invocation().unwrap());

        state.handle_response(NetworkResponse::Completed {
            id,
            status: 404,
            body: String::from(r#"{"error":"not found"}"#),
            time_ms: 8,
        });

        let unit = &state.units[0];
        assert_eq!(unit.status, InvocationStatus::Succeeded);
        assert_eq!(unit.outcome.as_ref().unwrap().status_code, Some(404));
    }

    #[test]
    fn transport_failure_moves_unit_to_failed_without_status() {
        let mut state = loaded_state();
        let id = pending_id(&state.prepare_invocation().unwrap());

        state.handle_response(NetworkResponse::Failed {
            id,
            status: None,
            body: String::from(r#"{"message":"Connection failed"}"#),
            time_ms: 3,
        });

        let unit = &state.units[0];
        assert_eq!(unit.status, InvocationStatus::Failed);
        let outcome = unit.outcome.as_ref().unwrap();
        assert_eq!(outcome.status_code, None);
        assert!(outcome.body.contains("Connection failed"));
    }

    #[test]
    fn send_is_refused_while_unit_is_loading() {
        let mut state = loaded_state();
        assert!(state.prepare_invocation().is_some());
        assert!(state.prepare_invocation().is_none());
    }

    #[test]
    fn units_are_independent() {
        let mut state = loaded_state();
        let id = pending_id(&state.prepare_invocation().unwrap());

        // A second unit can fire while the first is in flight
        state.next_endpoint();
        assert!(state.prepare_invocation().is_some());

        state.handle_response(NetworkResponse::Failed {
            id,
            status: None,
            body: String::from(r#"{"message":"boom"}"#),
            time_ms: 1,
        });

        assert_eq!(state.units[0].status, InvocationStatus::Failed);
        assert_eq!(state.units[1].status, InvocationStatus::Loading);
        assert!(state.units[1].outcome.is_none());
    }

    #[test]
    fn unit_is_reusable_after_completion() {
        let mut state = loaded_state();
        let id = pending_id(&state.prepare_invocation().unwrap());
        state.handle_response(NetworkResponse::Completed {
            id,
            status: 200,
            body: String::new(),
            time_ms: 1,
        });

        let cmd = state.prepare_invocation();
        assert!(cmd.is_some());
        assert_eq!(state.units[0].status, InvocationStatus::Loading);
    }

    #[test]
    fn param_editing_updates_the_selected_value() {
        let mut state = loaded_state();
        state.start_editing();
        assert_eq!(state.input_mode, InputMode::Editing);
        state.enter_char('4');
        state.enter_char('2');
        state.delete_char();
        state.enter_char('7');
        state.stop_editing();

        assert_eq!(state.units[0].values[0], "47");
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn editing_is_refused_for_parameterless_endpoints() {
        let mut state = loaded_state();
        state.next_endpoint();
        state.start_editing();
        assert_eq!(state.input_mode, InputMode::Normal);
    }
}
