//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Panel navigation
    NextPanel,
    PrevPanel,
    ScrollUp,
    ScrollDown,

    // Endpoint list
    NextEndpoint,
    PrevEndpoint,

    // Parameter editing
    NextParam,
    PrevParam,
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Invocation
    SendRequest,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Active panel in the UI (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Panel {
    #[default]
    Endpoints,
    Params,
    Response,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::Endpoints => Panel::Params,
            Panel::Params => Panel::Response,
            Panel::Response => Panel::Endpoints,
        }
    }

    pub fn prev(&self) -> Panel {
        match self {
            Panel::Endpoints => Panel::Response,
            Panel::Params => Panel::Endpoints,
            Panel::Response => Panel::Params,
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_panel: Panel,
    input_mode: InputMode,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Tab => Some(UiEvent::NextPanel),
            KeyCode::BackTab => Some(UiEvent::PrevPanel),
            KeyCode::Char('s') => Some(UiEvent::SendRequest),
            KeyCode::Char('e') | KeyCode::Enter => match active_panel {
                Panel::Params => Some(UiEvent::StartEditing),
                _ => None,
            },
            KeyCode::Up => match active_panel {
                Panel::Endpoints => Some(UiEvent::PrevEndpoint),
                Panel::Params => Some(UiEvent::PrevParam),
                Panel::Response => Some(UiEvent::ScrollUp),
            },
            KeyCode::Down => match active_panel {
                Panel::Endpoints => Some(UiEvent::NextEndpoint),
                Panel::Params => Some(UiEvent::NextParam),
                Panel::Response => Some(UiEvent::ScrollDown),
            },
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopEditing),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn send_works_from_any_panel_in_normal_mode() {
        for panel in [Panel::Endpoints, Panel::Params, Panel::Response] {
            let event = key_to_ui_event(press(KeyCode::Char('s')), panel, InputMode::Normal, false);
            assert!(matches!(event, Some(UiEvent::SendRequest)));
        }
    }

    #[test]
    fn typing_while_editing_is_character_input() {
        let event = key_to_ui_event(
            press(KeyCode::Char('s')),
            Panel::Params,
            InputMode::Editing,
            false,
        );
        assert!(matches!(event, Some(UiEvent::CharInput('s'))));
    }

    #[test]
    fn any_key_closes_the_help_popup() {
        let event = key_to_ui_event(press(KeyCode::Char('x')), Panel::Endpoints, InputMode::Normal, true);
        assert!(matches!(event, Some(UiEvent::CloseHelp)));
    }

    #[test]
    fn arrows_are_panel_aware() {
        let up = |panel| key_to_ui_event(press(KeyCode::Up), panel, InputMode::Normal, false);
        assert!(matches!(up(Panel::Endpoints), Some(UiEvent::PrevEndpoint)));
        assert!(matches!(up(Panel::Params), Some(UiEvent::PrevParam)));
        assert!(matches!(up(Panel::Response), Some(UiEvent::ScrollUp)));
    }
}
