//! Scout TUI - Actor-based terminal OpenAPI explorer
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use scout_tui::app::{AppActor, DocsStatus, EndpointUnit};
use scout_tui::messages::ui_events::{key_to_ui_event, InputMode, Panel};
use scout_tui::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use scout_tui::models::InvocationStatus;
use scout_tui::network::NetworkActor;
use scout_tui::session::Session;
use scout_tui::ui::{method_color, render_body, status_color};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "scout.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor; it fires the document fetch on startup
    let app_actor = AppActor::new(Session::load(), net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_panel,
                    current_state.input_mode,
                    current_state.show_help,
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    match &state.docs {
        DocsStatus::Loading => draw_loading_page(f, main_chunks[0]),
        DocsStatus::Failed(message) => draw_error_page(f, message, main_chunks[0]),
        DocsStatus::Ready => draw_explorer(f, state, main_chunks[0]),
    }

    draw_status_bar(f, state, main_chunks[1]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_loading_page(f: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Scout ");
    let content = Paragraph::new("\nLoading documentation...")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(content, area);
}

fn draw_error_page(f: &mut Frame, message: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Scout ");
    let content = Paragraph::new(format!("\n{}", message))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(content, area);
}

fn draw_explorer(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    draw_endpoint_list(f, state, chunks[0]);

    let param_count = state
        .units
        .get(state.selected)
        .map(|u| u.descriptor.param_names.len())
        .unwrap_or(0);
    let params_height = (param_count.max(1) + 2) as u16;

    let detail_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(params_height), Constraint::Min(5)])
        .split(chunks[1]);

    draw_params_panel(f, state, detail_chunks[0]);
    draw_response_panel(f, state, detail_chunks[1]);
}

fn draw_endpoint_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Endpoints;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let items: Vec<ListItem> = state.units.iter().map(endpoint_row).collect();

    let highlight_style = if is_focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().bold()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" Endpoints ({}) ", state.units.len())),
        )
        .highlight_style(highlight_style);

    let mut list_state = ListState::default();
    if !state.units.is_empty() {
        list_state.select(Some(state.selected));
    }

    f.render_stateful_widget(list, area, &mut list_state);
}

fn endpoint_row(unit: &EndpointUnit) -> ListItem<'static> {
    let method = unit.descriptor.method_upper();
    let method_span = Span::styled(
        format!("{:7}", method),
        Style::default().fg(method_color(&method)).bold(),
    );
    let path_span = Span::raw(unit.descriptor.path.clone());

    let mut spans = vec![method_span, path_span];

    match unit.status {
        InvocationStatus::Loading => {
            spans.push(Span::styled(" [...]", Style::default().fg(Color::Yellow)));
        }
        InvocationStatus::Succeeded | InvocationStatus::Failed => {
            if let Some(outcome) = &unit.outcome {
                let marker = match outcome.status_code {
                    Some(code) => Span::styled(
                        format!(" [{}]", code),
                        Style::default().fg(status_color(code)),
                    ),
                    None => Span::styled(" [err]", Style::default().fg(Color::Red)),
                };
                spans.push(marker);
            }
        }
        InvocationStatus::Idle => {}
    }

    if !unit.descriptor.description.is_empty() {
        spans.push(Span::styled(
            format!("  {}", unit.descriptor.description),
            Style::default().fg(Color::DarkGray),
        ));
    }

    ListItem::new(Line::from(spans))
}

fn draw_params_panel(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Params;
    let border_style = if is_focused && state.input_mode == InputMode::Editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let unit = state.units.get(state.selected);
    let param_names = unit.map(|u| u.descriptor.param_names.as_slice()).unwrap_or(&[]);

    if param_names.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Path Params ");
        let content = Paragraph::new("No path parameters")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(content, area);
        return;
    }

    let values = unit.map(|u| u.values.as_slice()).unwrap_or(&[]);
    let items: Vec<ListItem> = param_names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let value = values.get(i).map(String::as_str).unwrap_or("");
            let style = if is_focused && i == state.selected_param {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}: {}", name, value)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Path Params (e:edit) "),
    );
    f.render_widget(list, area);

    // Cursor while editing the selected value
    if is_focused && state.input_mode == InputMode::Editing {
        if let Some(name) = param_names.get(state.selected_param) {
            let prefix = name.len() as u16 + 2;
            let max_x = area.x + area.width.saturating_sub(2);
            let cursor_x = (area.x + 1 + prefix + state.cursor_position as u16).min(max_x);
            let max_y = area.y + area.height.saturating_sub(2);
            let cursor_y = (area.y + 1 + state.selected_param as u16).min(max_y);
            f.set_cursor_position(Position::new(cursor_x, cursor_y));
        }
    }
}

fn draw_response_panel(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Response;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let unit = state.units.get(state.selected);

    let (title, lines, scroll): (Span, Vec<Line>, u16) = match unit {
        Some(unit) => match (unit.status, &unit.outcome) {
            (InvocationStatus::Loading, _) => (
                Span::styled(" Loading... ", Style::default().fg(Color::Yellow)),
                vec![Line::from(format!(
                    "Sending {} {}...",
                    unit.descriptor.method_upper(),
                    unit.descriptor.path
                ))],
                0,
            ),
            (_, Some(outcome)) => {
                let title = match outcome.status_code {
                    Some(code) => Span::styled(
                        format!(" {} ", code),
                        Style::default().fg(status_color(code)).bold(),
                    ),
                    None => Span::styled(" no response ", Style::default().fg(Color::Red).bold()),
                };
                (title, render_body(&outcome.body), unit.scroll)
            }
            _ => (
                Span::raw(" Response "),
                vec![Line::from(Span::styled(
                    "Press 's' to send this request",
                    Style::default().fg(Color::DarkGray),
                ))],
                0,
            ),
        },
        None => (Span::raw(" Response "), Vec::new(), 0),
    };

    let time_text = unit
        .and_then(|u| u.outcome.as_ref())
        .filter(|o| o.time_ms > 0)
        .map(|o| format!(" {}ms ", o.time_ms))
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
        .title_bottom(Line::from(time_text).right_aligned());

    let response = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(response, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = if state.input_mode == InputMode::Editing {
        " ESC:stop editing | arrows:move "
    } else {
        " Tab:panel | up/down:navigate | e:edit param | s:send | ?:help | q:quit "
    };

    let status = if state.api_url.is_empty() {
        hints.to_string()
    } else {
        format!("{}| {}", hints, state.api_url)
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 SCOUT TUI - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Switch panels
   Up / Down          Select endpoint / param, scroll response

 REQUEST
   e / Enter          Edit selected path parameter
   s                  Send request for the selected endpoint

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
