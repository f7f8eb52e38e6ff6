//! TUI run loop: terminal setup, event handling, draw.
//!
//! Key events are read in a dedicated thread so the main loop never blocks on
//! terminal input. Backend events arrive on a tokio channel from the
//! controller; commands flow back the same way.

use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc as tokio_mpsc;

use crate::events::{UiCommand, UiEvent, apply_ui_event};
use crate::state::{ChatItem, Focus, Screen, TuiState};
use crate::theme::Appearance;
use crate::view;

const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// Run the TUI against a backend controller.
///
/// `event_rx` delivers [UiEvent]s from the controller, `command_tx` carries
/// [UiCommand]s back. `log_rx`, when given, feeds the runtime log screen
/// (Ctrl+D) with tracing output.
pub fn run_tui(
    appearance: Appearance,
    agent_name: String,
    mut event_rx: tokio_mpsc::Receiver<UiEvent>,
    command_tx: tokio_mpsc::Sender<UiCommand>,
    log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = TuiState::with_appearance(appearance);
    state.agent_name = agent_name;
    state.push_log_line("[log] TUI started. Ctrl+D shows runtime logs.".to_string());
    let result = run_loop(&mut terminal, &mut state, &mut event_rx, &command_tx, log_rx);

    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    event_rx: &mut tokio_mpsc::Receiver<UiEvent>,
    command_tx: &tokio_mpsc::Sender<UiCommand>,
    mut log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    let (key_tx, key_rx) = mpsc::channel();
    let _reader = std::thread::spawn(move || {
        loop {
            if event::poll(Duration::from_millis(50)).unwrap_or(false)
                && let Ok(ev) = event::read()
            {
                let _ = key_tx.send(ev);
            }
        }
    });

    loop {
        // Drain runtime log lines (multi-line logs split into separate lines)
        if let Some(ref mut rx) = log_rx {
            while let Ok(line) = rx.try_recv() {
                for l in line.split('\n') {
                    state.push_log_line(l.to_string());
                }
            }
        }
        // Drain backend events
        while let Ok(ev) = event_rx.try_recv() {
            apply_ui_event(state, ev);
        }
        if state.auto_scroll {
            state.scroll = 0;
        }

        // Clear transient status after timeout
        if let Some(set_at) = state.status_set_at
            && set_at.elapsed() > STATUS_TIMEOUT
        {
            state.status.clear();
            state.status_set_at = None;
            state.needs_redraw = true;
        }

        let animating = state.awaiting_reply || state.has_running_tool();
        if state.needs_redraw || animating {
            state.frame_count = state.frame_count.wrapping_add(1);
            terminal.draw(|f| view::draw(f, state, f.area()))?;
            state.needs_redraw = false;
        }

        if let Ok(ev) = key_rx.try_recv() {
            match ev {
                Event::Key(e) => {
                    if e.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key(state, command_tx, e.code, e.modifiers) {
                        break;
                    }
                }
                Event::Resize(_, _) => {
                    state.cache_dirty = true;
                    state.needs_redraw = true;
                }
                Event::Mouse(me) => match me.kind {
                    MouseEventKind::ScrollUp => {
                        if state.screen == Screen::DebugLog {
                            state.log_scroll_up(3);
                        } else {
                            state.scroll_up(3);
                        }
                    }
                    MouseEventKind::ScrollDown => {
                        if state.screen == Screen::DebugLog {
                            state.log_scroll_down(3);
                        } else {
                            state.scroll_down(3);
                        }
                    }
                    _ => {}
                },
                _ => {}
            }
        } else {
            std::thread::sleep(Duration::from_millis(50));
        }
    }
    Ok(())
}

/// Handle one key press. Returns true when the TUI should exit.
fn handle_key(
    state: &mut TuiState,
    command_tx: &tokio_mpsc::Sender<UiCommand>,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> bool {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    match code {
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::Char('d') if ctrl => {
            state.screen = match state.screen {
                Screen::Main => Screen::DebugLog,
                Screen::DebugLog => Screen::Main,
            };
            state.needs_redraw = true;
        }
        KeyCode::Esc if state.screen == Screen::DebugLog => {
            state.screen = Screen::Main;
            state.needs_redraw = true;
        }
        KeyCode::Up if state.screen == Screen::DebugLog => state.log_scroll_up(1),
        KeyCode::Down if state.screen == Screen::DebugLog => state.log_scroll_down(1),
        KeyCode::PageUp if state.screen == Screen::DebugLog => state.log_scroll_up(10),
        KeyCode::PageDown if state.screen == Screen::DebugLog => state.log_scroll_down(10),
        _ if state.screen == Screen::DebugLog => {}

        KeyCode::Char('n') if ctrl => {
            let _ = command_tx.try_send(UiCommand::NewConversation);
            state.set_status("New conversation");
        }
        KeyCode::Char('t') if ctrl => state.toggle_appearance(),
        KeyCode::Char('b') if ctrl => {
            state.sidebar_visible = !state.sidebar_visible;
            if !state.sidebar_visible {
                state.focus = Focus::Composer;
            }
            state.needs_redraw = true;
        }
        KeyCode::Tab => {
            state.focus = match state.focus {
                Focus::Composer if state.sidebar_visible => Focus::Sidebar,
                _ => Focus::Composer,
            };
            state.needs_redraw = true;
        }
        KeyCode::Esc if state.focus == Focus::Sidebar => {
            state.focus = Focus::Composer;
            state.needs_redraw = true;
        }

        // Sidebar focus: navigate and manage conversations
        KeyCode::Up if state.focus == Focus::Sidebar => state.sidebar_select_up(),
        KeyCode::Down if state.focus == Focus::Sidebar => state.sidebar_select_down(),
        KeyCode::Enter if state.focus == Focus::Sidebar => {
            if let Some(id) = state.selected_conversation_id() {
                let _ = command_tx.try_send(UiCommand::SelectConversation(id.to_string()));
                state.focus = Focus::Composer;
                state.needs_redraw = true;
            }
        }
        KeyCode::Char('n') if state.focus == Focus::Sidebar => {
            let _ = command_tx.try_send(UiCommand::NewConversation);
        }
        KeyCode::Char('d') if state.focus == Focus::Sidebar => {
            if let Some(id) = state.selected_conversation_id() {
                let _ = command_tx.try_send(UiCommand::DeleteConversation(id.to_string()));
            }
        }
        KeyCode::Char('q') if state.focus == Focus::Sidebar => return true,
        _ if state.focus == Focus::Sidebar => {}

        // Composer focus
        KeyCode::Enter => submit_input(state, command_tx),
        KeyCode::Char('u') if ctrl => state.input_clear_line(),
        KeyCode::Char('k') if ctrl => state.input_kill_to_end(),
        KeyCode::Char('y') if ctrl && state.input_buffer.is_empty() => {
            copy_last_assistant_to_clipboard(state);
        }
        KeyCode::Char('q') if state.input_buffer.is_empty() => return true,
        KeyCode::Char('e') if state.input_buffer.is_empty() => state.toggle_last_tool(),
        KeyCode::Char(c) => state.input_insert(c),
        KeyCode::Backspace if state.input_buffer.is_empty() => {
            // Unstage the most recent attachment
            if state.staged_attachments.pop().is_some() {
                state.needs_redraw = true;
            }
        }
        KeyCode::Backspace => state.input_backspace(),
        KeyCode::Delete => state.input_delete(),
        KeyCode::Left => state.input_cursor_left(),
        KeyCode::Right => state.input_cursor_right(),
        KeyCode::Home => state.input_cursor_home(),
        KeyCode::End => state.input_cursor_end(),
        KeyCode::Up => state.scroll_up(1),
        KeyCode::Down => state.scroll_down(1),
        KeyCode::PageUp => state.scroll_up(5),
        KeyCode::PageDown => state.scroll_down(5),
        _ => {}
    }
    false
}

/// Enter in the composer: `/attach <path>` stages a file, anything else sends.
fn submit_input(state: &mut TuiState, command_tx: &tokio_mpsc::Sender<UiCommand>) {
    let line = state.input_take();
    let trimmed = line.trim();

    if let Some(path) = trimmed.strip_prefix("/attach ") {
        let path = path.trim();
        if path.is_empty() {
            state.set_status("Usage: /attach <path>");
            return;
        }
        if state.uploading {
            state.set_status("Upload already in progress");
            return;
        }
        state.uploading = true;
        state.set_status("Uploading…");
        let _ = command_tx.try_send(UiCommand::AttachFile(PathBuf::from(path)));
        return;
    }

    if trimmed.is_empty() && state.staged_attachments.is_empty() {
        return;
    }
    if state.uploading {
        state.set_status("Wait for the upload to finish");
        return;
    }
    let attachments = std::mem::take(&mut state.staged_attachments);
    let content = if trimmed.is_empty() {
        "(attached files)".to_string()
    } else {
        trimmed.to_string()
    };
    state.push_user_echo(content.clone(), &attachments);
    let _ = command_tx.try_send(UiCommand::SendMessage {
        content,
        attachments,
    });
}

/// Copy the last assistant message to the system clipboard (Ctrl+Y when input empty).
fn copy_last_assistant_to_clipboard(state: &mut TuiState) {
    let text = state
        .items
        .iter()
        .rev()
        .find_map(|item| {
            if let ChatItem::Assistant(m) = item {
                Some(m.text.clone())
            } else {
                None
            }
        })
        .unwrap_or_default();
    if text.is_empty() {
        return;
    }
    if cli_clipboard::set_contents(text).is_ok() {
        state.set_status("Copied to clipboard");
    }
}
