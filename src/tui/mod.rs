// File: ./src/tui/mod.rs
// Entry point and main loop for the chat-style terminal front-end.
pub mod state;
pub mod view;

use crate::session::{Response, Session};
use crate::tui::state::{ChatState, Speaker};
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Runs the chat loop until the user says `bye` (or presses Esc, which also
/// exits cleanly). Saving happens exactly once, at exit.
pub fn run(mut session: Session, greeting: Vec<String>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = ChatState::new(greeting);
    let result = event_loop(&mut terminal, &mut state, &mut session);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut ChatState,
    session: &mut Session,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, state))?;

        if state.should_quit {
            if let Err(e) = session.save() {
                // The alternate screen is about to disappear; keep the
                // warning in the log file as well.
                log::warn!("{}", e);
            }
            return Ok(());
        }

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        match event::read()? {
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => state.scroll_up(1),
                MouseEventKind::ScrollDown => state.scroll_down(1),
                _ => {}
            },
            Event::Key(key) => {
                // Filter out KeyRelease events to prevent double input on Windows
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                match key.code {
                    KeyCode::Esc => state.should_quit = true,
                    KeyCode::Enter => submit(state, session),
                    KeyCode::Backspace => {
                        state.input.pop();
                    }
                    KeyCode::Up => state.scroll_up(1),
                    KeyCode::Down => state.scroll_down(1),
                    KeyCode::PageUp => state.scroll_up(10),
                    KeyCode::PageDown => state.scroll_down(10),
                    KeyCode::Char(c) => state.input.push(c),
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

/// Applies the typed line through the session and appends both sides of the
/// exchange to the transcript. Blank input is ignored here, not in the core.
fn submit(state: &mut ChatState, session: &mut Session) {
    let line = std::mem::take(&mut state.input);
    if line.trim().is_empty() {
        return;
    }
    state.push(Speaker::You, vec![line.trim().to_string()]);
    match session.handle(&line) {
        Ok(Response::Bye) => {
            state.push(Speaker::Tally, Response::Bye.lines());
            state.should_quit = true;
        }
        Ok(response) => state.push(Speaker::Tally, response.lines()),
        Err(e) => state.push(Speaker::Tally, vec![format!("OOPS!!! {}", e)]),
    }
    state.follow_tail();
}
