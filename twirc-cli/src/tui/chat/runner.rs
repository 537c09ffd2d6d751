//! Chat runner - main event loop coordinator

use super::input::{InputAction, handle_input};
use super::state::ChatState;
use super::ui::ChatUI;
use crate::tui::terminal::{Tui, init_terminal, restore_terminal};
use crossterm::event;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, warn};
use twirc_core::config::ConnectionSettings;
use twirc_core::{AccessPanel, FeedReceiver, KeyOutcome, LineEnding, SessionHandle, TextRegion};

/// How long to wait for a key before draining the feed again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the TUI chat interface until the user quits
pub async fn run_chat(
    settings: &ConnectionSettings,
    line_ending: LineEnding,
    session: &SessionHandle,
    mut feed: FeedReceiver,
) -> Result<(), Box<dyn Error>> {
    let outbound = session.outbound();
    let region = TextRegion::new().with_line_ending(line_ending);
    let panel = AccessPanel::with_region(region, move |line: String| {
        if outbound.send(line).is_err() {
            warn!("Session has ended, input not sent");
        }
    });
    let mut state = ChatState::new(panel, settings);

    let mut terminal = init_terminal(&settings.channel)?;
    let result = run_chat_loop(&mut terminal, &mut state, session, &mut feed).await;

    restore_terminal()?;
    result
}

/// Internal chat loop
async fn run_chat_loop(
    terminal: &mut Tui,
    state: &mut ChatState,
    session: &SessionHandle,
    feed: &mut FeedReceiver,
) -> Result<(), Box<dyn Error>> {
    loop {
        feed.drain_into(state.panel.region_mut());
        state.session_ended = session.is_finished();

        terminal.draw(|frame| {
            ChatUI::render(frame, state);
        })?;

        if event::poll(POLL_INTERVAL)? {
            let event = event::read()?;
            match handle_input(state, event) {
                InputAction::Exit => {
                    debug!("Exit requested");
                    return Ok(());
                }
                InputAction::Panel(KeyOutcome::Submitted(line)) => {
                    debug!(chars = line.chars().count(), "Line handed to session");
                }
                InputAction::Panel(_)
                | InputAction::ScrollUp
                | InputAction::ScrollDown
                | InputAction::None => {}
            }
        } else {
            tokio::task::yield_now().await;
        }
    }
}
