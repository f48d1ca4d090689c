//! The main event loop.
//!
//! Input events and the animation ticker are awaited together. The ticker
//! is one `interval` created before the loop, so a steady stream of input
//! (mouse motion fires far more often than every frame) cannot starve the
//! typewriter, smooth scrolling or status expiry.

use std::io;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::Event;
use futures::{pin_mut, Stream, StreamExt};
use ratatui::{backend::Backend, Terminal};
use tokio::time::MissedTickBehavior;

use super::App;
use crate::ui;

/// Run until the app asks to quit or `events` ends.
pub async fn run_app<B, S>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: S,
    tick_rate: Duration,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    S: Stream<Item = io::Result<Event>>,
{
    pin_mut!(events);
    let started = Instant::now();
    let mut ticker = tokio::time::interval(tick_rate);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while !app.should_quit {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            // Checked first so a busy input stream never delays a due tick.
            biased;

            _ = ticker.tick() => {
                app.tick(started.elapsed().as_millis() as u64);
            }

            event_result = events.next() => {
                match event_result {
                    Some(Ok(event)) => app.handle_event(event),
                    Some(Err(e)) => {
                        tracing::error!("Event stream error: {}", e);
                        return Err(e.into());
                    }
                    None => break,
                }
            }
        }
    }

    Ok(())
}
