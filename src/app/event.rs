use crate::remote::RemoteQuote;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Result of an online quotes fetch; empty on failure.
    RemoteLoaded { request_id: u64, quotes: Vec<RemoteQuote> },

    /// Tick for timers and fade refresh
    Tick,
}
