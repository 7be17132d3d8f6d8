use crate::quotes::error::QuoteError;
use crate::quotes::store::{Quote, QuoteStore};
use crate::quotes::timer::Timer;
use std::time::{Duration, Instant};

/// Position of the quote shown on the home screen.
///
/// The cursor is not adjusted when quotes are deleted; a stale position is
/// reported by [`SelectionCursor::current`] and fixed by the next advance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    position: usize,
}

impl SelectionCursor {
    pub fn new() -> Self {
        Self { position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Move to the next quote, wrapping at `len`. No-op on an empty store.
    pub fn advance(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.position = (self.position + 1) % len;
    }

    pub fn current<'a>(&self, store: &'a QuoteStore) -> Result<&'a Quote, QuoteError> {
        if store.is_empty() {
            return Err(QuoteError::EmptyCollection);
        }
        store.get(self.position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    Hiding,
    Revealing,
}

/// Two-phase fade played when the cursor advances: hide, then reveal.
///
/// Each phase lasts `phase` and is ended by its own timer; the reveal is
/// only scheduled once the hide has finished. Starting again mid-way
/// restarts from the hide phase.
#[derive(Debug, Clone)]
pub struct Transition {
    phase: TransitionPhase,
    phase_len: Duration,
    started: Option<Instant>,
    timer: Timer,
}

impl Transition {
    pub fn new(phase_len: Duration) -> Self {
        Self {
            phase: TransitionPhase::Idle,
            phase_len,
            started: None,
            timer: Timer::new(),
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }

    pub fn start(&mut self, now: Instant) {
        self.enter(TransitionPhase::Hiding, now);
    }

    fn enter(&mut self, phase: TransitionPhase, now: Instant) {
        self.phase = phase;
        if phase == TransitionPhase::Idle {
            self.started = None;
            self.timer.cancel();
        } else {
            self.started = Some(now);
            self.timer.schedule(now, self.phase_len);
        }
    }

    /// Step past any finished phase. Returns `true` when the phase changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.timer.poll(now) {
            return false;
        }
        match self.phase {
            TransitionPhase::Hiding => self.enter(TransitionPhase::Revealing, now),
            TransitionPhase::Revealing | TransitionPhase::Idle => {
                self.enter(TransitionPhase::Idle, now)
            }
        }
        true
    }

    /// Opacity of the quote text between 0.0 (hidden) and 1.0 (shown).
    pub fn visibility(&self, now: Instant) -> f32 {
        let progress = match self.started {
            Some(started) if !self.phase_len.is_zero() => {
                (now.saturating_duration_since(started).as_secs_f32()
                    / self.phase_len.as_secs_f32())
                .min(1.0)
            }
            _ => 1.0,
        };
        match self.phase {
            TransitionPhase::Idle => 1.0,
            TransitionPhase::Hiding => 1.0 - progress,
            TransitionPhase::Revealing => progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        for len in 1..6 {
            let mut cursor = SelectionCursor::new();
            for n in 1..=12 {
                cursor.advance(len);
                assert_eq!(cursor.position(), n % len);
            }
        }
    }

    #[test]
    fn test_advance_on_empty_store_is_noop() {
        let mut cursor = SelectionCursor::new();
        cursor.advance(0);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_current_on_empty_store() {
        let cursor = SelectionCursor::new();
        let store = QuoteStore::new();
        assert_eq!(cursor.current(&store), Err(QuoteError::EmptyCollection));
    }

    #[test]
    fn test_current_after_delete_goes_stale() {
        let mut store = QuoteStore::with_built_in();
        let mut cursor = SelectionCursor::new();
        for _ in 0..3 {
            cursor.advance(store.len());
        }
        store.delete_at(0).unwrap();
        assert_eq!(
            cursor.current(&store),
            Err(QuoteError::IndexOutOfRange { index: 3, len: 3 })
        );

        cursor.advance(store.len());
        assert_eq!(cursor.position(), 1);
        assert!(cursor.current(&store).is_ok());
    }

    #[test]
    fn test_transition_phases_in_order() {
        let t0 = Instant::now();
        let step = Duration::from_millis(250);
        let mut fade = Transition::new(step);
        assert_eq!(fade.visibility(t0), 1.0);

        fade.start(t0);
        assert_eq!(fade.phase(), TransitionPhase::Hiding);
        assert!(!fade.poll(t0 + Duration::from_millis(100)));
        assert!(fade.visibility(t0 + Duration::from_millis(125)) < 1.0);

        let t1 = t0 + step;
        assert!(fade.poll(t1));
        assert_eq!(fade.phase(), TransitionPhase::Revealing);
        assert_eq!(fade.visibility(t1), 0.0);

        assert!(!fade.poll(t1 + Duration::from_millis(200)));
        assert!(fade.poll(t1 + step));
        assert_eq!(fade.phase(), TransitionPhase::Idle);
        assert!(!fade.is_running());
    }

    #[test]
    fn test_restart_mid_transition() {
        let t0 = Instant::now();
        let step = Duration::from_millis(250);
        let mut fade = Transition::new(step);
        fade.start(t0);
        fade.poll(t0 + step);
        assert_eq!(fade.phase(), TransitionPhase::Revealing);

        let t1 = t0 + Duration::from_millis(300);
        fade.start(t1);
        assert_eq!(fade.phase(), TransitionPhase::Hiding);
        // The old reveal deadline (t0 + 500ms) no longer applies.
        assert!(!fade.poll(t0 + Duration::from_millis(500)));
        assert!(fade.poll(t1 + step));
        assert_eq!(fade.phase(), TransitionPhase::Revealing);
    }
}
