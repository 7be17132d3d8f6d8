use crate::quotes::error::QuoteError;
use crate::quotes::store::{Quote, QuoteStore};
use crate::quotes::timer::Timer;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub const ADDED_MESSAGE: &str = "✅ Quote added!";
pub const UPDATED_MESSAGE: &str = "✅ Quote updated!";
pub const DELETED_MESSAGE: &str = "🗑️ Quote deleted!";

pub const DEFAULT_CONFIRMATION_TTL: Duration = Duration::from_secs(2);

/// Raw, unquoted text being composed, with a byte-offset caret.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub text: String,
    pub cursor: usize,
}

impl Draft {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

/// Which branch a successful commit took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Committed {
    Added(usize),
    Updated(usize),
}

/// Transient state of the add/edit form.
///
/// Holds the draft, the index being edited (`None` while adding) and the
/// confirmation shown after a commit or delete. The confirmation has a
/// single timer; every new message reschedules it.
#[derive(Debug, Clone)]
pub struct EditSession {
    pub draft: Draft,
    target: Option<usize>,
    confirmation: Option<&'static str>,
    confirmation_ttl: Duration,
    clear_timer: Timer,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIRMATION_TTL)
    }
}

impl EditSession {
    pub fn new(confirmation_ttl: Duration) -> Self {
        Self {
            draft: Draft::new(),
            target: None,
            confirmation: None,
            confirmation_ttl,
            clear_timer: Timer::new(),
        }
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    pub fn confirmation(&self) -> Option<&'static str> {
        self.confirmation
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft.set(text);
    }

    pub fn begin_add(&mut self) {
        self.target = None;
        self.draft.clear();
    }

    /// Load the quote at `index` into the draft without its quotation marks.
    pub fn begin_edit(&mut self, store: &QuoteStore, index: usize) -> Result<(), QuoteError> {
        let text = store.get(index)?.unwrapped();
        self.target = Some(index);
        self.draft.set(text);
        Ok(())
    }

    /// Add or update depending on the target. Nothing changes on error.
    pub fn commit(
        &mut self,
        store: &mut QuoteStore,
        now: Instant,
    ) -> Result<Committed, QuoteError> {
        if self.draft.text.trim().is_empty() {
            debug!("Rejected empty draft");
            return Err(QuoteError::EmptyText);
        }

        let committed = match self.target {
            Some(index) => {
                store.edit_at(index, &self.draft.text)?;
                self.confirm(UPDATED_MESSAGE, now);
                Committed::Updated(index)
            }
            None => {
                let index = store.add(&self.draft.text)?;
                self.confirm(ADDED_MESSAGE, now);
                Committed::Added(index)
            }
        };
        info!(?committed, "Quote committed");

        self.target = None;
        self.draft.clear();
        Ok(committed)
    }

    /// Delete the quote at `index` and reset the form, whatever it held.
    pub fn delete_target(
        &mut self,
        store: &mut QuoteStore,
        index: usize,
        now: Instant,
    ) -> Result<Quote, QuoteError> {
        let removed = store.delete_at(index)?;
        info!(index, "Quote deleted");
        self.target = None;
        self.draft.clear();
        self.confirm(DELETED_MESSAGE, now);
        Ok(removed)
    }

    fn confirm(&mut self, message: &'static str, now: Instant) {
        self.confirmation = Some(message);
        self.clear_timer.schedule(now, self.confirmation_ttl);
    }

    /// Clear an expired confirmation. Returns `true` if one was cleared.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.clear_timer.poll(now) {
            self.confirmation = None;
            true
        } else {
            false
        }
    }
}
