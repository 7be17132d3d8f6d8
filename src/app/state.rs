use crate::app::action::Action;
use crate::config::{AppConfig, Emphasis};
use crate::quotes::{Committed, EditSession, Quote, QuoteError, QuoteStore, SelectionCursor, Transition};
use crate::remote::RemoteQuote;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Favorites,
    Add,
    All,
    Online,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Home,
        Screen::Favorites,
        Screen::Add,
        Screen::All,
        Screen::Online,
        Screen::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Favorites => "Favorites",
            Screen::Add => "Add",
            Screen::All => "All",
            Screen::Online => "Online",
            Screen::Settings => "Settings",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Screen {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Screen {
        let pos = self.position();
        let prev = if pos == 0 { Self::ALL.len() - 1 } else { pos - 1 };
        Self::ALL[prev]
    }

    /// F1..F6 map onto the screens in nav bar order.
    pub fn from_function_key(n: u8) -> Option<Screen> {
        (n as usize)
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Selected row of a list panel. Scrolling follows the selection at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    pub selected: usize,
}

impl ListView {
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, total: usize) {
        if self.selected + 1 < total {
            self.selected += 1;
        }
    }

    /// Keep the selection inside a list that may have shrunk.
    pub fn clamp(&mut self, total: usize) {
        self.selected = self.selected.min(total.saturating_sub(1));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteStatus {
    Idle,
    Loading,
    Loaded,
}

#[derive(Debug)]
pub struct RemoteState {
    pub status: RemoteStatus,
    pub quotes: Vec<RemoteQuote>,
    pub request_id: u64,
    pub view: ListView,
}

impl RemoteState {
    fn new() -> Self {
        Self {
            status: RemoteStatus::Idle,
            quotes: Vec::new(),
            request_id: 0,
            view: ListView::default(),
        }
    }
}

/// Appearance flags handed to the renderer for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub dark_mode: bool,
    pub emphasis: Emphasis,
}

pub struct AppState {
    pub config: AppConfig,
    pub store: QuoteStore,
    pub cursor: SelectionCursor,
    pub transition: Transition,
    pub session: EditSession,
    pub screen: Screen,
    pub dark_mode: bool,
    pub favorites_view: ListView,
    pub editor_view: ListView,
    pub all_view: ListView,
    pub remote: RemoteState,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let transition = Transition::new(config.behavior.fade_phase());
        let session = EditSession::new(config.behavior.confirmation_ttl());
        let dark_mode = config.ui.dark_mode;
        Self {
            config,
            store: QuoteStore::with_built_in(),
            cursor: SelectionCursor::new(),
            transition,
            session,
            screen: Screen::Home,
            dark_mode,
            favorites_view: ListView::default(),
            editor_view: ListView::default(),
            all_view: ListView::default(),
            remote: RemoteState::new(),
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn appearance(&self) -> Appearance {
        Appearance {
            dark_mode: self.dark_mode,
            emphasis: self.config.ui.emphasis,
        }
    }

    /// Switch screens. Entering the online screen always starts a fetch.
    pub fn set_screen(&mut self, screen: Screen) -> Vec<Action> {
        self.screen = screen;
        self.dirty = true;
        if screen == Screen::Online {
            return vec![self.begin_fetch()];
        }
        vec![]
    }

    pub fn begin_fetch(&mut self) -> Action {
        self.remote.request_id += 1;
        self.remote.status = RemoteStatus::Loading;
        self.dirty = true;
        Action::FetchRemote {
            request_id: self.remote.request_id,
        }
    }

    /// Store a fetch result unless a newer request superseded it.
    pub fn finish_fetch(&mut self, request_id: u64, quotes: Vec<RemoteQuote>) -> bool {
        if request_id != self.remote.request_id {
            return false;
        }
        self.remote.quotes = quotes;
        self.remote.status = RemoteStatus::Loaded;
        self.remote.view = ListView::default();
        self.dirty = true;
        true
    }

    pub fn current_quote(&self) -> Result<&Quote, QuoteError> {
        self.cursor.current(&self.store)
    }

    pub fn current_is_liked(&self) -> bool {
        self.current_quote().is_ok() && self.store.is_liked(self.cursor.position())
    }

    pub fn next_quote(&mut self, now: Instant) {
        if self.store.is_empty() {
            return;
        }
        self.cursor.advance(self.store.len());
        self.transition.start(now);
        self.dirty = true;
    }

    pub fn toggle_like_current(&mut self) -> Result<bool, QuoteError> {
        self.current_quote()?;
        let liked = self.store.toggle_like(self.cursor.position())?;
        self.dirty = true;
        Ok(liked)
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.dirty = true;
    }

    pub fn commit_draft(&mut self, now: Instant) -> Result<Committed, QuoteError> {
        let committed = self.session.commit(&mut self.store, now)?;
        if let Committed::Added(index) = committed {
            self.editor_view.selected = index;
        }
        self.dirty = true;
        Ok(committed)
    }

    pub fn edit_selected(&mut self) -> Result<(), QuoteError> {
        let index = self.editor_view.selected;
        self.session.begin_edit(&self.store, index)?;
        self.dirty = true;
        Ok(())
    }

    pub fn delete_selected(&mut self, now: Instant) -> Result<Quote, QuoteError> {
        let index = self.editor_view.selected;
        let removed = self.session.delete_target(&mut self.store, index, now)?;
        self.editor_view.clamp(self.store.len());
        self.dirty = true;
        Ok(removed)
    }

    /// Fire due timers. Returns `true` when anything visible changed.
    pub fn poll_timers(&mut self, now: Instant) -> bool {
        let cleared = self.session.poll(now);
        let stepped = self.transition.poll(now);
        let changed = cleared || stepped || self.transition.is_running();
        if changed {
            self.dirty = true;
        }
        changed
    }

    pub fn status_line(&self) -> String {
        let mode = if self.dark_mode { "dark" } else { "light" };
        format!(
            "Quotes: {} | Liked: {} | {} mode",
            self.store.len(),
            self.store.liked_count(),
            mode
        )
    }
}
