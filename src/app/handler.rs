use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::quotes::QuoteError;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;
use tracing::{debug, warn};

/// Rows scrolled by PageUp/PageDown in list screens.
const PAGE: usize = 10;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    handle_event_at(state, event, Instant::now())
}

/// Like [`handle_event`] with an explicit clock, for timer-driven behavior.
pub fn handle_event_at(state: &mut AppState, event: AppEvent, now: Instant) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent, now),
        AppEvent::RemoteLoaded { request_id, quotes } => {
            if !state.finish_fetch(request_id, quotes) {
                debug!(request_id, "Dropped superseded remote result");
            }
            vec![]
        }
        AppEvent::Tick => {
            handle_tick(state, now);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState, now: Instant) {
    state.tick_count = state.tick_count.wrapping_add(1);
    state.poll_timers(now);

    // Spinner frames advance every fourth tick while a fetch is in flight
    if state.remote.status == RemoteStatus::Loading
        && state.screen == Screen::Online
        && state.tick_count % 4 == 0
    {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent, now: Instant) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key, now)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

/// Log a rejected core operation. None of these are fatal.
fn report(op: &str, err: QuoteError) {
    match err {
        QuoteError::EmptyText | QuoteError::EmptyCollection => debug!(op, %err, "Ignored"),
        QuoteError::IndexOutOfRange { .. } => warn!(op, %err, "Rejected"),
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Tab => return state.set_screen(state.screen.next()),
        KeyCode::BackTab => return state.set_screen(state.screen.prev()),
        KeyCode::F(n) => {
            if let Some(screen) = Screen::from_function_key(n) {
                return state.set_screen(screen);
            }
            return vec![];
        }
        _ => {}
    }

    // The editor owns every printable key, so `q` only quits elsewhere.
    if state.screen != Screen::Add && key.code == KeyCode::Char('q') {
        return vec![Action::Quit];
    }

    match state.screen {
        Screen::Home => handle_home_key(state, key, now),
        Screen::Favorites => {
            let total = state.store.liked_count();
            scroll_list(&mut state.favorites_view, total, key);
            vec![]
        }
        Screen::Add => handle_editor_key(state, key, now),
        Screen::All => {
            let total = state.store.len();
            scroll_list(&mut state.all_view, total, key);
            vec![]
        }
        Screen::Online => handle_online_key(state, key),
        Screen::Settings => handle_settings_key(state, key),
    }
}

fn handle_home_key(state: &mut AppState, key: KeyEvent, now: Instant) -> Vec<Action> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') => {
            state.next_quote(now);
        }
        KeyCode::Char('l') | KeyCode::Char('f') => {
            if let Err(e) = state.toggle_like_current() {
                report("toggle_like", e);
            }
        }
        _ => {}
    }
    vec![]
}

fn scroll_list(view: &mut ListView, total: usize, key: KeyEvent) {
    match key.code {
        KeyCode::Up => view.move_up(),
        KeyCode::Down => view.move_down(total),
        KeyCode::PageUp => {
            for _ in 0..PAGE {
                view.move_up();
            }
        }
        KeyCode::PageDown => {
            for _ in 0..PAGE {
                view.move_down(total);
            }
        }
        KeyCode::Home => *view = ListView::default(),
        KeyCode::End => {
            if total > 0 {
                view.selected = total - 1;
            }
        }
        _ => {}
    }
}

fn handle_editor_key(state: &mut AppState, key: KeyEvent, now: Instant) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('e') => {
                if let Err(e) = state.edit_selected() {
                    report("begin_edit", e);
                }
            }
            KeyCode::Char('d') => {
                if let Err(e) = state.delete_selected(now) {
                    report("delete", e);
                }
            }
            _ => {}
        }
        return vec![];
    }

    match key.code {
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => state.session.draft.insert_char('\n'),
        KeyCode::Enter => {
            if let Err(e) = state.commit_draft(now) {
                report("commit", e);
            }
        }
        KeyCode::Esc => state.session.begin_add(),
        KeyCode::Char(c) => state.session.draft.insert_char(c),
        KeyCode::Backspace => state.session.draft.delete_back(),
        KeyCode::Delete => state.session.draft.delete_forward(),
        KeyCode::Left => state.session.draft.move_left(),
        KeyCode::Right => state.session.draft.move_right(),
        KeyCode::Home => state.session.draft.move_home(),
        KeyCode::End => state.session.draft.move_end(),
        KeyCode::Up => state.editor_view.move_up(),
        KeyCode::Down => state.editor_view.move_down(state.store.len()),
        _ => {}
    }
    vec![]
}

fn handle_online_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('r') if state.remote.status != RemoteStatus::Loading => {
            vec![state.begin_fetch()]
        }
        _ => {
            let total = state.remote.quotes.len();
            scroll_list(&mut state.remote.view, total, key);
            vec![]
        }
    }
}

fn handle_settings_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('d')) {
        state.toggle_dark_mode();
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::quotes::session::{ADDED_MESSAGE, DELETED_MESSAGE, UPDATED_MESSAGE};
    use std::time::Duration;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn press(state: &mut AppState, code: KeyCode, now: Instant) -> Vec<Action> {
        press_with(state, code, KeyModifiers::NONE, now)
    }

    fn press_with(
        state: &mut AppState,
        code: KeyCode,
        modifiers: KeyModifiers,
        now: Instant,
    ) -> Vec<Action> {
        let event = AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, modifiers)));
        handle_event_at(state, event, now)
    }

    fn type_text(state: &mut AppState, text: &str, now: Instant) {
        for c in text.chars() {
            press(state, KeyCode::Char(c), now);
        }
    }

    #[test]
    fn test_home_next_and_like() {
        let now = Instant::now();
        let mut state = state();
        press(&mut state, KeyCode::Char(' '), now);
        press(&mut state, KeyCode::Char(' '), now);
        assert_eq!(state.cursor.position(), 2);

        press(&mut state, KeyCode::Char('l'), now);
        assert!(state.store.is_liked(2));
        assert!(state.current_is_liked());
        press(&mut state, KeyCode::Char('l'), now);
        assert!(!state.store.is_liked(2));
    }

    #[test]
    fn test_next_wraps_around() {
        let now = Instant::now();
        let mut state = state();
        for _ in 0..9 {
            press(&mut state, KeyCode::Char('n'), now);
        }
        assert_eq!(state.cursor.position(), 9 % 4);
    }

    #[test]
    fn test_add_quote_from_editor() {
        let now = Instant::now();
        let mut state = state();
        press(&mut state, KeyCode::F(3), now);
        assert_eq!(state.screen, Screen::Add);

        type_text(&mut state, "Test quote", now);
        press(&mut state, KeyCode::Enter, now);
        assert_eq!(state.store.len(), 5);
        assert_eq!(state.store.get(4).unwrap().as_str(), "“Test quote”");
        assert_eq!(state.session.confirmation(), Some(ADDED_MESSAGE));

        handle_event_at(&mut state, AppEvent::Tick, now + Duration::from_secs(2));
        assert_eq!(state.session.confirmation(), None);
    }

    #[test]
    fn test_q_is_text_in_editor() {
        let now = Instant::now();
        let mut state = state();
        state.set_screen(Screen::Add);
        assert!(press(&mut state, KeyCode::Char('q'), now).is_empty());
        assert_eq!(state.session.draft.text, "q");

        state.set_screen(Screen::All);
        assert_eq!(press(&mut state, KeyCode::Char('q'), now), vec![Action::Quit]);
    }

    #[test]
    fn test_blank_commit_is_silent() {
        let now = Instant::now();
        let mut state = state();
        state.set_screen(Screen::Add);
        type_text(&mut state, "   ", now);
        press(&mut state, KeyCode::Enter, now);
        assert_eq!(state.store.len(), 4);
        assert_eq!(state.session.confirmation(), None);
    }

    #[test]
    fn test_edit_selected_quote() {
        let now = Instant::now();
        let mut state = state();
        state.set_screen(Screen::Add);
        press(&mut state, KeyCode::Down, now);
        press_with(&mut state, KeyCode::Char('e'), KeyModifiers::CONTROL, now);
        assert_eq!(state.session.target(), Some(1));
        assert_eq!(
            state.session.draft.text,
            "The best way to get started is to quit talking and begin doing."
        );

        press(&mut state, KeyCode::Esc, now);
        assert_eq!(state.session.target(), None);
        press_with(&mut state, KeyCode::Char('e'), KeyModifiers::CONTROL, now);

        for _ in 0..state.session.draft.text.chars().count() {
            press(&mut state, KeyCode::Backspace, now);
        }
        type_text(&mut state, "New", now);
        press(&mut state, KeyCode::Enter, now);
        assert_eq!(state.store.get(1).unwrap().as_str(), "“New”");
        assert_eq!(state.store.len(), 4);
        assert_eq!(state.session.confirmation(), Some(UPDATED_MESSAGE));
    }

    #[test]
    fn test_alt_enter_inserts_newline() {
        let now = Instant::now();
        let mut state = state();
        state.set_screen(Screen::Add);
        type_text(&mut state, "a", now);
        press_with(&mut state, KeyCode::Enter, KeyModifiers::ALT, now);
        type_text(&mut state, "b", now);
        assert_eq!(state.session.draft.text, "a\nb");
        assert_eq!(state.store.len(), 4);
    }

    #[test]
    fn test_delete_keeps_stale_like() {
        let now = Instant::now();
        let mut state = state();
        state.store.toggle_like(2).unwrap();
        state.set_screen(Screen::Add);
        press(&mut state, KeyCode::Down, now);
        press_with(&mut state, KeyCode::Char('d'), KeyModifiers::CONTROL, now);

        assert_eq!(state.store.len(), 3);
        assert_eq!(state.session.confirmation(), Some(DELETED_MESSAGE));
        assert!(state.store.is_liked(2));
    }

    #[test]
    fn test_online_screen_emits_fetch() {
        let now = Instant::now();
        let mut state = state();
        let actions = press(&mut state, KeyCode::F(5), now);
        assert_eq!(actions, vec![Action::FetchRemote { request_id: 1 }]);
        assert!(press(&mut state, KeyCode::Char('r'), now).is_empty());

        handle_event_at(
            &mut state,
            AppEvent::RemoteLoaded {
                request_id: 1,
                quotes: Vec::new(),
            },
            now,
        );
        assert_eq!(state.remote.status, RemoteStatus::Loaded);
        assert_eq!(
            press(&mut state, KeyCode::Char('r'), now),
            vec![Action::FetchRemote { request_id: 2 }]
        );
    }

    #[test]
    fn test_settings_toggle_dark_mode() {
        let now = Instant::now();
        let mut state = state();
        press(&mut state, KeyCode::BackTab, now);
        assert_eq!(state.screen, Screen::Settings);
        press(&mut state, KeyCode::Enter, now);
        assert!(state.dark_mode);
        press(&mut state, KeyCode::Char(' '), now);
        assert!(!state.dark_mode);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let now = Instant::now();
        for screen in Screen::ALL {
            let mut state = state();
            state.set_screen(screen);
            assert_eq!(
                press_with(&mut state, KeyCode::Char('c'), KeyModifiers::CONTROL, now),
                vec![Action::Quit]
            );
        }
    }
}
