use crate::app::state::AppState;
use crate::ui::quote_list::{self, Card};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Draft input
            Constraint::Length(1), // Confirmation
            Constraint::Min(3),    // Quote list
        ])
        .split(area);

    render_input(frame, chunks[0], state, theme);

    if let Some(message) = state.session.confirmation() {
        let paragraph = Paragraph::new(Span::styled(message, theme.confirmation()))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, chunks[1]);
    }

    let target = state.session.target();
    let cards = state
        .store
        .all()
        .enumerate()
        .map(|(i, quote)| Card {
            body: quote.as_str(),
            footer: (target == Some(i))
                .then(|| Line::from(Span::styled("  ✎ editing", theme.confirmation()))),
        })
        .collect();
    quote_list::render(
        frame,
        chunks[2],
        theme,
        "Quotes — ↑↓ select · Ctrl-E edit · Ctrl-D delete",
        cards,
        Some(&state.editor_view),
    );
}

fn render_input(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let title = if state.session.is_editing() {
        " ✎ Edit Quote — Enter to save, Esc to cancel "
    } else {
        " + Add Quote — Enter to save, Alt-Enter for a new line "
    };

    let block = Block::default()
        .title(title)
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_type(theme.border_type())
        .border_style(Style::default().fg(theme.accent))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let draft = &state.session.draft;
    if draft.text.is_empty() {
        let placeholder = Paragraph::new(Span::styled("Type a new quote here...", theme.muted()));
        frame.render_widget(placeholder, inner);
    } else {
        let paragraph = Paragraph::new(draft.text.as_str()).style(theme.base());
        frame.render_widget(paragraph, inner);
    }

    // Caret: row = newlines before it, column = display width since the last one.
    let before = &draft.text[..draft.cursor];
    let row = before.matches('\n').count() as u16;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let col = before[line_start..].width() as u16;
    if inner.width > 0 && inner.height > 0 {
        let x = (inner.x + col).min(inner.right() - 1);
        let y = (inner.y + row).min(inner.bottom() - 1);
        frame.set_cursor_position((x, y));
    }
}
