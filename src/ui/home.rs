use crate::app::state::AppState;
use crate::quotes::QuoteError;
use crate::ui::layout::centered;
use crate::ui::quote_list::wrap_text;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use std::time::Instant;

const MAX_QUOTE_WIDTH: u16 = 60;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, now: Instant) {
    let quote = match state.current_quote() {
        Ok(quote) => quote,
        Err(QuoteError::EmptyCollection) => {
            return render_empty(frame, area, theme, "No quotes yet. Add one with F3.");
        }
        Err(_) => {
            return render_empty(frame, area, theme, "This quote was removed. Press Space for the next one.");
        }
    };

    let width = MAX_QUOTE_WIDTH.min(area.width.saturating_sub(4)).max(1);
    let visibility = state.transition.visibility(now);
    let mut lines: Vec<Line> = wrap_text(quote.as_str(), width as usize)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, theme.quote(visibility))))
        .collect();

    lines.push(Line::from(""));
    let heart = if state.current_is_liked() {
        Span::styled("♥ liked", theme.liked())
    } else {
        Span::styled("♡ like", theme.muted())
    };
    lines.push(Line::from(vec![
        Span::styled("↻ next [space]", theme.muted()),
        Span::raw("    "),
        heart,
        Span::styled(" [l]", theme.muted()),
    ]));

    let height = lines.len() as u16;
    let box_area = centered(area, width, height);
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, box_area);
}

fn render_empty(frame: &mut Frame, area: Rect, theme: &Theme, text: &str) {
    let box_area = centered(area, area.width, 1);
    let paragraph = Paragraph::new(Span::styled(text, theme.muted().add_modifier(Modifier::ITALIC)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, box_area);
}
