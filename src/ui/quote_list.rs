use crate::app::state::ListView;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};
use unicode_width::UnicodeWidthChar;

/// Break `text` into lines no wider than `width` columns, keeping its own
/// line breaks and splitting words only when a single word overflows.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_w = 0usize;
        for word in paragraph.split(' ') {
            let word_w: usize = word.chars().map(|c| c.width().unwrap_or(0)).sum();
            let sep = usize::from(!line.is_empty());
            if line_w + sep + word_w <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_w += sep + word_w;
                continue;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_w = 0;
            }
            for c in word.chars() {
                let cw = c.width().unwrap_or(0);
                if line_w + cw > width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_w = 0;
                }
                line.push(c);
                line_w += cw;
            }
        }
        lines.push(line);
    }
    lines
}

/// One card per entry, separated by a blank line.
pub struct Card<'a> {
    pub body: &'a str,
    pub footer: Option<Line<'a>>,
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &str,
    cards: Vec<Card<'_>>,
    view: Option<&ListView>,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_type(theme.border_type())
        .border_style(theme.border())
        .padding(Padding::horizontal(1));

    let inner_w = block.inner(area).width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = cards
        .into_iter()
        .map(|card| {
            let mut lines: Vec<Line> = wrap_text(card.body, inner_w)
                .into_iter()
                .map(|l| Line::from(format!(" {}", l)))
                .collect();
            if let Some(footer) = card.footer {
                lines.push(footer);
            }
            lines.push(Line::from(""));
            ListItem::new(lines).style(theme.card())
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(theme.base())
        .highlight_style(theme.selected_card())
        .highlight_symbol("▌");

    let mut list_state = ListState::default().with_selected(view.map(|v| v.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_on_words() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_keeps_newlines() {
        assert_eq!(wrap_text("a\nb c", 10), vec!["a", "b c"]);
    }

    #[test]
    fn test_wrap_splits_long_word() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_wide_chars() {
        assert_eq!(wrap_text("多言語", 4), vec!["多言", "語"]);
    }
}
