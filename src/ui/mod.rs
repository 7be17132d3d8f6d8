mod editor;
mod home;
mod layout;
mod online;
mod quote_list;
mod theme;

use crate::app::state::{AppState, Screen};
use quote_list::Card;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use std::time::Instant;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let theme = Theme::new(state.appearance());
    let now = Instant::now();
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.base()), area);

    let app_layout = layout::compute_layout(area);
    render_header(frame, app_layout.header, &theme);

    let content = app_layout.content;
    match state.screen {
        Screen::Home => home::render(frame, content, state, &theme, now),
        Screen::Favorites => render_favorites(frame, content, state, &theme),
        Screen::Add => editor::render(frame, content, state, &theme),
        Screen::All => {
            let cards = state
                .store
                .all()
                .map(|q| Card {
                    body: q.as_str(),
                    footer: None,
                })
                .collect();
            quote_list::render(frame, content, &theme, "All Quotes", cards, Some(&state.all_view));
        }
        Screen::Online => {
            online::render(frame, content, state, &theme, (state.tick_count / 4) as usize)
        }
        Screen::Settings => render_settings(frame, content, state, &theme),
    }

    render_nav_bar(frame, app_layout.nav_bar, state, &theme);
    render_status_bar(frame, app_layout.status_bar, state, &theme);
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled("Daily ", theme.title()),
        Span::styled(
            "Quote",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ),
    ]);
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().padding(ratatui::widgets::Padding::top(1)));
    frame.render_widget(paragraph, area);
}

fn render_favorites(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let cards: Vec<Card> = state
        .store
        .liked()
        .map(|(_, q)| Card {
            body: q.as_str(),
            footer: None,
        })
        .collect();

    if cards.is_empty() {
        let paragraph = Paragraph::new(Span::styled(
            "No liked quotes yet ❤️",
            theme.muted().add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, layout::centered(area, area.width, 1));
        return;
    }
    quote_list::render(frame, area, theme, "Favorites", cards, Some(&state.favorites_view));
}

fn render_settings(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let switch = if state.dark_mode {
        Span::styled(" ● ON  ", Style::default().fg(Color::White).bg(theme.accent))
    } else {
        Span::styled(" OFF ○ ", Style::default().fg(theme.text_color()).bg(theme.surface))
    };
    let lines = vec![
        Line::from(Span::styled("Dark Mode", theme.title())),
        Line::from(""),
        Line::from(switch),
        Line::from(""),
        Line::from(Span::styled("Space to toggle", theme.muted())),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, layout::centered(area, area.width, 5));
}

fn render_nav_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, Screen::ALL.len() as u32); Screen::ALL.len()])
        .split(inner);

    for (i, screen) in Screen::ALL.iter().enumerate() {
        let active = *screen == state.screen;
        let label = Line::from(vec![
            Span::styled(format!("F{} ", i + 1), theme.muted()),
            Span::styled(screen.label(), theme.nav(active)),
        ]);
        let underline = if active { "━━━" } else { "" };
        let paragraph = Paragraph::new(vec![
            label,
            Line::from(Span::styled(underline, theme.nav(true))),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, cells[i]);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let left = format!(" {} ", state.status_line());
    let right = " Tab switch · q quit ";
    let remaining = (area.width as usize).saturating_sub(left.len() + right.len());
    let line = Line::from(vec![
        Span::styled(left, theme.status_bar()),
        Span::styled(" ".repeat(remaining), theme.status_bar()),
        Span::styled(right, theme.status_bar()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
