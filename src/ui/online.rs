use crate::app::state::{AppState, RemoteStatus};
use crate::ui::layout::centered;
use crate::ui::quote_list::{self, Card};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, frame_no: usize) {
    match state.remote.status {
        RemoteStatus::Idle | RemoteStatus::Loading => {
            let text = format!("{} Loading quotes...", SPINNER[frame_no % SPINNER.len()]);
            let paragraph = Paragraph::new(Span::styled(text, Style::default().fg(theme.accent)))
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, centered(area, area.width, 1));
        }
        RemoteStatus::Loaded if state.remote.quotes.is_empty() => {
            let paragraph = Paragraph::new(Span::styled(
                "No quotes available. Press r to try again.",
                theme.muted().add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(paragraph, centered(area, area.width, 1));
        }
        RemoteStatus::Loaded => {
            let bodies: Vec<String> = state
                .remote
                .quotes
                .iter()
                .map(|q| format!("\"{}\"", q.text))
                .collect();
            let cards = bodies
                .iter()
                .zip(&state.remote.quotes)
                .map(|(body, q)| Card {
                    body: body.as_str(),
                    footer: Some(
                        Line::from(Span::styled(format!("- {}", q.author), theme.muted()))
                            .alignment(Alignment::Right),
                    ),
                })
                .collect();
            quote_list::render(
                frame,
                area,
                theme,
                "Online Quotes · r to refresh",
                cards,
                Some(&state.remote.view),
            );
        }
    }
}
