use crate::app::state::Appearance;
use crate::config::Emphasis;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Palette for one frame, picked from the [`Appearance`] record.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub bg: (u8, u8, u8),
    pub surface: Color,
    pub text: (u8, u8, u8),
    pub text_muted: Color,
    pub border: Color,
    pub accent: Color,
    pub nav_idle: Color,
    pub like: Color,
    pub emphasis: Emphasis,
}

pub const ACCENT_BLUE: Color = Color::Rgb(30, 144, 255);

impl Theme {
    pub fn new(appearance: Appearance) -> Self {
        if appearance.dark_mode {
            Self {
                bg: (18, 18, 18),
                surface: Color::Rgb(40, 40, 40),
                text: (238, 238, 238),
                text_muted: Color::Rgb(153, 153, 153),
                border: Color::Rgb(85, 85, 85),
                accent: ACCENT_BLUE,
                nav_idle: Color::Rgb(187, 187, 187),
                like: Color::Rgb(231, 76, 60),
                emphasis: appearance.emphasis,
            }
        } else {
            Self {
                bg: (248, 241, 228),
                surface: Color::Rgb(240, 240, 240),
                text: (34, 34, 34),
                text_muted: Color::Rgb(85, 85, 85),
                border: Color::Rgb(204, 204, 204),
                accent: ACCENT_BLUE,
                nav_idle: Color::Rgb(116, 70, 7),
                like: Color::Rgb(231, 76, 60),
                emphasis: appearance.emphasis,
            }
        }
    }

    pub fn bg_color(&self) -> Color {
        let (r, g, b) = self.bg;
        Color::Rgb(r, g, b)
    }

    pub fn text_color(&self) -> Color {
        let (r, g, b) = self.text;
        Color::Rgb(r, g, b)
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text_color()).bg(self.bg_color())
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_type(&self) -> BorderType {
        BorderType::Rounded
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text_color())
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn card(&self) -> Style {
        Style::default().fg(self.text_color()).bg(self.surface)
    }

    pub fn selected_card(&self) -> Style {
        Style::default()
            .fg(self.text_color())
            .bg(self.surface)
            .add_modifier(Modifier::BOLD)
    }

    /// Quote text faded toward the background by `visibility` (0.0 to 1.0).
    pub fn quote(&self, visibility: f32) -> Style {
        let style = Style::default().fg(blend(self.bg, self.text, visibility));
        match self.emphasis {
            Emphasis::Plain => style,
            Emphasis::Bold => style.add_modifier(Modifier::BOLD),
            Emphasis::Italic => style.add_modifier(Modifier::ITALIC),
        }
    }

    pub fn liked(&self) -> Style {
        Style::default().fg(self.like).add_modifier(Modifier::BOLD)
    }

    pub fn nav(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.nav_idle)
        }
    }

    pub fn confirmation(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.text_muted).bg(self.surface)
    }
}

fn blend(from: (u8, u8, u8), to: (u8, u8, u8), t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_blends_toward_background() {
        let theme = Theme::new(Appearance {
            dark_mode: true,
            emphasis: Emphasis::Plain,
        });
        assert_eq!(theme.quote(1.0).fg, Some(Color::Rgb(238, 238, 238)));
        assert_eq!(theme.quote(0.0).fg, Some(Color::Rgb(18, 18, 18)));
    }

    #[test]
    fn test_emphasis_modifier() {
        let theme = Theme::new(Appearance {
            dark_mode: false,
            emphasis: Emphasis::Italic,
        });
        assert!(theme.quote(1.0).add_modifier.contains(Modifier::ITALIC));
    }
}
