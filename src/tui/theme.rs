use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn status_bar() -> Style {
        Style::default()
            .fg(Color::Reset)
            .bg(Color::DarkGray)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
