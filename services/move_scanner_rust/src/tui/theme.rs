//! Colors for the dashboard.

use linewatch_core::MarketKind;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub border: Color,
    pub title: Color,
    pub league: Color,
    pub spread: Color,
    pub total: Color,
    pub moneyline: Color,
    pub highlight: Color,
    pub error: Color,
    pub inactive: Color,
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Cyan,
            title: Color::Cyan,
            league: Color::Yellow,
            spread: Color::Green,
            total: Color::Magenta,
            moneyline: Color::LightBlue,
            highlight: Color::Yellow,
            error: Color::Red,
            inactive: Color::DarkGray,
            text: Color::White,
        }
    }
}

impl Theme {
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn league_style(&self) -> Style {
        Style::default().fg(self.league).add_modifier(Modifier::BOLD)
    }

    /// Pick rows are colored by market
    pub fn market_style(&self, market: MarketKind) -> Style {
        let color = match market {
            MarketKind::Spread => self.spread,
            MarketKind::Total => self.total,
            MarketKind::Moneyline => self.moneyline,
        };
        Style::default().fg(color)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn inactive_style(&self) -> Style {
        Style::default().fg(self.inactive)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);
