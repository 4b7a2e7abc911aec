use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(22, 24, 30);
    pub const BG_SURFACE: Color = Color::Rgb(30, 33, 41);
    pub const BG_ELEVATED: Color = Color::Rgb(40, 44, 54);
    pub const BORDER_DIM: Color = Color::Rgb(70, 76, 90);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 223, 228);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 166, 178);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 116, 130);
    pub const ACCENT_TEAL: Color = Color::Rgb(94, 200, 190);
    pub const ACCENT_AMBER: Color = Color::Rgb(240, 180, 90);
    pub const ACCENT_LAVENDER: Color = Color::Rgb(170, 150, 230);
    pub const ACCENT_GREEN: Color = Color::Rgb(130, 200, 120);
    pub const ERROR_RED: Color = Color::Rgb(244, 67, 54);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_text() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR_RED)
    }

    pub fn step_active() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn step_done() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn button_enabled() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_LAVENDER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_disabled() -> Style {
        Style::default().fg(Self::TEXT_MUTED).bg(Self::BG_ELEVATED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn selected() -> Style {
        Style::default().fg(Self::ACCENT_LAVENDER)
    }
}
