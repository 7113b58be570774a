//! Theme and Styling
//!
//! Defines colors and styles for the TUI interface.

use crate::shell::Level;
use ratatui::style::{Color, Modifier, Style};

/// Application theme
pub struct Theme;

impl Theme {
    // === Primary Colors ===

    /// Primary accent color (indigo)
    pub const ACCENT: Color = Color::Rgb(99, 102, 241);

    /// Success color (green)
    pub const SUCCESS: Color = Color::Rgb(34, 197, 94);

    /// Info color (sky blue)
    pub const INFO: Color = Color::Rgb(56, 189, 248);

    /// Error color (red)
    pub const ERROR: Color = Color::Rgb(239, 68, 68);

    /// Location color (orange)
    pub const LOCATION: Color = Color::Rgb(234, 88, 12);

    // === Text Colors ===

    /// Primary text color
    pub const TEXT_PRIMARY: Color = Color::Rgb(229, 229, 229);

    /// Secondary text color (muted)
    pub const TEXT_SECONDARY: Color = Color::Rgb(161, 161, 161);

    /// Dimmed text
    pub const TEXT_DIM: Color = Color::Rgb(82, 82, 82);

    // === Border Colors ===

    /// Default border color
    pub const BORDER: Color = Color::Rgb(51, 51, 51);

    /// Focused border color
    pub const BORDER_FOCUSED: Color = Color::Rgb(129, 140, 248);

    // === Styles ===

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    /// Secondary/muted text style
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Dimmed text style
    pub fn text_dim() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    /// Title style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Heading style
    pub fn heading() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn salary() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn location() -> Style {
        Style::default().fg(Self::LOCATION)
    }

    /// Error style
    pub fn error() -> Style {
        Style::default().fg(Self::ERROR)
    }

    /// Default border style
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Focused border style
    pub fn border_focused() -> Style {
        Style::default().fg(Self::BORDER_FOCUSED)
    }

    /// Selected item style
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Active navigation entry
    pub fn nav_active() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Keyboard shortcut style
    pub fn shortcut_key() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Shortcut description style
    pub fn shortcut_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Cursor inside the focused form field
    pub fn cursor() -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Border color of a toast
    pub fn toast(level: Level) -> Style {
        let color = match level {
            Level::Success => Self::SUCCESS,
            Level::Info => Self::INFO,
            Level::Error => Self::ERROR,
        };
        Style::default().fg(color)
    }
}

/// Status icons
pub struct Icons;

impl Icons {
    pub const SUCCESS: &'static str = "✓";
    pub const INFO: &'static str = "ℹ";
    pub const ERROR: &'static str = "✗";
    pub const LOCATION: &'static str = "⌖";
    pub const SELECTED: &'static str = "▶";
    pub const SPINNER: [&'static str; 4] = ["◐", "◓", "◑", "◒"];

    pub fn for_level(level: Level) -> &'static str {
        match level {
            Level::Success => Self::SUCCESS,
            Level::Info => Self::INFO,
            Level::Error => Self::ERROR,
        }
    }
}
