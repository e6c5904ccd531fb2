//! Terminal styling for laid-out cells.
//!
//! Turns a [`StyleDecision`] into ratatui `Style`s and border types,
//! honoring `--no-color` and `NO_COLOR`.

use crate::layout::{StyleDecision, StyleKind};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on or off regardless of the environment.
    pub fn fixed(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== CellStyles =====

/// Styles for the parts of a cell that are not the container itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyles {
    colors: ColorConfig,
    /// Date separator label.
    pub date_separator: Style,
    /// Sender name label.
    pub sender_name: Style,
    /// Time label.
    pub time_label: Style,
    /// Failed-send strip.
    pub failed_strip: Style,
    /// Avatar initials.
    pub avatar: Style,
    /// Status bar.
    pub status_bar: Style,
}

impl CellStyles {
    /// Styles for the given color configuration.
    ///
    /// With colors disabled only modifiers remain.
    pub fn new(colors: ColorConfig) -> Self {
        if colors.colors_enabled() {
            Self {
                colors,
                date_separator: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
                sender_name: Style::default().fg(Color::Cyan),
                time_label: Style::default().fg(Color::DarkGray),
                failed_strip: Style::default().fg(Color::Red),
                avatar: Style::default().fg(Color::Black).bg(Color::Cyan),
                status_bar: Style::default().fg(Color::Black).bg(Color::Gray),
            }
        } else {
            Self {
                colors,
                date_separator: Style::default().add_modifier(Modifier::BOLD),
                sender_name: Style::default(),
                time_label: Style::default(),
                failed_strip: Style::default(),
                avatar: Style::default().add_modifier(Modifier::REVERSED),
                status_bar: Style::default().add_modifier(Modifier::REVERSED),
            }
        }
    }

    /// Whether colors are enabled.
    pub fn colors_enabled(&self) -> bool {
        self.colors.colors_enabled()
    }

    /// Fill and text style of a container.
    pub fn container(&self, decision: &StyleDecision) -> Style {
        if !self.colors_enabled() {
            return match decision.kind {
                StyleKind::Warning => Style::default().add_modifier(Modifier::BOLD),
                _ => Style::default(),
            };
        }
        let style = Style::default().fg(decision.text_color);
        if decision.background_color == Color::Reset {
            style
        } else {
            style.bg(decision.background_color)
        }
    }

    /// Style of a container's border.
    pub fn border(&self, decision: &StyleDecision) -> Style {
        let base = self.container(decision);
        match (decision.border, self.colors_enabled()) {
            (Some(border), true) => base.fg(border.color),
            _ => base,
        }
    }
}

impl Default for CellStyles {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}

/// Border drawn around a container.
///
/// Rounded shapes get rounded corners, the warning banner a plain stroke.
pub fn border_type(decision: &StyleDecision) -> BorderType {
    match decision.kind {
        StyleKind::Warning => BorderType::Plain,
        StyleKind::Announcement | StyleKind::LeftBubble | StyleKind::RightBubble => {
            BorderType::Rounded
        }
    }
}

// ===== Tests =====
