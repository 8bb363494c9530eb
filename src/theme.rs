//! Theme configuration for the viewer and CLI output.
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for the TUI) and ANSI escape codes
//! (for the `print` command).

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the viewer.
///
/// All colors and styles are defined here for easy customization.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (body content)
    pub text_primary: Color,
    /// Secondary/dimmed text color (periods, hints, footer)
    pub text_secondary: Color,
    /// Section headings and the hero name
    pub heading: Color,
    /// Accent color (typed role, links, tags, active nav tab)
    pub accent: Color,
    /// Background for highlighted chrome (progress bar, nav tab)
    pub highlight_bg: Color,
    /// Error color for CLI failure output
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parchment()
    }
}

impl Theme {
    /// Default folio theme, derived from the original site palette
    /// (cream on navy with a beige accent).
    pub fn parchment() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            heading: Color::Rgb(0xF5, 0xF5, 0xDC), // cream
            accent: Color::Rgb(0xE9, 0xE0, 0xC6),  // beige
            highlight_bg: Color::Rgb(0x1D, 0x1D, 0x44), // navy
            error: Color::Red,
        }
    }

    /// Classic terminal theme - white text, yellow accent.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            heading: Color::White,
            accent: Color::Yellow,
            highlight_bg: Color::Indexed(236),
            error: Color::Red,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            heading: Color::LightCyan,
            accent: Color::LightCyan,
            highlight_bg: Color::Indexed(236),
            error: Color::Red,
        }
    }

    /// Look up a theme by its config name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "parchment" => Some(Self::parchment()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    /// All theme names, in cycle order.
    pub const NAMES: &'static [&'static str] = &["parchment", "classic", "ocean"];

    /// The name following `name` in the cycle order (wrapping).
    pub fn next_name(name: &str) -> &'static str {
        let idx = Self::NAMES.iter().position(|n| *n == name).unwrap_or(0);
        Self::NAMES[(idx + 1) % Self::NAMES.len()]
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for section headings.
    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, the typed role).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the active nav tab.
    pub fn active_tab_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.accent), text, ANSI_RESET)
    }

    /// Format text with the heading color, bold (for CLI output).
    pub fn heading_text(&self, text: &str) -> String {
        format!(
            "{}{}{}{}",
            ANSI_BOLD,
            color_to_ansi(self.heading),
            text,
            ANSI_RESET
        )
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            color_to_ansi(self.text_secondary),
            text,
            ANSI_RESET
        )
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.error), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";
/// ANSI bold sequence
const ANSI_BOLD: &str = "\x1b[1m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> String {
    match color {
        Color::Black => "\x1b[30m".to_string(),
        Color::Red => "\x1b[31m".to_string(),
        Color::Green => "\x1b[32m".to_string(),
        Color::Yellow => "\x1b[33m".to_string(),
        Color::Blue => "\x1b[34m".to_string(),
        Color::Magenta => "\x1b[35m".to_string(),
        Color::Cyan => "\x1b[36m".to_string(),
        Color::Gray => "\x1b[37m".to_string(),
        Color::DarkGray => "\x1b[90m".to_string(),
        Color::LightRed => "\x1b[91m".to_string(),
        Color::LightGreen => "\x1b[92m".to_string(),
        Color::LightYellow => "\x1b[93m".to_string(),
        Color::LightBlue => "\x1b[94m".to_string(),
        Color::LightMagenta => "\x1b[95m".to_string(),
        Color::LightCyan => "\x1b[96m".to_string(),
        Color::White => "\x1b[97m".to_string(),
        Color::Rgb(r, g, b) => format!("\x1b[38;2;{};{};{}m", r, g, b),
        Color::Indexed(i) => format!("\x1b[38;5;{}m", i),
        Color::Reset => "\x1b[0m".to_string(),
    }
}

/// Global theme instance.
///
/// Used by CLI output paths that have no viewer state to thread a theme
/// through; the viewer itself carries its own (cycleable) theme.
pub fn current_theme() -> Theme {
    Theme::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_parchment() {
        let theme = Theme::default();
        assert_eq!(theme.heading, Color::Rgb(0xF5, 0xF5, 0xDC));
        assert_eq!(theme.highlight_bg, Color::Rgb(0x1D, 0x1D, 0x44));
    }

    #[test]
    fn classic_theme_uses_white() {
        let theme = Theme::classic();
        assert_eq!(theme.text_primary, Color::White);
    }

    #[test]
    fn ocean_theme_uses_cyan() {
        let theme = Theme::ocean();
        assert_eq!(theme.text_primary, Color::Cyan);
    }

    #[test]
    fn by_name_resolves_all_cycle_names() {
        for name in Theme::NAMES {
            assert!(Theme::by_name(name).is_some());
        }
        assert!(Theme::by_name("neon").is_none());
    }

    #[test]
    fn next_name_cycles_and_wraps() {
        assert_eq!(Theme::next_name("parchment"), "classic");
        assert_eq!(Theme::next_name("classic"), "ocean");
        assert_eq!(Theme::next_name("ocean"), "parchment");
        // Unknown names restart the cycle
        assert_eq!(Theme::next_name("bogus"), "classic");
    }

    #[test]
    fn style_helpers_return_correct_colors() {
        let theme = Theme::classic();
        assert_eq!(theme.text_style().fg, Some(Color::White));
        assert_eq!(theme.text_secondary_style().fg, Some(Color::DarkGray));
        assert_eq!(theme.accent_style().fg, Some(Color::Yellow));
    }

    #[test]
    fn ansi_text_helpers_wrap_with_color_codes() {
        let theme = Theme::classic();

        let accent = theme.accent_text("test");
        assert!(accent.starts_with("\x1b[33m")); // Yellow
        assert!(accent.ends_with("\x1b[0m"));
        assert!(accent.contains("test"));

        let primary = theme.primary_text("hello");
        assert!(primary.starts_with("\x1b[97m")); // White
        assert!(primary.ends_with("\x1b[0m"));

        let error = theme.error_text("boom");
        assert!(error.starts_with("\x1b[31m")); // Red
        assert!(error.contains("boom"));
    }

    #[test]
    fn rgb_colors_map_to_truecolor_sequences() {
        assert_eq!(
            color_to_ansi(Color::Rgb(245, 245, 220)),
            "\x1b[38;2;245;245;220m"
        );
        assert_eq!(color_to_ansi(Color::Indexed(236)), "\x1b[38;5;236m");
    }
}
