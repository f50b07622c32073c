// Theme system for the TUI
//
// Color themes switchable at runtime with `t`. The starting theme comes from
// the `theme` config key; unknown names fall back to Dark.

use ratatui::style::{Color, Modifier, Style};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Monokai,
    Dracula,
    Nord,
    Solarized,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Monokai,
            ThemeKind::Dracula,
            ThemeKind::Nord,
            ThemeKind::Solarized,
        ]
    }

    /// Look up a theme by name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Monokai => "Monokai",
            ThemeKind::Dracula => "Dracula",
            ThemeKind::Nord => "Nord",
            ThemeKind::Solarized => "Solarized",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Monokai => Theme::monokai(),
            ThemeKind::Dracula => Theme::dracula(),
            ThemeKind::Nord => Theme::nord(),
            ThemeKind::Solarized => Theme::solarized(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,

    // Title and status
    pub title: Color,
    pub status_bar: Color,

    // Selection
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Cards and form
    pub accent: Color,
    pub muted: Color,
    pub success: Color,
    pub error: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            border: Color::Gray,
            border_focused: Color::Cyan,

            title: Color::Cyan,
            status_bar: Color::Green,

            selected_bg: Color::DarkGray,
            selected_fg: Color::Yellow,

            accent: Color::LightBlue,
            muted: Color::DarkGray,
            success: Color::Green,
            error: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
            log_trace: Color::DarkGray,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            border: Color::DarkGray,
            border_focused: Color::Blue,

            title: Color::Blue,
            status_bar: Color::DarkGray,

            selected_bg: Color::LightBlue,
            selected_fg: Color::Black,

            accent: Color::Blue,
            muted: Color::Gray,
            success: Color::Green,
            error: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11), // Dark goldenrod
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
            log_trace: Color::Gray,
        }
    }

    pub fn monokai() -> Self {
        Self {
            bg: Color::Rgb(39, 40, 34),
            fg: Color::Rgb(248, 248, 242),
            border: Color::Rgb(117, 113, 94),
            border_focused: Color::Rgb(166, 226, 46),

            title: Color::Rgb(166, 226, 46),       // Green
            status_bar: Color::Rgb(102, 217, 239), // Cyan

            selected_bg: Color::Rgb(73, 72, 62),
            selected_fg: Color::Rgb(230, 219, 116), // Yellow

            accent: Color::Rgb(102, 217, 239),
            muted: Color::Rgb(117, 113, 94),
            success: Color::Rgb(166, 226, 46),
            error: Color::Rgb(249, 38, 114), // Pink/Red

            log_error: Color::Rgb(249, 38, 114),
            log_warn: Color::Rgb(230, 219, 116),
            log_info: Color::Rgb(102, 217, 239),
            log_debug: Color::Rgb(117, 113, 94),
            log_trace: Color::Rgb(117, 113, 94),
        }
    }

    pub fn dracula() -> Self {
        Self {
            bg: Color::Rgb(40, 42, 54),
            fg: Color::Rgb(248, 248, 242),
            border: Color::Rgb(68, 71, 90),
            border_focused: Color::Rgb(189, 147, 249), // Purple

            title: Color::Rgb(139, 233, 253),     // Cyan
            status_bar: Color::Rgb(80, 250, 123), // Green

            selected_bg: Color::Rgb(68, 71, 90),
            selected_fg: Color::Rgb(241, 250, 140), // Yellow

            accent: Color::Rgb(255, 121, 198), // Pink
            muted: Color::Rgb(98, 114, 164),   // Comment color
            success: Color::Rgb(80, 250, 123),
            error: Color::Rgb(255, 85, 85),

            log_error: Color::Rgb(255, 85, 85),
            log_warn: Color::Rgb(241, 250, 140),
            log_info: Color::Rgb(139, 233, 253),
            log_debug: Color::Rgb(98, 114, 164),
            log_trace: Color::Rgb(68, 71, 90),
        }
    }

    pub fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(236, 239, 244),
            border: Color::Rgb(76, 86, 106),
            border_focused: Color::Rgb(136, 192, 208), // Frost

            title: Color::Rgb(136, 192, 208),
            status_bar: Color::Rgb(163, 190, 140), // Green

            selected_bg: Color::Rgb(67, 76, 94),
            selected_fg: Color::Rgb(235, 203, 139), // Yellow

            accent: Color::Rgb(129, 161, 193), // Frost 2
            muted: Color::Rgb(76, 86, 106),
            success: Color::Rgb(163, 190, 140),
            error: Color::Rgb(191, 97, 106),

            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(129, 161, 193),
            log_debug: Color::Rgb(76, 86, 106),
            log_trace: Color::Rgb(59, 66, 82),
        }
    }

    /// Solarized dark
    pub fn solarized() -> Self {
        Self {
            bg: Color::Rgb(0, 43, 54),
            fg: Color::Rgb(131, 148, 150),
            border: Color::Rgb(88, 110, 117),
            border_focused: Color::Rgb(38, 139, 210), // Blue

            title: Color::Rgb(38, 139, 210),
            status_bar: Color::Rgb(133, 153, 0), // Green

            selected_bg: Color::Rgb(7, 54, 66),
            selected_fg: Color::Rgb(181, 137, 0), // Yellow

            accent: Color::Rgb(42, 161, 152), // Cyan
            muted: Color::Rgb(88, 110, 117),
            success: Color::Rgb(133, 153, 0),
            error: Color::Rgb(220, 50, 47),

            log_error: Color::Rgb(220, 50, 47),
            log_warn: Color::Rgb(181, 137, 0),
            log_info: Color::Rgb(38, 139, 210),
            log_debug: Color::Rgb(88, 110, 117),
            log_trace: Color::Rgb(101, 123, 131),
        }
    }

    // Helper methods for creating styles

    /// Base style with theme foreground
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused {
            self.border_focused
        } else {
            self.border
        };
        Style::default().fg(color)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status_bar)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn success_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_ignores_case() {
        assert_eq!(ThemeKind::from_name("dark"), Some(ThemeKind::Dark));
        assert_eq!(ThemeKind::from_name(" NORD "), Some(ThemeKind::Nord));
        assert_eq!(ThemeKind::from_name("vaporwave"), None);
    }

    #[test]
    fn next_cycles_through_all() {
        let mut kind = ThemeKind::Dark;
        for _ in 0..ThemeKind::all().len() {
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::Dark);
        assert_eq!(ThemeKind::Solarized.next(), ThemeKind::Dark);
    }
}
