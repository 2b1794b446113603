//! Theme and styling configuration.

use std::sync::OnceLock;

use ratatui::style::Color;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Color theme for the widget and the demo application.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Accent color for titles and focused elements.
    pub accent: Color,
    /// Border color for unfocused blocks.
    pub border: Color,
    /// Border color for focused blocks.
    pub border_focused: Color,
    /// Background shading applied to the selected row's label cells.
    pub selection: Color,
    /// De-emphasized text such as separators and hints.
    pub dim: Color,
    /// Text color of dropdown and read-only field cells.
    pub input_fg: Color,
    /// Color for success messages and key hints.
    pub success: Color,
    /// Color for warnings.
    pub warning: Color,
    /// Color for errors.
    pub error: Color,
}

impl Theme {
    /// The default dark theme.
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            selection: Color::DarkGray,
            dim: Color::DarkGray,
            input_fg: Color::Gray,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Install a theme for the lifetime of the process.
///
/// May be called at most once, before the first call to [`theme`]; later
/// calls are ignored.
pub fn init_theme(theme: Theme) {
    let _ = THEME.set(theme);
}

/// The active theme, falling back to [`Theme::dark`] if none was installed.
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::dark)
}
