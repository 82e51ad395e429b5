//! Theme model for the theme core.
//!
//! Defines the closed set of themes, the process-wide theme state, and the
//! mapping from themes to the `data-theme` attribute values that scoped
//! style selectors key on.

/// Attribute on the styling root that themed style selectors key on.
pub const DATA_THEME_ATTRIBUTE: &str = "data-theme";

/// The closed set of visual themes.
///
/// `Light` and `Dark` are the two switchable themes. `Filmdrop` is the
/// single-theme sentinel used when theme switching is disabled; it is never
/// a toggle target and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
    Filmdrop,
}

impl Theme {
    /// Returns the canonical name ("light", "dark", "filmdrop").
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Filmdrop => "filmdrop",
        }
    }

    /// Looks up a theme by its canonical name.
    pub fn from_name(name: &str) -> Option<Theme> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "filmdrop" => Some(Theme::Filmdrop),
            _ => None,
        }
    }

    /// Returns true for themes that participate in light/dark switching.
    pub fn is_switchable(&self) -> bool {
        !matches!(self, Theme::Filmdrop)
    }

    /// Returns the opposite switchable theme.
    ///
    /// `Filmdrop` has no opposite and maps to itself.
    pub fn opposite(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
            Theme::Filmdrop => Theme::Filmdrop,
        }
    }

    /// Returns the value written to the `data-theme` root attribute.
    ///
    /// `Filmdrop` maps to `"filmdrop"`; the switchable themes are prefixed
    /// with it, so `Dark` maps to `"filmdrop-dark"` and `Light` to
    /// `"filmdrop-light"`.
    pub fn attribute_value(&self) -> &'static str {
        match self {
            Theme::Light => "filmdrop-light",
            Theme::Dark => "filmdrop-dark",
            Theme::Filmdrop => "filmdrop",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-wide theme state.
///
/// Responsibilities:
/// - Tracking the currently active theme
/// - Recording whether runtime switching is permitted
/// - Enforcing the switching invariant on every mutation
///
/// Created exactly once per process by `ThemeCoordinator::initialize` and
/// mutated in place by toggle events for the rest of the session. Fields
/// are private so the invariant holds: with switching disabled the current
/// theme is always `Filmdrop`; with switching enabled it never is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    /// Currently active theme
    current_theme: Theme,
    /// Whether runtime switching is permitted, fixed for the process lifetime
    switching_enabled: bool,
}

impl ThemeState {
    /// Creates the fixed single-theme state used when switching is disabled.
    pub fn fixed() -> Self {
        Self {
            current_theme: Theme::Filmdrop,
            switching_enabled: false,
        }
    }

    /// Creates a switching-enabled state with the given initial theme.
    ///
    /// A non-switchable initial theme falls back to `Theme::Light` so the
    /// light/dark cycle always starts from a valid member.
    pub fn switchable(initial: Theme) -> Self {
        let current_theme = if initial.is_switchable() {
            initial
        } else {
            Theme::Light
        };
        Self {
            current_theme,
            switching_enabled: true,
        }
    }

    // ===== Queries =====

    /// Returns the currently active theme.
    pub fn current_theme(&self) -> Theme {
        self.current_theme
    }

    /// Returns whether runtime switching is permitted.
    pub fn switching_enabled(&self) -> bool {
        self.switching_enabled
    }

    // ===== Mutations =====

    /// Flips the current theme to its opposite and returns the new theme.
    ///
    /// No-op when switching is disabled.
    pub fn toggle(&mut self) -> Theme {
        if self.switching_enabled {
            self.current_theme = self.current_theme.opposite();
        }
        self.current_theme
    }
}
