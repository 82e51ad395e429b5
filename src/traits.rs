//! Host-capability seams for the theme core.
//!
//! The core never talks to a concrete rendering engine, storage medium, or
//! OS appearance API directly. Each capability is a small trait implemented
//! by the embedding host; a host that lacks a capability passes `None`
//! wherever an `Option<&dyn ...>` is accepted and the core degrades to its
//! documented default instead of failing.

/// Trait for enumerating the selector texts of currently loaded stylesheets.
///
/// This trait provides methods to:
/// - Query the number of loaded stylesheets
/// - Access the selector texts of an individual sheet by index
///
/// Sheets are addressed by index so a provider can expose partially
/// accessible rule sets: `sheet_selectors` returns `None` for a sheet whose
/// rules cannot be read (for example a cross-origin stylesheet), and the
/// contract scan skips that sheet rather than treating it as a failure.
pub trait StyleRuleProvider {
    /// Get the number of loaded stylesheets
    fn sheet_count(&self) -> usize;

    /// Get the selector texts of the sheet at `index`, or `None` when the
    /// sheet's rules cannot be accessed
    fn sheet_selectors(&self, index: usize) -> Option<Vec<String>>;
}

/// Trait for string key-value storage of user preferences.
///
/// Both operations are best-effort: the store is a side channel with no
/// transactional guarantee, and callers treat a silently dropped write as
/// acceptable.
pub trait PreferenceStorage {
    /// Returns the stored value for `key`, if any
    fn get_string(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`
    fn set_string(&mut self, key: &str, value: String);
}

/// Ambient light/dark appearance reported by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemAppearance {
    Light,
    Dark,
}

/// Trait for querying the host's ambient color-scheme signal.
pub trait AppearanceProbe {
    /// Returns the current ambient appearance, or `None` when the host
    /// exposes no usable signal.
    ///
    /// Implementations must be side-effect-free and idempotent.
    fn appearance(&self) -> Option<SystemAppearance>;
}

/// Trait for the document root (or equivalent) that themed style selectors
/// key on.
pub trait StylingRoot {
    /// Sets attribute `name` to `value` on the styling root
    fn set_root_attribute(&mut self, name: &str, value: &str);
}
