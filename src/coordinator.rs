//! Theme resolution and toggle coordination.
//!
//! Startup resolution and runtime toggling are the only two operations that
//! mutate theme state. The coordinator owns neither state nor host handles;
//! callers thread the owned `ThemeState` and the host capabilities through
//! each call.

use crate::applier::ThemeApplier;
use crate::config::AppConfig;
use crate::contract::{validate_css_contract, ThemeContractError};
use crate::persistence::ThemePersistence;
use crate::preference::system_theme;
use crate::theme::{Theme, ThemeState};
use crate::traits::{AppearanceProbe, PreferenceStorage, StyleRuleProvider, StylingRoot};

/// Coordinates startup theme resolution and runtime theme toggling.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Resolves the initial theme state at application boot.
    ///
    /// The selector contract for the configured mode is validated first; a
    /// contract violation aborts initialization and is the only way this
    /// function fails. With switching disabled the fixed single theme is
    /// returned without consulting storage or the appearance probe.
    ///
    /// With switching enabled the theme resolves in strict precedence
    /// order: the stored explicit choice outranks the ambient system
    /// signal, which outranks the hardcoded light default.
    pub fn initialize(
        config: &AppConfig,
        rules: Option<&dyn StyleRuleProvider>,
        storage: Option<&dyn PreferenceStorage>,
        probe: Option<&dyn AppearanceProbe>,
    ) -> Result<ThemeState, ThemeContractError> {
        let switching_enabled = config.theme_switching_enabled;

        validate_css_contract(rules, switching_enabled)?;

        if !switching_enabled {
            return Ok(ThemeState::fixed());
        }

        let theme = match ThemePersistence::read(storage) {
            Some(stored) => stored,
            None => system_theme(probe),
        };

        Ok(ThemeState::switchable(theme))
    }

    /// Switches to the opposite theme and propagates it to the host.
    ///
    /// One atomic read-decide-write sequence: flip the state to the
    /// opposite switchable theme, apply the mapped attribute value to the
    /// styling root, persist the new theme as the user's explicit choice.
    /// When switching is disabled nothing changes and nothing is persisted.
    /// Returns the theme now active.
    pub fn toggle(
        state: &mut ThemeState,
        root: Option<&mut dyn StylingRoot>,
        storage: Option<&mut dyn PreferenceStorage>,
    ) -> Theme {
        if !state.switching_enabled() {
            return state.current_theme();
        }

        let theme = state.toggle();
        ThemeApplier::apply(root, theme);
        ThemePersistence::write(storage, theme);
        theme
    }
}
