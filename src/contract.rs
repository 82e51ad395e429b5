//! Selector-contract validation for loaded stylesheets.
//!
//! Startup refuses to proceed when the style bundle does not carry the root
//! selectors required by the configured switching mode. The check catches a
//! deployment whose stylesheet does not match its feature flags before the
//! UI renders unstyled; it is a pre-flight gate, never a repair step.

use thiserror::Error;

use crate::traits::StyleRuleProvider;

/// Raised when the loaded stylesheets are missing a required root selector.
///
/// This is the only error the theme core raises. It is fatal to
/// initialization and surfaced to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeContractError {
    #[error(
        "theme switching is enabled but no :root[data-theme=\"filmdrop-dark\"] rule was found; \
         switching requires both the filmdrop-dark and filmdrop-light root selectors"
    )]
    MissingDarkSelector,

    #[error(
        "theme switching is enabled but no :root[data-theme=\"filmdrop-light\"] rule was found; \
         switching requires both the filmdrop-dark and filmdrop-light root selectors"
    )]
    MissingLightSelector,

    #[error(
        "theme switching is disabled but no :root[data-theme=\"filmdrop\"] rule was found; \
         single-theme mode requires a :root[data-theme=\"filmdrop\"] selector"
    )]
    MissingSingleThemeSelector,
}

/// Returns true when `selector` scopes the styling root to the attribute
/// value `value`, in either single- or double-quoted attribute syntax.
fn matches_root_selector(selector: &str, value: &str) -> bool {
    selector.contains(&format!(":root[data-theme=\"{}\"]", value))
        || selector.contains(&format!(":root[data-theme='{}']", value))
}

/// Validates that the loaded stylesheets satisfy the selector contract for
/// the given switching mode.
///
/// With switching enabled, both the `filmdrop-dark` and `filmdrop-light`
/// root selectors must be present (dark is checked first); with switching
/// disabled, the single `filmdrop` root selector must be.
///
/// `rules` is `None` on hosts without style introspection; validation then
/// succeeds as a no-op. Sheets whose rules cannot be read are skipped; a
/// skipped sheet only matters if it causes a required selector never to be
/// found elsewhere.
pub fn validate_css_contract(
    rules: Option<&dyn StyleRuleProvider>,
    switching_enabled: bool,
) -> Result<(), ThemeContractError> {
    let provider = match rules {
        Some(provider) => provider,
        None => return Ok(()),
    };

    let mut has_single_theme = false;
    let mut has_dark = false;
    let mut has_light = false;

    for index in 0..provider.sheet_count() {
        let selectors = match provider.sheet_selectors(index) {
            Some(selectors) => selectors,
            None => {
                tracing::debug!(sheet = index, "skipping stylesheet with unreadable rules");
                continue;
            }
        };

        for selector in &selectors {
            has_single_theme |= matches_root_selector(selector, "filmdrop");
            has_dark |= matches_root_selector(selector, "filmdrop-dark");
            has_light |= matches_root_selector(selector, "filmdrop-light");
        }
    }

    if switching_enabled {
        if !has_dark {
            return Err(ThemeContractError::MissingDarkSelector);
        }
        if !has_light {
            return Err(ThemeContractError::MissingLightSelector);
        }
    } else if !has_single_theme {
        return Err(ThemeContractError::MissingSingleThemeSelector);
    }

    Ok(())
}
