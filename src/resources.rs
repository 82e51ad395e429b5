//! Theme-dependent resource derivation.
//!
//! Pure lookups from the static configuration plus the active theme to the
//! resolved basemap and brand logo. Nothing here mutates state; results are
//! recomputed on every call.

use crate::config::{AppConfig, BasemapConfig, BasemapSource, BrandLogoConfig};
use crate::theme::Theme;

/// Resolves the basemap tile source for the active theme.
///
/// A single-mode basemap serves every theme. A theme-keyed basemap is
/// consulted only when switching is enabled, and may omit the requested
/// theme; the caller receives that absence as `None`, not an error.
pub fn basemap_config(config: &AppConfig, theme: Theme) -> Option<BasemapConfig> {
    match config.basemap.as_ref()? {
        BasemapSource::Single(basemap) => Some(basemap.clone()),
        BasemapSource::Themed { light, dark } => {
            if !config.theme_switching_enabled {
                return None;
            }
            match theme {
                Theme::Light => light.clone(),
                Theme::Dark => dark.clone(),
                Theme::Filmdrop => None,
            }
        }
    }
}

/// Resolves the brand logo for the active theme.
///
/// The base `image` is overridden by `image_light` / `image_dark` when
/// switching is enabled and the matching variant is present and non-empty.
/// A logo whose resolved image ends up empty or absent is incomplete and
/// suppressed entirely, whatever its other fields carry.
pub fn brand_logo_config(config: &AppConfig, theme: Theme) -> Option<BrandLogoConfig> {
    let logo = config.brand_logo.as_ref()?;

    let mut image = logo.image.clone();
    if config.theme_switching_enabled {
        let variant = match theme {
            Theme::Light => logo.image_light.as_ref(),
            Theme::Dark => logo.image_dark.as_ref(),
            Theme::Filmdrop => None,
        };
        if let Some(variant) = variant.filter(|variant| !variant.is_empty()) {
            image = Some(variant.clone());
        }
    }

    let image = image.filter(|image| !image.is_empty())?;

    Some(BrandLogoConfig {
        url: logo.url.clone(),
        title: logo.title.clone(),
        alt: logo.alt.clone(),
        image,
    })
}
