//! Static application configuration consumed by the theme core.
//!
//! The configuration bag is loaded and parsed by the application bootstrap
//! before initialization and is immutable afterwards. This module only
//! deserializes the fields the theme core recognizes; everything else in
//! the bag is ignored.

use serde::Deserialize;

/// Application configuration fields recognized by the theme core.
///
/// Serialized field names keep the upper-case keys of the deployed
/// configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Whether runtime light/dark switching is permitted. Absent means false.
    #[serde(rename = "THEME_SWITCHING_ENABLED", default)]
    pub theme_switching_enabled: bool,

    /// Basemap tile configuration, single-mode or theme-keyed.
    #[serde(rename = "BASEMAP", default)]
    pub basemap: Option<BasemapSource>,

    /// Brand logo configuration with optional per-theme images.
    #[serde(rename = "BRAND_LOGO", default)]
    pub brand_logo: Option<BrandLogoSource>,
}

impl AppConfig {
    /// Extracts the recognized fields from an already-parsed configuration
    /// value.
    ///
    /// The bootstrap hands the theme core the parsed config object as-is;
    /// loading and parsing the file is the bootstrap's job.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// Declared basemap configuration.
///
/// A single-mode basemap carries its `url` directly and serves every theme;
/// a theme-keyed basemap maps each switchable theme to its own tile source.
/// Detection follows the shape: an entry with a top-level `url` is
/// single-mode regardless of any other keys.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BasemapSource {
    /// One tile source regardless of theme
    Single(BasemapConfig),
    /// Separate tile sources per switchable theme, either of which may be
    /// omitted
    Themed {
        #[serde(default)]
        light: Option<BasemapConfig>,
        #[serde(default)]
        dark: Option<BasemapConfig>,
    },
}

/// A basemap tile source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BasemapConfig {
    /// Tile URL template
    pub url: String,
    /// Attribution line shown with the map, when configured
    #[serde(default)]
    pub attribution: Option<String>,
}

/// Declared brand logo configuration.
///
/// `image` is the default logo; `image_light` / `image_dark` override it
/// per switchable theme when present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BrandLogoSource {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_light: Option<String>,
    #[serde(default)]
    pub image_dark: Option<String>,
}

/// A resolved brand logo with its theme-specific image chosen.
///
/// Derived on demand, never stored. A resolved logo always carries a
/// non-empty image; incomplete configurations are suppressed during
/// resolution instead of producing this type.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandLogoConfig {
    pub url: Option<String>,
    pub title: Option<String>,
    pub alt: Option<String>,
    /// The image actually shown for the active theme
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_switching_flag_defaults_to_false() {
        let config = AppConfig::from_value(json!({})).unwrap();
        assert!(!config.theme_switching_enabled);
        assert!(config.basemap.is_none());
        assert!(config.brand_logo.is_none());
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let config = AppConfig::from_value(json!({
            "THEME_SWITCHING_ENABLED": true,
            "STAC_API_URL": "https://stac.example.com",
            "DEFAULT_ZOOM": 7
        }))
        .unwrap();
        assert!(config.theme_switching_enabled);
    }

    #[test]
    fn test_single_mode_basemap_shape() {
        let config = AppConfig::from_value(json!({
            "BASEMAP": {
                "url": "https://tiles.example.com/{z}/{x}/{y}.png",
                "attribution": "Example"
            }
        }))
        .unwrap();

        match config.basemap.unwrap() {
            BasemapSource::Single(basemap) => {
                assert_eq!(basemap.url, "https://tiles.example.com/{z}/{x}/{y}.png");
                assert_eq!(basemap.attribution.as_deref(), Some("Example"));
            }
            BasemapSource::Themed { .. } => panic!("expected single-mode basemap"),
        }
    }

    #[test]
    fn test_theme_keyed_basemap_shape() {
        let config = AppConfig::from_value(json!({
            "BASEMAP": {
                "light": { "url": "L" },
                "dark": { "url": "D", "attribution": "Dark tiles" }
            }
        }))
        .unwrap();

        match config.basemap.unwrap() {
            BasemapSource::Themed { light, dark } => {
                assert_eq!(light.unwrap().url, "L");
                let dark = dark.unwrap();
                assert_eq!(dark.url, "D");
                assert_eq!(dark.attribution.as_deref(), Some("Dark tiles"));
            }
            BasemapSource::Single(_) => panic!("expected theme-keyed basemap"),
        }
    }

    #[test]
    fn test_theme_keyed_basemap_may_omit_a_theme() {
        let config = AppConfig::from_value(json!({
            "BASEMAP": { "dark": { "url": "D" } }
        }))
        .unwrap();

        match config.basemap.unwrap() {
            BasemapSource::Themed { light, dark } => {
                assert!(light.is_none());
                assert!(dark.is_some());
            }
            BasemapSource::Single(_) => panic!("expected theme-keyed basemap"),
        }
    }

    #[test]
    fn test_brand_logo_fields_all_optional() {
        let config = AppConfig::from_value(json!({
            "BRAND_LOGO": { "image": "logo.png" }
        }))
        .unwrap();

        let logo = config.brand_logo.unwrap();
        assert_eq!(logo.image.as_deref(), Some("logo.png"));
        assert!(logo.url.is_none());
        assert!(logo.image_light.is_none());
        assert!(logo.image_dark.is_none());
    }
}
