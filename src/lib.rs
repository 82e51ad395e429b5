//! Theme resolution core for the FilmDrop console.
//!
//! This crate decides which visual theme is active, persists the user's
//! choice, derives theme-dependent resources (basemap tiles, brand logo)
//! from the static application configuration, and enforces a structural
//! contract between that configuration and the style rules actually loaded.
//!
//! The host environment is reached only through the capability seams in
//! [`traits`]; hosts with partial capability degrade to documented safe
//! defaults, and the selector contract check is the single hard gate that
//! can abort startup.

pub mod applier;
pub mod config;
pub mod contract;
pub mod coordinator;
pub mod persistence;
pub mod preference;
pub mod resources;
pub mod theme;
pub mod traits;

// Export host-capability seams
pub use traits::{
    AppearanceProbe, PreferenceStorage, StyleRuleProvider, StylingRoot, SystemAppearance,
};

// Export theme model
pub use theme::{Theme, ThemeState, DATA_THEME_ATTRIBUTE};

// Export configuration types
pub use config::{
    AppConfig, BasemapConfig, BasemapSource, BrandLogoConfig, BrandLogoSource,
};

// Export contract validation
pub use contract::{validate_css_contract, ThemeContractError};

// Export coordination, persistence and preference policy
pub use applier::ThemeApplier;
pub use coordinator::ThemeCoordinator;
pub use persistence::{FileStore, ThemePersistence, THEME_STORAGE_KEY};
pub use preference::system_theme;

// Export resource derivation
pub use resources::{basemap_config, brand_logo_config};
