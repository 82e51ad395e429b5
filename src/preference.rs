//! System appearance preference policy.

use crate::theme::Theme;
use crate::traits::{AppearanceProbe, SystemAppearance};

/// Returns the theme matching the host's ambient appearance.
///
/// `Theme::Light` is the safe default when there is no probe or the probe
/// exposes no usable signal.
pub fn system_theme(probe: Option<&dyn AppearanceProbe>) -> Theme {
    match probe.and_then(|probe| probe.appearance()) {
        Some(SystemAppearance::Dark) => Theme::Dark,
        Some(SystemAppearance::Light) | None => Theme::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProbe(Option<SystemAppearance>);

    impl AppearanceProbe for FixedProbe {
        fn appearance(&self) -> Option<SystemAppearance> {
            self.0
        }
    }

    #[test]
    fn test_dark_signal_maps_to_dark() {
        let probe = FixedProbe(Some(SystemAppearance::Dark));
        assert_eq!(system_theme(Some(&probe)), Theme::Dark);
    }

    #[test]
    fn test_light_signal_maps_to_light() {
        let probe = FixedProbe(Some(SystemAppearance::Light));
        assert_eq!(system_theme(Some(&probe)), Theme::Light);
    }

    #[test]
    fn test_missing_signal_defaults_to_light() {
        let probe = FixedProbe(None);
        assert_eq!(system_theme(Some(&probe)), Theme::Light);
        assert_eq!(system_theme(None), Theme::Light);
    }
}
