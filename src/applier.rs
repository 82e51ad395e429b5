//! Applies the resolved theme to the styling root.

use crate::theme::{Theme, DATA_THEME_ATTRIBUTE};
use crate::traits::StylingRoot;

/// Writes the resolved theme identifier onto the styling root so scoped
/// style selectors can react.
pub struct ThemeApplier;

impl ThemeApplier {
    /// Sets the `data-theme` root attribute to the theme's mapped value.
    ///
    /// A host without a styling root makes this a no-op rather than an
    /// error.
    pub fn apply(root: Option<&mut dyn StylingRoot>, theme: Theme) {
        if let Some(root) = root {
            root.set_root_attribute(DATA_THEME_ATTRIBUTE, theme.attribute_value());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockRoot {
        attributes: Vec<(String, String)>,
    }

    impl StylingRoot for MockRoot {
        fn set_root_attribute(&mut self, name: &str, value: &str) {
            self.attributes.push((name.to_string(), value.to_string()));
        }
    }

    #[test]
    fn test_apply_writes_mapped_attribute_value() {
        let mut root = MockRoot::default();

        ThemeApplier::apply(Some(&mut root), Theme::Filmdrop);
        ThemeApplier::apply(Some(&mut root), Theme::Dark);
        ThemeApplier::apply(Some(&mut root), Theme::Light);

        assert_eq!(
            root.attributes,
            vec![
                ("data-theme".to_string(), "filmdrop".to_string()),
                ("data-theme".to_string(), "filmdrop-dark".to_string()),
                ("data-theme".to_string(), "filmdrop-light".to_string()),
            ]
        );
    }

    #[test]
    fn test_apply_without_root_is_a_no_op() {
        ThemeApplier::apply(None, Theme::Dark);
    }
}
