/// Locales whose remote export lives under a different identifier.
const REMOTE_OVERRIDES: &[(&str, &str)] = &[("pt", "pt-br"), ("zh", "zh-cn")];

/// Maps a local locale code onto the identifier the remote platform
/// publishes its export under. Most locales pass through unchanged.
pub fn remote_locale(locale: &str) -> &str {
    REMOTE_OVERRIDES
        .iter()
        .find(|(local, _)| *local == locale)
        .map(|(_, remote)| *remote)
        .unwrap_or(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_locale_passes_through() {
        assert_eq!(remote_locale("af"), "af");
        assert_eq!(remote_locale("de"), "de");
    }

    #[test]
    fn portuguese_maps_to_brazilian_identifier() {
        assert_eq!(remote_locale("pt"), "pt-br");
    }

    #[test]
    fn chinese_maps_to_simplified_identifier() {
        assert_eq!(remote_locale("zh"), "zh-cn");
    }

    #[test]
    fn override_targets_are_not_remapped() {
        assert_eq!(remote_locale("pt-br"), "pt-br");
        assert_eq!(remote_locale("zh-cn"), "zh-cn");
    }
}
