//! Identifier sanitization.

/// Normalize a raw repository string into a safe attribute token by
/// replacing every space, underscore, period, and semicolon with a hyphen.
///
/// Pure and total. Used both for per-segment path sanitization and for
/// deriving a package's short name from its whole path. Distinct inputs that
/// differ only in separator choice collapse to the same token; real catalogs
/// never rely on that distinction.
pub fn sanitize(raw: &str) -> String {
    raw.replace([' ', '_', '.', ';'], "-")
}

#[cfg(test)]
mod tests {
    use super::sanitize;

    #[test]
    fn replaces_all_separator_characters() {
        assert_eq!(sanitize("usb_driver"), "usb-driver");
        assert_eq!(sanitize("30.0.3"), "30-0-3");
        assert_eq!(sanitize("extras;google"), "extras-google");
        assert_eq!(sanitize("Android SDK"), "Android-SDK");
    }

    #[test]
    fn idempotent_on_sanitized_input() {
        let once = sanitize("build-tools;30.0.3");
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn passes_clean_strings_through() {
        assert_eq!(sanitize("platform-tools"), "platform-tools");
    }
}
