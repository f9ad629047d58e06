//! Locale detection
//!
//! The showcase only needs one bit from the environment: whether the user
//! runs a British English locale. The raw tag is also handed to the date
//! formatter so the non-UK branch can pick that locale's full date style.

use std::env;

/// Reports the user's language tag, e.g. `en-GB`.
pub trait LocaleProvider: Send + Sync {
    fn language_tag(&self) -> Option<String>;
}

/// Reads the POSIX locale variables in precedence order.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvLocaleProvider;

const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

impl EnvLocaleProvider {
    fn tag_from<F>(lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        LOCALE_VARS
            .iter()
            .filter_map(|var| lookup(var))
            .find_map(|raw| normalize_tag(&raw))
    }
}

impl LocaleProvider for EnvLocaleProvider {
    fn language_tag(&self) -> Option<String> {
        Self::tag_from(|var| env::var(var).ok())
    }
}

/// A locale pinned by configuration or the command line.
#[derive(Debug, Clone)]
pub struct FixedLocale(Option<String>);

impl FixedLocale {
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(normalize_tag(tag.as_ref()))
    }

    #[cfg(test)]
    pub fn unset() -> Self {
        Self(None)
    }
}

impl LocaleProvider for FixedLocale {
    fn language_tag(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Turn `en_GB.UTF-8@euro` into `en-GB`. `C`, `POSIX` and empty values carry
/// no language and map to `None`.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let base = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    if base.is_empty() || base.eq_ignore_ascii_case("C") || base.eq_ignore_ascii_case("POSIX") {
        return None;
    }

    Some(base.replace('_', "-"))
}

/// Which date branch the showcase renders. Fixed for the life of a mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocaleMode {
    Uk,
    #[default]
    Other,
}

impl LocaleMode {
    /// Anything that does not start with `en-GB`, including no tag at all, is
    /// treated as `Other`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(tag) if tag.starts_with("en-GB") => LocaleMode::Uk,
            Some(tag) => {
                tracing::debug!("Locale {} is not en-GB, using default date style", tag);
                LocaleMode::Other
            }
            None => {
                tracing::debug!("No locale reported, using default date style");
                LocaleMode::Other
            }
        }
    }

    pub fn is_uk(self) -> bool {
        matches!(self, LocaleMode::Uk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serial_test::serial;
    use std::collections::HashMap;

    #[rstest]
    #[case("en_GB.UTF-8", Some("en-GB"))]
    #[case("en_GB.UTF-8@euro", Some("en-GB"))]
    #[case("de_DE", Some("de-DE"))]
    #[case("en-US", Some("en-US"))]
    #[case("C", None)]
    #[case("POSIX", None)]
    #[case("C.UTF-8", None)]
    #[case("", None)]
    fn test_normalize_tag(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(normalize_tag(raw).as_deref(), expected);
    }

    #[rstest]
    #[case(Some("en-GB"), LocaleMode::Uk)]
    #[case(Some("en-GB-oxendict"), LocaleMode::Uk)]
    #[case(Some("en-US"), LocaleMode::Other)]
    #[case(Some("fr-FR"), LocaleMode::Other)]
    #[case(Some("gibberish"), LocaleMode::Other)]
    #[case(None, LocaleMode::Other)]
    fn test_locale_mode_from_tag(#[case] tag: Option<&str>, #[case] expected: LocaleMode) {
        assert_eq!(LocaleMode::from_tag(tag), expected);
    }

    #[test]
    fn test_env_precedence_skips_empty_and_posix() {
        let vars: HashMap<&str, &str> = [("LC_ALL", ""), ("LC_TIME", "C"), ("LANG", "en_GB.UTF-8")]
            .into_iter()
            .collect();
        let tag = EnvLocaleProvider::tag_from(|var| vars.get(var).map(|v| v.to_string()));
        assert_eq!(tag.as_deref(), Some("en-GB"));
    }

    #[test]
    fn test_env_lc_all_wins() {
        let vars: HashMap<&str, &str> = [("LC_ALL", "fr_FR.UTF-8"), ("LANG", "en_GB.UTF-8")]
            .into_iter()
            .collect();
        let tag = EnvLocaleProvider::tag_from(|var| vars.get(var).map(|v| v.to_string()));
        assert_eq!(tag.as_deref(), Some("fr-FR"));
    }

    fn snapshot() -> Vec<(&'static str, Option<String>)> {
        LOCALE_VARS.iter().map(|var| (*var, env::var(var).ok())).collect()
    }

    /// Puts the locale variables back the way it found them.
    struct SavedEnv(Vec<(&'static str, Option<String>)>);

    impl SavedEnv {
        fn capture() -> Self {
            Self(snapshot())
        }
    }

    impl Drop for SavedEnv {
        fn drop(&mut self) {
            for (var, value) in &self.0 {
                match value {
                    Some(value) => env::set_var(var, value),
                    None => env::remove_var(var),
                }
            }
        }
    }

    #[test]
    #[serial]
    fn test_env_provider_reads_process_env() {
        let _saved = SavedEnv::capture();
        env::remove_var("LC_ALL");
        env::remove_var("LC_TIME");
        env::set_var("LANG", "en_GB.UTF-8");
        assert_eq!(EnvLocaleProvider.language_tag().as_deref(), Some("en-GB"));

        env::set_var("LC_TIME", "de_DE.UTF-8");
        assert_eq!(EnvLocaleProvider.language_tag().as_deref(), Some("de-DE"));
    }

    #[test]
    #[serial]
    fn test_saved_env_restores_variables() {
        let before = snapshot();
        {
            let _saved = SavedEnv::capture();
            env::set_var("LANG", "fr_FR.UTF-8");
            env::set_var("LC_TIME", "ja_JP.UTF-8");
        }
        assert_eq!(snapshot(), before);
    }

    #[test]
    fn test_fixed_locale_normalizes() {
        assert_eq!(FixedLocale::new("en_GB").language_tag().as_deref(), Some("en-GB"));
        assert_eq!(FixedLocale::unset().language_tag(), None);
    }
}
