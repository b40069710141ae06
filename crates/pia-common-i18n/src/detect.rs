//! Automatic locale detection.

use super::Locale;
use std::env;

/// Environment variable that pins the toolkit locale.
pub const LOCALE_ENV: &str = "PIA_LOCALE";

/// Detect the locale with an optional user override (e.g. from config).
pub fn detect_locale_with_override(user_locale: Option<&str>) -> Locale {
    if let Some(locale) = user_locale.and_then(Locale::parse) {
        return locale;
    }

    detect_locale()
}

/// Detect the system locale.
pub fn detect_locale() -> Locale {
    // Priority: explicit env var > LC_ALL > LC_MESSAGES > LANG > system > default
    for var in [LOCALE_ENV, "LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Some(locale) = from_env(var) {
            return locale;
        }
    }

    #[cfg(target_os = "macos")]
    if let Some(locale) = detect_macos() {
        return locale;
    }

    Locale::default()
}

/// Parse locale from environment variable.
fn from_env(var: &str) -> Option<Locale> {
    env::var(var).ok().and_then(|v| Locale::parse(&v))
}

/// Detect locale on macOS using defaults.
#[cfg(target_os = "macos")]
fn detect_macos() -> Option<Locale> {
    use std::process::Command;

    let output = Command::new("defaults")
        .args(["read", "-g", "AppleLocale"])
        .output()
        .ok()?;

    if output.status.success() {
        let locale_str = String::from_utf8_lossy(&output.stdout);
        return Locale::parse(locale_str.trim());
    }

    None
}

/// Fallback chain for translations.
pub fn locale_fallback_chain(locale: Locale) -> Vec<Locale> {
    let mut chain = vec![locale];

    // Always fall back to English
    if locale != Locale::En {
        chain.push(Locale::En);
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below mutate process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 4] = [LOCALE_ENV, "LC_ALL", "LC_MESSAGES", "LANG"];

    fn with_env<R>(values: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let saved: Vec<_> = VARS.iter().map(|v| (*v, env::var(v).ok())).collect();
        for var in VARS {
            env::remove_var(var);
        }
        for (var, value) in values {
            env::set_var(var, value);
        }

        let result = f();

        for (var, value) in saved {
            env::remove_var(var);
            if let Some(val) = value {
                env::set_var(var, val);
            }
        }
        result
    }

    #[test]
    fn test_fallback_chain() {
        assert_eq!(locale_fallback_chain(Locale::En), vec![Locale::En]);
        assert_eq!(locale_fallback_chain(Locale::Fr), vec![Locale::Fr, Locale::En]);
        assert_eq!(locale_fallback_chain(Locale::ZhCn), vec![Locale::ZhCn, Locale::En]);
    }

    #[test]
    fn test_pia_locale_has_priority() {
        let locale = with_env(&[(LOCALE_ENV, "it_IT"), ("LANG", "de_DE")], detect_locale);
        assert_eq!(locale, Locale::It);
    }

    #[test]
    fn test_lc_all_over_lang() {
        let locale = with_env(&[("LC_ALL", "fr_FR"), ("LANG", "de_DE")], detect_locale);
        assert_eq!(locale, Locale::Fr);
    }

    #[test]
    fn test_lang_alone() {
        let locale = with_env(&[("LANG", "es_ES.UTF-8")], detect_locale);
        assert_eq!(locale, Locale::Es);
    }

    #[test]
    fn test_invalid_values_fall_through() {
        let locale = with_env(
            &[(LOCALE_ENV, "klingon"), ("LC_ALL", ""), ("LANG", "de_DE")],
            detect_locale,
        );
        assert_eq!(locale, Locale::De);
    }

    #[test]
    fn test_user_override() {
        let (overridden, invalid) = with_env(&[("LANG", "de_DE")], || {
            (
                detect_locale_with_override(Some("ja")),
                detect_locale_with_override(Some("invalid-locale")),
            )
        });
        assert_eq!(overridden, Locale::Ja);
        assert_eq!(invalid, Locale::De);
    }
}
