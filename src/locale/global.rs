// ============================================================================
// Process-wide Default Locale
// Shared locale slot used by values without their own locale
// ============================================================================
//
// The slot is only ever written by `set_locale` / `reset_locale`. Values read
// it once, when they are built; building a value with its own locale never
// touches it.

use super::source::LocaleSource;
use parking_lot::RwLock;

/// Identifier used when no default has been configured.
pub const FALLBACK_LOCALE: &str = "de";

static DEFAULT_LOCALE: RwLock<Option<LocaleSource>> = parking_lot::const_rwlock(None);

/// Set the process-wide default locale.
///
/// Accepts a literal identifier or a deferred supplier. Intended to be called
/// at startup or at well-known points; values built afterwards without their
/// own locale pick up the new default.
pub fn set_locale(locale: impl Into<LocaleSource>) {
    let locale = locale.into();
    tracing::debug!(locale = ?locale, "setting default locale");
    *DEFAULT_LOCALE.write() = Some(locale);
}

/// Restore the default locale to [`FALLBACK_LOCALE`].
pub fn reset_locale() {
    *DEFAULT_LOCALE.write() = None;
}

/// The current process-wide default locale source.
///
/// The source is cloned out of the lock, so a deferred supplier runs without
/// holding it and may itself call [`set_locale`].
pub fn default_locale() -> LocaleSource {
    DEFAULT_LOCALE
        .read()
        .clone()
        .unwrap_or_else(|| LocaleSource::literal(FALLBACK_LOCALE))
}

/// Serializes tests that touch the process-wide slot.
#[cfg(test)]
pub(crate) fn lock_default_locale() -> parking_lot::MutexGuard<'static, ()> {
    static GUARD: parking_lot::Mutex<()> = parking_lot::const_mutex(());
    let guard = GUARD.lock();
    reset_locale();
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_when_unset() {
        let _guard = lock_default_locale();
        assert_eq!(default_locale().resolve(), FALLBACK_LOCALE);
        assert_eq!(default_locale().resolve(), "de");
    }

    #[test]
    fn test_set_and_reset() {
        let _guard = lock_default_locale();
        set_locale("en-US");
        assert_eq!(default_locale().resolve(), "en-US");

        reset_locale();
        assert_eq!(default_locale().resolve(), FALLBACK_LOCALE);
    }

    #[test]
    fn test_deferred_default() {
        let _guard = lock_default_locale();
        set_locale(LocaleSource::deferred(|| "fr".to_string()));
        assert!(default_locale().is_deferred());
        assert_eq!(default_locale().resolve(), "fr");
        reset_locale();
    }

    #[test]
    fn test_supplier_may_set_locale() {
        let _guard = lock_default_locale();
        set_locale(LocaleSource::deferred(|| {
            set_locale("es");
            "pt".to_string()
        }));
        assert_eq!(default_locale().resolve(), "pt");
        assert_eq!(default_locale().resolve(), "es");
        reset_locale();
    }
}
