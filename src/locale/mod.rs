// ============================================================================
// Locale Module
// Locale sources and the process-wide default locale
// ============================================================================

mod global;
mod source;

pub use global::{default_locale, reset_locale, set_locale, FALLBACK_LOCALE};
pub use source::LocaleSource;

#[cfg(test)]
pub(crate) use global::lock_default_locale;
