// ============================================================================
// Locale Source
// Literal or lazily computed locale identifier
// ============================================================================

use std::fmt;
use std::sync::Arc;

/// Where a locale identifier comes from.
///
/// A deferred source is a zero-argument supplier invoked each time the
/// locale is needed, so the identifier can follow request context instead
/// of being fixed when the value is built.
///
/// # Example
/// ```
/// use number_helper::locale::LocaleSource;
///
/// let fixed = LocaleSource::from("en-US");
/// assert_eq!(fixed.resolve(), "en-US");
///
/// let lazy = LocaleSource::deferred(|| "fr".to_string());
/// assert!(lazy.is_deferred());
/// assert_eq!(lazy.resolve(), "fr");
/// ```
#[derive(Clone)]
pub enum LocaleSource {
    /// A fixed identifier such as `"de"` or `"en-US"`
    Literal(String),
    /// Supplier evaluated at format time
    Deferred(Arc<dyn Fn() -> String + Send + Sync>),
}

impl LocaleSource {
    pub fn literal(identifier: impl Into<String>) -> Self {
        LocaleSource::Literal(identifier.into())
    }

    pub fn deferred<F>(supplier: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        LocaleSource::Deferred(Arc::new(supplier))
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, LocaleSource::Deferred(_))
    }

    /// The locale identifier, invoking the supplier for a deferred source.
    pub fn resolve(&self) -> String {
        match self {
            LocaleSource::Literal(identifier) => identifier.clone(),
            LocaleSource::Deferred(supplier) => {
                let identifier = supplier();
                tracing::trace!(locale = %identifier, "resolved deferred locale");
                identifier
            },
        }
    }
}

impl fmt::Debug for LocaleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleSource::Literal(identifier) => f.debug_tuple("Literal").field(identifier).finish(),
            LocaleSource::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<&str> for LocaleSource {
    fn from(identifier: &str) -> Self {
        LocaleSource::Literal(identifier.to_string())
    }
}

impl From<String> for LocaleSource {
    fn from(identifier: String) -> Self {
        LocaleSource::Literal(identifier)
    }
}

impl From<&String> for LocaleSource {
    fn from(identifier: &String) -> Self {
        LocaleSource::Literal(identifier.clone())
    }
}
