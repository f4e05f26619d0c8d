// ============================================================================
// Currency Module
// Currency-specific rendering of an amount
// ============================================================================

mod formatter;

pub use formatter::CurrencyFormatter;
