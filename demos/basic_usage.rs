// ============================================================================
// Basic Usage Example
// ============================================================================

use number_helper::prelude::*;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Number Helper Example ===\n");

    // Chain arithmetic on a single value
    let mut total = NumericValue::create(19.99);
    total.multiply(3).add(4.5).divide(2)?.round(2, RoundingMode::HalfUp);

    println!("Raw value:       {}", total);
    println!("Fixed (en):      {}", total.format(2, ".", ","));
    println!("Fixed (eu):      {}", total.format_with(&FormatOptions::european()));
    println!("Human readable:  {}", total.human_readable());

    // Values capture the process-wide default ("de" unless set) when built
    println!("\n=== Default Locale ({}) ===", default_locale().resolve());
    println!("Number:          {}", total.format_locale());
    println!("Euro:            {}", total.currency().euro());
    println!("Dollar:          {}", total.currency().dollar());

    // A value can carry its own locale without touching the default
    let american = NumericValue::create_in(1234567.891, "en-US");
    println!("\n=== Instance Locale (en-US) ===");
    println!("Number:          {}", american.format_locale());
    println!("Dollar:          {}", american.currency().dollar());
    println!("Yen:             {}", american.currency().in_currency("JPY"));

    // Deferred locale, resolved each time something is formatted
    set_locale(LocaleSource::deferred(|| {
        std::env::var("APP_LOCALE").unwrap_or_else(|_| "fr".to_string())
    }));
    println!("\n=== Deferred Default Locale ===");
    println!("Number:          {}", NumericValue::create(9876.5).format_locale());
    reset_locale();

    // Loose input
    println!("\n=== Coercion ===");
    println!("\"42\"  -> {}", coerce_numeric("42"));
    println!("\"abc\" -> {}", NumericValue::coerce("abc", 7));
    println!("None  -> {:?}", maybe_numeric_value(None::<f64>));

    // Division by zero is rejected and leaves the value alone
    let mut value = NumericValue::create(10);
    if let Err(err) = value.divide(0) {
        println!("\nError: {} (value still {})", err, value);
    }

    Ok(())
}
