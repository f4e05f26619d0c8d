// ============================================================================
// Currency Data
// ISO 4217 minor units used to round amounts before formatting
// ============================================================================

/// Standard number of decimal places for a currency.
///
/// Most currencies use 2; codes without minor units use 0 and a handful of
/// dinar-style currencies use 3.
pub(crate) fn minor_units(code: &str) -> u8 {
    match code {
        "BIF" | "CLP" | "DJF" | "GNF" | "IQD" | "ISK" | "JPY" | "KMF" | "KRW" | "PYG" | "RWF"
        | "UGX" | "UYI" | "VND" | "VUV" | "XAF" | "XOF" | "XPF" => 0,
        "BHD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
        _ => 2,
    }
}
