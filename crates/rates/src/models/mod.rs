//! Normalized results of the rate operations.

use serde::Serialize;
use serde_json::{Map, Number, Value};

/// The full currency catalog: code → display name, plus its size.
///
/// Entries are passed through from upstream untouched; no local
/// enumeration of valid codes exists.
#[derive(Debug, Clone, Serialize)]
pub struct CurrencyCatalog {
    /// Number of catalog entries
    pub total_currencies: usize,
    /// Code → display name, exactly as published upstream
    pub currencies: Map<String, Value>,
}

/// One base currency's rate table.
#[derive(Debug, Clone, Serialize)]
pub struct RateTable {
    /// Requested code, uppercased for display
    pub base_currency: String,
    /// Upstream-supplied date string, `"unknown"` if absent
    pub date: String,
    /// Target code → rate, passed through from upstream
    pub rates: Map<String, Value>,
    /// Number of rate entries
    pub total_rates: usize,
}

/// An amount tagged with its display currency code.
#[derive(Debug, Clone, Serialize)]
pub struct Money {
    pub amount: f64,
    pub currency: String,
}

/// Result of converting an amount between two currencies.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    /// The requested amount in the source currency
    pub original: Money,
    /// The rounded result in the target currency
    pub converted: Money,
    /// The rate exactly as returned upstream
    pub exchange_rate: Number,
    /// Upstream-supplied date string, `"unknown"` if absent
    pub date: String,
    /// Human-readable `"{amount} {FROM} × {rate} = {converted} {TO}"`
    pub calculation: String,
}

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render an amount the way the calculation string expects: integral
/// floats keep one decimal place (`90.0`), everything else uses the
/// shortest representation.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
