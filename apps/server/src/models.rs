//! Response bodies for the HTTP surface.
//!
//! Every body carries `status_code` plus the fixed attribution fields,
//! matching the shapes consumers of the original API already depend on.

use std::collections::BTreeMap;

use fxbridge_rates::{Conversion, CurrencyCatalog, Money, RateTable};
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Display name reported by `/` and `/health`.
pub const SERVICE_NAME: &str = "Currency Converter API";

const DEVELOPER: &str = "El Impaciente";
const TELEGRAM_CHANNEL: &str = "https://t.me/Apisimpacientes";

/// Constant attribution boilerplate, flattened into every response.
#[derive(Debug, Clone, Serialize)]
pub struct Attribution {
    developer: &'static str,
    telegram_channel: &'static str,
}

impl Default for Attribution {
    fn default() -> Self {
        Self {
            developer: DEVELOPER,
            telegram_channel: TELEGRAM_CHANNEL,
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub status_code: u16,
    pub message: &'static str,
    #[serde(flatten)]
    pub attribution: Attribution,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
    pub features: Vec<&'static str>,
}

/// Body of `GET /currencies`.
#[derive(Debug, Serialize)]
pub struct CurrenciesResponse {
    pub status_code: u16,
    pub total_currencies: usize,
    pub currencies: Map<String, Value>,
    #[serde(flatten)]
    pub attribution: Attribution,
}

impl From<CurrencyCatalog> for CurrenciesResponse {
    fn from(catalog: CurrencyCatalog) -> Self {
        Self {
            status_code: 200,
            total_currencies: catalog.total_currencies,
            currencies: catalog.currencies,
            attribution: Attribution::default(),
        }
    }
}

/// Body of `GET /rates`.
#[derive(Debug, Serialize)]
pub struct RatesResponse {
    pub status_code: u16,
    pub base_currency: String,
    pub date: String,
    pub rates: Map<String, Value>,
    pub total_rates: usize,
    #[serde(flatten)]
    pub attribution: Attribution,
}

impl From<RateTable> for RatesResponse {
    fn from(table: RateTable) -> Self {
        Self {
            status_code: 200,
            base_currency: table.base_currency,
            date: table.date,
            rates: table.rates,
            total_rates: table.total_rates,
            attribution: Attribution::default(),
        }
    }
}

/// Body of `GET /convert`.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub status_code: u16,
    pub original: Money,
    pub converted: Money,
    pub exchange_rate: Number,
    pub date: String,
    pub calculation: String,
    #[serde(flatten)]
    pub attribution: Attribution,
}

impl From<Conversion> for ConvertResponse {
    fn from(conversion: Conversion) -> Self {
        Self {
            status_code: 200,
            original: conversion.original,
            converted: conversion.converted,
            exchange_rate: conversion.exchange_rate,
            date: conversion.date,
            calculation: conversion.calculation,
            attribution: Attribution::default(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
    #[serde(flatten)]
    pub attribution: Attribution,
}

/// Error body shared by all failure responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub attribution: Attribution,
}

impl ErrorResponse {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            example: None,
            error: None,
            attribution: Attribution::default(),
        }
    }

    pub fn with_example(mut self, example: &'static str) -> Self {
        self.example = Some(example);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}
