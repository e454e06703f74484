//! The three rate operations: catalog listing, rate lookup, conversion.
//!
//! `RateService` composes parameter validation, the two-tier fetch, and
//! response shaping. It holds no mutable state; every call fetches
//! fresh documents and discards them once the result is built.

use std::sync::Arc;

use serde_json::Value;

use crate::errors::RatesError;
use crate::fetch::{FetchedDocument, MirrorConfig, RateFetcher};
use crate::models::{format_amount, round2, Conversion, CurrencyCatalog, Money, RateTable};
use crate::transport::MirrorTransport;

const CURRENCIES_RESOURCE: &str = "currencies.json";

const RATES_EXAMPLE: &str = "/rates?currency=USD";
const CONVERT_EXAMPLE: &str = "/convert?amount=100&from=USD&to=EUR";

const CTX_CURRENCIES: &str = "Error fetching currencies list";
const CTX_RATES: &str = "Error fetching exchange rates";
const CTX_CONVERT: &str = "Error performing currency conversion";

/// Currency-rate operations over the two upstream mirrors.
#[derive(Clone)]
pub struct RateService {
    fetcher: RateFetcher,
}

impl RateService {
    pub fn new(config: MirrorConfig, transport: Arc<dyn MirrorTransport>) -> Self {
        Self {
            fetcher: RateFetcher::new(config, transport),
        }
    }

    /// Fetch the full currency catalog.
    ///
    /// The catalog resource carries no per-currency validity semantics,
    /// so whatever document the mirrors resolve is used as-is with no
    /// status check. A non-object body is an upstream-shape failure.
    pub async fn list_currencies(&self) -> Result<CurrencyCatalog, RatesError> {
        let doc = self
            .fetcher
            .fetch(CURRENCIES_RESOURCE)
            .await
            .map_err(|e| RatesError::from_fetch(CTX_CURRENCIES, e))?;

        let currencies = doc
            .body
            .as_object()
            .cloned()
            .ok_or_else(|| RatesError::Upstream {
                context: CTX_CURRENCIES,
                detail: "currency catalog is not a JSON object".to_string(),
            })?;

        Ok(CurrencyCatalog {
            total_currencies: currencies.len(),
            currencies,
        })
    }

    /// Fetch the rate table for one base currency.
    pub async fn rates(&self, currency: &str) -> Result<RateTable, RatesError> {
        let code = currency.trim();
        if code.is_empty() {
            return Err(RatesError::InvalidParameter {
                message: "Parameter 'currency' is required".to_string(),
                example: RATES_EXAMPLE,
            });
        }
        let code = code.to_lowercase();

        let doc = self
            .fetcher
            .fetch(&currency_resource(&code))
            .await
            .map_err(|e| RatesError::from_fetch(CTX_RATES, e))?;

        if doc.status != 200 {
            return Err(RatesError::CurrencyNotFound {
                message: format!("Currency '{}' not found or invalid", code.to_uppercase()),
            });
        }

        let rates = rate_table(&doc, &code);
        Ok(RateTable {
            base_currency: code.to_uppercase(),
            date: document_date(&doc),
            total_rates: rates.len(),
            rates,
        })
    }

    /// Convert `amount` from one currency to another.
    ///
    /// Validation is ordered: `from`, then `to`, then `amount`. The
    /// first failing check wins.
    pub async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<Conversion, RatesError> {
        if from.trim().is_empty() {
            return Err(RatesError::InvalidParameter {
                message: "Parameter 'from' is required".to_string(),
                example: CONVERT_EXAMPLE,
            });
        }
        if to.trim().is_empty() {
            return Err(RatesError::InvalidParameter {
                message: "Parameter 'to' is required".to_string(),
                example: CONVERT_EXAMPLE,
            });
        }
        // `!(amount > 0)` also rejects NaN.
        if !(amount > 0.0) {
            return Err(RatesError::InvalidParameter {
                message: "Parameter 'amount' must be greater than 0".to_string(),
                example: CONVERT_EXAMPLE,
            });
        }

        let from = from.trim().to_lowercase();
        let to = to.trim().to_lowercase();

        let doc = self
            .fetcher
            .fetch(&currency_resource(&from))
            .await
            .map_err(|e| RatesError::from_fetch(CTX_CONVERT, e))?;

        if doc.status != 200 {
            return Err(RatesError::CurrencyNotFound {
                message: format!(
                    "Source currency '{}' not found or invalid",
                    from.to_uppercase()
                ),
            });
        }

        let rates = rate_table(&doc, &from);
        let rate = match rates.get(&to) {
            Some(Value::Number(n)) => n.clone(),
            Some(_) => {
                return Err(RatesError::Upstream {
                    context: CTX_CONVERT,
                    detail: format!("rate for '{}' is not numeric", to),
                })
            }
            None => {
                return Err(RatesError::CurrencyNotFound {
                    message: format!(
                        "Target currency '{}' not found or invalid",
                        to.to_uppercase()
                    ),
                })
            }
        };
        let rate_f64 = rate.as_f64().ok_or_else(|| RatesError::Upstream {
            context: CTX_CONVERT,
            detail: format!("rate for '{}' is out of range", to),
        })?;

        let converted = round2(amount * rate_f64);
        let from_display = from.to_uppercase();
        let to_display = to.to_uppercase();
        let calculation = format!(
            "{} {} × {} = {} {}",
            format_amount(amount),
            from_display,
            rate,
            format_amount(converted),
            to_display
        );

        Ok(Conversion {
            original: Money {
                amount,
                currency: from_display,
            },
            converted: Money {
                amount: converted,
                currency: to_display,
            },
            exchange_rate: rate,
            date: document_date(&doc),
            calculation,
        })
    }
}

fn currency_resource(code: &str) -> String {
    format!("currencies/{code}.json")
}

/// Sub-mapping keyed by the requested code. An absent key yields an
/// empty table rather than an error: the upstream contract puts the
/// base code at the top level of its own document, and a document that
/// resolved with status 200 is trusted on that point.
fn rate_table(doc: &FetchedDocument, code: &str) -> serde_json::Map<String, Value> {
    doc.body
        .get(code)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

fn document_date(doc: &FetchedDocument) -> String {
    doc.body
        .get("date")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}
