//! Per-currency quote record.

use serde::Serialize;

use crate::bulletin::BulletinEntry;
use crate::code::Code;

/// One currency's quotes from a single bulletin.
///
/// Rate values are kept as the exact decimal strings the bulletin published.
/// A currency with no banknote market carries empty banknote fields, and the
/// zero record (all fields empty) stands in for "not quoted" — see
/// [`RateSnapshot::rate`](crate::RateSnapshot::rate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CurrencyRate {
    code: Code,
    unit: String,
    forex_buying: String,
    forex_selling: String,
    banknote_buying: String,
    banknote_selling: String,
}

impl CurrencyRate {
    pub(crate) fn from_entry(entry: BulletinEntry) -> Self {
        Self {
            code: Code::new(entry.currency_code),
            unit: entry.unit,
            forex_buying: entry.forex_buying,
            forex_selling: entry.forex_selling,
            banknote_buying: entry.banknote_buying,
            banknote_selling: entry.banknote_selling,
        }
    }

    /// Returns the currency code.
    pub fn code(&self) -> &Code {
        &self.code
    }

    /// Returns the quantity the quotes are per (usually "1" or "100").
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Returns the forex buying quote.
    pub fn forex_buying(&self) -> &str {
        &self.forex_buying
    }

    /// Returns the forex selling quote.
    pub fn forex_selling(&self) -> &str {
        &self.forex_selling
    }

    /// Returns the banknote buying quote (may be empty).
    pub fn banknote_buying(&self) -> &str {
        &self.banknote_buying
    }

    /// Returns the banknote selling quote (may be empty).
    pub fn banknote_selling(&self) -> &str {
        &self.banknote_selling
    }

    /// True for the zero record returned when a code was not quoted.
    pub fn is_empty(&self) -> bool {
        self.code.as_str().is_empty()
    }
}
