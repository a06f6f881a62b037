//! One bulletin's worth of rates, keyed by currency code.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::bulletin::BulletinDocument;
use crate::code::Code;
use crate::date;
use crate::fetch::{BulletinClient, FetchError, TCMB_BASE_URL};
use crate::record::CurrencyRate;

/// Options for building a [`RateSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    date: Option<NaiveDate>,
    base_url: Option<String>,
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the bulletin for an explicit date instead of today.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Overrides the bulletin base URL (defaults to [`TCMB_BASE_URL`]).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// In-memory result of one bulletin retrieval.
///
/// Construction never fails observably: when the fetch or decode goes wrong
/// the snapshot is simply empty, the error kind is kept in
/// [`last_error`](RateSnapshot::last_error), and every lookup returns the
/// zero record. A snapshot is never mutated after construction, so it can be
/// read from any number of threads.
#[derive(Debug)]
pub struct RateSnapshot {
    date: String,
    rates: HashMap<Code, CurrencyRate>,
    last_error: Option<FetchError>,
}

impl RateSnapshot {
    /// Fetches today's bulletin.
    pub fn fetch() -> Self {
        Self::fetch_with(FetchOptions::new())
    }

    /// Fetches the bulletin selected by `options`.
    pub fn fetch_with(options: FetchOptions) -> Self {
        let explicit_date = options.date.is_some();
        let tokens = date::resolve(options.date.unwrap_or_else(date::today));
        let client = BulletinClient::new(options.base_url.as_deref().unwrap_or(TCMB_BASE_URL));

        match client.fetch(&tokens.term, &tokens.date) {
            Ok(document) => Self::from_document(tokens.date, document),
            Err(error) => {
                tracing::warn!(%error, date = %tokens.date, "bulletin fetch failed, snapshot is empty");
                Self {
                    // An explicitly requested date stays on the snapshot even
                    // when the bulletin could not be retrieved.
                    date: if explicit_date { tokens.date } else { String::new() },
                    rates: HashMap::new(),
                    last_error: Some(error),
                }
            }
        }
    }

    pub(crate) fn from_document(date: String, document: BulletinDocument) -> Self {
        let rates = document
            .currencies
            .into_iter()
            .map(|entry| {
                let record = CurrencyRate::from_entry(entry);
                (record.code().clone(), record)
            })
            .collect();

        Self {
            date,
            rates,
            last_error: None,
        }
    }

    /// Returns the record for `code`, or the zero record when the snapshot is
    /// empty or the bulletin did not quote that code.
    ///
    /// Lookup never errors; callers detect "not found" by checking
    /// [`CurrencyRate::is_empty`] on the result.
    pub fn rate(&self, code: &Code) -> CurrencyRate {
        self.rates.get(code).cloned().unwrap_or_default()
    }

    /// The bulletin date this snapshot was addressed with, as the zero-padded
    /// `DDMMYYYY` token. Empty for a degraded snapshot built without an
    /// explicit date.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Iterates over all records in the snapshot, in no particular order.
    pub fn rates(&self) -> impl Iterator<Item = &CurrencyRate> {
        self.rates.values()
    }

    /// Number of currencies quoted by this snapshot.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True when the snapshot holds no rates (degraded construction, or a
    /// bulletin with no entries).
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Why this snapshot is empty, if construction degraded.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bulletin;

    const FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Tarih_Date Tarih="01.03.2023" Date="03/01/2023" Bulten_No="2023/42">
    <Currency CrossOrder="0" Kod="USD" CurrencyCode="USD">
        <Unit>1</Unit>
        <Isim>ABD DOLARI</Isim>
        <CurrencyName>US DOLLAR</CurrencyName>
        <ForexBuying>18.8653</ForexBuying>
        <ForexSelling>18.8993</ForexSelling>
        <BanknoteBuying>18.8521</BanknoteBuying>
        <BanknoteSelling>18.9276</BanknoteSelling>
        <CrossRateUSD/>
        <CrossRateOther/>
    </Currency>
    <Currency CrossOrder="1" Kod="EUR" CurrencyCode="EUR">
        <Unit>1</Unit>
        <Isim>EURO</Isim>
        <CurrencyName>EURO</CurrencyName>
        <ForexBuying>19.9912</ForexBuying>
        <ForexSelling>20.0273</ForexSelling>
        <BanknoteBuying>19.9772</BanknoteBuying>
        <BanknoteSelling>20.0573</BanknoteSelling>
        <CrossRateUSD/>
        <CrossRateOther>1.0597</CrossRateOther>
    </Currency>
</Tarih_Date>"#;

    fn populated() -> RateSnapshot {
        let document = bulletin::parse(FIXTURE).unwrap();
        RateSnapshot::from_document("01032023".to_string(), document)
    }

    fn empty() -> RateSnapshot {
        RateSnapshot {
            date: String::new(),
            rates: HashMap::new(),
            last_error: None,
        }
    }

    #[test]
    fn test_lookup_returns_the_stored_record() {
        let snapshot = populated();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.date(), "01032023");

        let usd = snapshot.rate(&Code::USD);
        assert_eq!(usd.code(), &Code::USD);
        assert_eq!(usd.forex_buying(), "18.8653");
        assert_eq!(usd.forex_selling(), "18.8993");
        assert_eq!(usd.banknote_buying(), "18.8521");
        assert_eq!(usd.banknote_selling(), "18.9276");
    }

    #[test]
    fn test_lookup_round_trip_is_exact() {
        let snapshot = populated();
        let first = snapshot.rate(&Code::EUR);
        let second = snapshot.rate(&Code::EUR);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_absent_code_yields_zero_record() {
        let snapshot = populated();
        let chf = snapshot.rate(&Code::CHF);
        assert!(chf.is_empty());
        assert_eq!(chf.code().as_str(), "");
        assert_eq!(chf.forex_selling(), "");
    }

    #[test]
    fn test_empty_snapshot_yields_zero_record_for_any_code() {
        let snapshot = empty();
        assert!(snapshot.is_empty());
        for code in Code::all() {
            assert!(snapshot.rate(code).is_empty());
        }
        assert!(snapshot.rate(&Code::new("XAU")).is_empty());
    }

    #[test]
    fn test_snapshot_keys_come_from_the_code_attribute() {
        let snapshot = populated();
        // "EURO" is the display name in the fixture, never a key.
        assert!(snapshot.rate(&Code::new("EURO")).is_empty());
        assert!(!snapshot.rate(&Code::new("EUR")).is_empty());
    }

    #[test]
    fn test_snapshot_is_shareable_across_threads() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<RateSnapshot>();
    }
}
