//! Wire-level view of the bulletin document.
//!
//! These structs exist only while a snapshot is being built; nothing here is
//! part of the public API.

use serde::Deserialize;

/// Decoded `Tarih_Date` root element.
///
/// The date attributes are required so that a non-bulletin body (the remote
/// answers missing dates with an HTML page) fails decoding instead of
/// producing an empty document.
#[derive(Debug, Deserialize)]
pub(crate) struct BulletinDocument {
    #[serde(rename = "@Tarih")]
    pub(crate) tarih: String,
    #[serde(rename = "@Date")]
    pub(crate) date: String,
    #[serde(rename = "@Bulten_No")]
    pub(crate) bulletin_no: String,
    #[serde(rename = "Currency", default)]
    pub(crate) currencies: Vec<BulletinEntry>,
}

/// One `Currency` element. Only `CurrencyCode`, `Unit` and the four rate
/// fields feed the snapshot; the rest is decoded and ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct BulletinEntry {
    #[serde(rename = "@CrossOrder", default)]
    pub(crate) cross_order: String,
    #[serde(rename = "@Kod", default)]
    pub(crate) kod: String,
    #[serde(rename = "@CurrencyCode")]
    pub(crate) currency_code: String,
    #[serde(rename = "Unit", default)]
    pub(crate) unit: String,
    #[serde(rename = "Isim", default)]
    pub(crate) name: String,
    #[serde(rename = "CurrencyName", default)]
    pub(crate) currency_name: String,
    #[serde(rename = "ForexBuying", default)]
    pub(crate) forex_buying: String,
    #[serde(rename = "ForexSelling", default)]
    pub(crate) forex_selling: String,
    #[serde(rename = "BanknoteBuying", default)]
    pub(crate) banknote_buying: String,
    #[serde(rename = "BanknoteSelling", default)]
    pub(crate) banknote_selling: String,
    #[serde(rename = "CrossRateUSD", default)]
    pub(crate) cross_rate_usd: String,
    #[serde(rename = "CrossRateOther", default)]
    pub(crate) cross_rate_other: String,
}

pub(crate) fn parse(body: &str) -> Result<BulletinDocument, quick_xml::DeError> {
    quick_xml::de::from_str(body)
}
