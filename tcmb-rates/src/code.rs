//! Currency codes quoted by the bulletin.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// ISO-style currency code, usable as a map key.
///
/// The codes the bulletin quotes are available as associated constants
/// (`Code::USD`, `Code::EUR`, ...). Arbitrary codes can still be built with
/// [`Code::new`] so that lookups against future bulletins keep working;
/// unknown codes simply resolve to the `"N/A"` display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Code(Cow<'static, str>);

static ALL_CODES: [Code; 22] = [
    Code::USD,
    Code::AUD,
    Code::DKK,
    Code::EUR,
    Code::GBP,
    Code::CHF,
    Code::SEK,
    Code::CAD,
    Code::KWD,
    Code::NOK,
    Code::SAR,
    Code::JPY,
    Code::BGN,
    Code::RON,
    Code::RUB,
    Code::IRR,
    Code::CNY,
    Code::PKR,
    Code::QAR,
    Code::KRW,
    Code::AZN,
    Code::AED,
];

impl Code {
    pub const USD: Code = Code(Cow::Borrowed("USD"));
    pub const AUD: Code = Code(Cow::Borrowed("AUD"));
    pub const DKK: Code = Code(Cow::Borrowed("DKK"));
    pub const EUR: Code = Code(Cow::Borrowed("EUR"));
    pub const GBP: Code = Code(Cow::Borrowed("GBP"));
    pub const CHF: Code = Code(Cow::Borrowed("CHF"));
    pub const SEK: Code = Code(Cow::Borrowed("SEK"));
    pub const CAD: Code = Code(Cow::Borrowed("CAD"));
    pub const KWD: Code = Code(Cow::Borrowed("KWD"));
    pub const NOK: Code = Code(Cow::Borrowed("NOK"));
    pub const SAR: Code = Code(Cow::Borrowed("SAR"));
    pub const JPY: Code = Code(Cow::Borrowed("JPY"));
    pub const BGN: Code = Code(Cow::Borrowed("BGN"));
    pub const RON: Code = Code(Cow::Borrowed("RON"));
    pub const RUB: Code = Code(Cow::Borrowed("RUB"));
    pub const IRR: Code = Code(Cow::Borrowed("IRR"));
    pub const CNY: Code = Code(Cow::Borrowed("CNY"));
    pub const PKR: Code = Code(Cow::Borrowed("PKR"));
    pub const QAR: Code = Code(Cow::Borrowed("QAR"));
    pub const KRW: Code = Code(Cow::Borrowed("KRW"));
    pub const AZN: Code = Code(Cow::Borrowed("AZN"));
    pub const AED: Code = Code(Cow::Borrowed("AED"));

    /// Creates a code from an arbitrary string.
    pub fn new(code: impl Into<String>) -> Self {
        Code(Cow::Owned(code.into()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the canonical display name for this code, or `"N/A"` for a
    /// code the registry does not define.
    pub fn name(&self) -> &'static str {
        match self.0.as_ref() {
            "USD" => "US DOLLAR",
            "AUD" => "AUSTRALIAN DOLLAR",
            "DKK" => "DANISH KRONE",
            "EUR" => "EURO",
            "GBP" => "POUND STERLING",
            "CHF" => "SWISS FRANK",
            "SEK" => "SWEDISH KRONA",
            "CAD" => "CANADIAN DOLLAR",
            "KWD" => "KUWAITI DINAR",
            "NOK" => "NORWEGIAN KRONE",
            "SAR" => "SAUDI RIYAL",
            "JPY" => "JAPANESE YEN",
            "BGN" => "BULGARIAN LEV",
            "RON" => "NEW LEU",
            "RUB" => "RUSSIAN ROUBLE",
            "IRR" => "IRANIAN RIAL",
            "CNY" => "CHINESE RENMINBI",
            "PKR" => "PAKISTANI RUPEE",
            "QAR" => "QATARI RIAL",
            "KRW" => "SOUTH KOREAN WON",
            "AZN" => "AZERBAIJANI NEW MANAT",
            "AED" => "UNITED ARAB EMIRATES DIRHAM",
            _ => "N/A",
        }
    }

    /// All codes the registry defines.
    pub fn all() -> &'static [Code] {
        &ALL_CODES
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Code {
    fn from(code: &str) -> Self {
        Code::new(code)
    }
}

impl From<String> for Code {
    fn from(code: String) -> Self {
        Code::new(code)
    }
}
