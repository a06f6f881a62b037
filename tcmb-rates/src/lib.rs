//! # tcmb-rates
//!
//! Blocking client for the daily exchange-rate bulletin published by the
//! Central Bank of the Republic of Türkiye (TCMB).
//!
//! One [`RateSnapshot`] corresponds to one bulletin: construction resolves
//! the requested date into the archive's URL scheme, fetches and decodes the
//! XML document, and builds a lookup keyed by currency code. Quotes are
//! exposed as the exact decimal strings the bulletin published; nothing in
//! this crate parses them into floating point.
//!
//! Construction never fails observably. When no bulletin exists for a date
//! (weekends, holidays, future dates) or the network is down, the snapshot
//! is empty, lookups return zero records, and the underlying [`FetchError`]
//! is available through [`RateSnapshot::last_error`].
//!
//! ```no_run
//! use tcmb_rates::{Code, RateSnapshot};
//!
//! let snapshot = RateSnapshot::fetch();
//! let usd = snapshot.rate(&Code::USD);
//! if !usd.is_empty() {
//!     println!("{}: {} / {}", usd.code(), usd.forex_buying(), usd.forex_selling());
//! }
//! ```

mod bulletin;
mod code;
mod date;
mod fetch;
mod record;
mod snapshot;

pub use code::Code;
pub use fetch::{FetchError, TCMB_BASE_URL};
pub use record::CurrencyRate;
pub use snapshot::{FetchOptions, RateSnapshot};
