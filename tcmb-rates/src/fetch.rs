//! Bulletin retrieval over HTTP.

use crate::bulletin::{self, BulletinDocument};

/// Production address of the bulletin archive.
pub const TCMB_BASE_URL: &str = "https://www.tcmb.gov.tr/kurlar";

/// Error type for a single bulletin retrieval.
///
/// `Malformed` is the everyday case, not an anomaly: the remote answers
/// weekends, holidays and future dates with an HTML page instead of a
/// bulletin, and that body fails XML decoding.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to fetch bulletin: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read bulletin body: {0}")]
    Read(#[source] reqwest::Error),

    #[error("malformed bulletin document: {0}")]
    Malformed(#[from] quick_xml::DeError),
}

/// Blocking HTTP client for the bulletin archive.
pub(crate) struct BulletinClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl BulletinClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Retrieves and decodes the bulletin at `{base}/{term}/{date}.xml`.
    /// One attempt per call; the caller decides what a failure means.
    pub(crate) fn fetch(&self, term: &str, date: &str) -> Result<BulletinDocument, FetchError> {
        let url = format!("{}/{}/{}.xml", self.base_url, term, date);
        tracing::debug!(%url, "fetching bulletin");

        let response = self.http.get(&url).send().map_err(FetchError::Transport)?;
        let body = response.text().map_err(FetchError::Read)?;
        Ok(bulletin::parse(&body)?)
    }
}
