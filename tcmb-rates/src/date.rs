//! Maps a calendar date onto the bulletin's URL path segments.

use chrono::{Local, NaiveDate};

/// The two path segments addressing one bulletin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DateTokens {
    /// Year-month term, `YYYYMM`.
    pub(crate) term: String,
    /// Full day token, `DDMMYYYY`.
    pub(crate) date: String,
}

pub(crate) fn resolve(date: NaiveDate) -> DateTokens {
    DateTokens {
        term: date.format("%Y%m").to_string(),
        date: date.format("%d%m%Y").to_string(),
    }
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_tokens_are_zero_padded() {
        let cases = [
            (ymd(2023, 3, 1), "202303", "01032023"),
            (ymd(2023, 5, 12), "202305", "12052023"),
            (ymd(2023, 12, 3), "202312", "03122023"),
            (ymd(2023, 11, 20), "202311", "20112023"),
        ];

        for (date, term, token) in cases {
            let tokens = resolve(date);
            assert_eq!(tokens.term, term);
            assert_eq!(tokens.date, token);
        }
    }

    #[test]
    fn test_token_lengths() {
        let tokens = resolve(ymd(2024, 1, 2));
        assert_eq!(tokens.term.len(), 6);
        assert_eq!(tokens.date.len(), 8);
    }

    #[test]
    fn test_today_resolves() {
        let tokens = resolve(today());
        assert_eq!(tokens.date.len(), 8);
    }
}
