//! Property tests for term normalization and API date parsing.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use lictrack_core::dates::{format_api_date, parse_api_date};
use lictrack_core::models::{LicenseTerm, RawTerm};

proptest! {
    #[test]
    fn prop_text_and_number_agree(n in 0u32..100_000) {
        let from_text = RawTerm::Text(n.to_string()).normalize().unwrap();
        let from_number = RawTerm::Integer(i64::from(n)).normalize().unwrap();
        prop_assert_eq!(from_text, from_number);
        prop_assert_eq!(from_text.is_unlimited(), n == LicenseTerm::UNLIMITED_SENTINEL);
    }

    #[test]
    fn prop_whitespace_is_ignored(n in 0u32..10_000, pad in "[ \t]{0,3}") {
        let padded = format!("{pad}{n}{pad}");
        prop_assert_eq!(padded.parse::<LicenseTerm>().unwrap(), LicenseTerm::from_months(n));
    }

    #[test]
    fn prop_non_digit_text_rejected(s in "[a-zA-Z.,-]{1,6}") {
        prop_assert!(s.parse::<LicenseTerm>().is_err());
    }

    #[test]
    fn prop_api_dates_survive_time_suffix(offset in 0i64..40_000, h in 0u32..24, m in 0u32..60) {
        let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + Duration::days(offset);
        let raw = format!("{} {:02}:{:02}:00", format_api_date(date), h, m);
        prop_assert_eq!(parse_api_date(&raw), Some(date));
    }
}
