//! Property tests for the expiry engine.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use lictrack_core::models::{LicenseRecord, LicenseTerm, RemainingDays};
use lictrack_expiry::{
    add_calendar_months, compute_expiration, filter_expiring_within, ReportWindow,
};

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..365 * 60).prop_map(|offset| base() + Duration::days(offset))
}

fn arb_now() -> impl Strategy<Value = NaiveDateTime> {
    (arb_date(), 0u32..86_400)
        .prop_map(|(d, secs)| d.and_hms_opt(secs / 3600, (secs / 60) % 60, secs % 60).unwrap())
}

fn arb_term() -> impl Strategy<Value = Option<LicenseTerm>> {
    prop_oneof![
        Just(None),
        Just(Some(LicenseTerm::Unlimited)),
        (0u32..600).prop_map(|m| Some(LicenseTerm::from_months(m))),
    ]
}

fn arb_record() -> impl Strategy<Value = LicenseRecord> {
    (proptest::option::of(arb_date()), arb_term(), "[a-z]{1,8}")
        .prop_map(|(paid, term, client)| LicenseRecord::new(client, None, paid, term))
}

proptest! {
    #[test]
    fn prop_unlimited_regardless_of_payment(
        paid in proptest::option::of(arb_date()),
        now in arb_now(),
    ) {
        let result = compute_expiration(paid, Some(LicenseTerm::Unlimited), now);
        prop_assert_eq!(result.remaining, RemainingDays::Unlimited);
        prop_assert_eq!(result.expiration_date, None);
    }

    #[test]
    fn prop_missing_payment_is_expired(months in 0u32..998, now in arb_now()) {
        let result = compute_expiration(None, Some(LicenseTerm::Months(months)), now);
        prop_assert_eq!(result.remaining, RemainingDays::Expired);
        prop_assert_eq!(result.expiration_date, None);
    }

    #[test]
    fn prop_months_are_monotonic(paid in arb_date(), a in 0u32..600, b in 0u32..600) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let earlier = add_calendar_months(paid, lo).unwrap();
        prop_assert!(earlier <= add_calendar_months(paid, hi).unwrap());
    }

    #[test]
    fn prop_month_addition_keeps_or_clamps_day(paid in arb_date(), months in 0u32..600) {
        use chrono::Datelike;
        let out = add_calendar_months(paid, months).unwrap();
        let total = paid.month0() + months;
        prop_assert_eq!(out.month0(), total % 12);
        prop_assert_eq!(out.year(), paid.year() + (total / 12) as i32);
        prop_assert!(out.day() <= paid.day());
    }

    #[test]
    fn prop_idempotent(
        paid in proptest::option::of(arb_date()),
        term in arb_term(),
        now in arb_now(),
    ) {
        prop_assert_eq!(compute_expiration(paid, term, now), compute_expiration(paid, term, now));
    }

    #[test]
    fn prop_days_count_back_to_expiration(
        paid in arb_date(),
        months in 0u32..600,
        now in arb_now(),
    ) {
        let result = compute_expiration(Some(paid), Some(LicenseTerm::Months(months)), now);
        let expiration = result.expiration_date.unwrap();
        match result.remaining {
            RemainingDays::Days(n) => {
                prop_assert_eq!(now.date() + Duration::days(n as i64), expiration)
            }
            RemainingDays::Expired => prop_assert!(expiration < now.date()),
            RemainingDays::Unlimited => prop_assert!(false, "finite term reported unlimited"),
        }
    }

    #[test]
    fn prop_filter_is_subset_within_window(
        records in proptest::collection::vec(arb_record(), 0..40),
        from in arb_date(),
        len in -30i64..400,
        now in arb_now(),
    ) {
        let to = from + Duration::days(len);
        let window = ReportWindow::new(from, to);
        let selected = filter_expiring_within(&records, &window, now);

        prop_assert!(selected.len() <= records.len());
        for item in &selected {
            let expiration = item.expiration.expiration_date.unwrap();
            prop_assert!(from <= expiration && expiration <= to);
            prop_assert!(!item.record.is_unlimited());
            prop_assert!(item.record.payment_date.is_some());
            prop_assert!(records.contains(&item.record));
        }
        if len < 0 {
            prop_assert!(selected.is_empty());
        }
    }
}
