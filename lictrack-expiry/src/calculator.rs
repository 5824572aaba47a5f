//! Expiration calculation.
//!
//! All functions here are pure. The evaluation instant is always a
//! parameter; callers sample it once per pass (see [`Evaluation`](crate::Evaluation)).
//!
//! Day counting: the number of whole calendar days between the start of
//! the evaluation day and the expiration date. `0` means "expires today".
//! A license is expired only once its expiration date is strictly before
//! the evaluation day.
//!
//! Records whose expiration date cannot be determined (missing or malformed
//! payment date, malformed term) are classified as `Expired` with no
//! expiration date. They are never raised as errors.

use chrono::{Months, NaiveDate, NaiveDateTime};
use lictrack_core::dates::parse_api_date;
use lictrack_core::models::{
    ExpirationResult, LicenseRecord, LicenseTerm, RawTerm, RemainingDays,
};

/// Advance `date` by `months` calendar months.
///
/// The day of month is clamped to the last day of the target month, so
/// Jan 31 + 1 month is Feb 29 in leap years and Feb 28 otherwise.
/// Returns `None` only if the result is outside the representable range.
pub fn add_calendar_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Compute the expiration state of a license at `now`.
///
/// The unlimited sentinel short-circuits before any date arithmetic.
pub fn compute_expiration(
    payment_date: Option<NaiveDate>,
    term: Option<LicenseTerm>,
    now: NaiveDateTime,
) -> ExpirationResult {
    let months = match term {
        Some(LicenseTerm::Unlimited) => return ExpirationResult::unlimited(),
        Some(LicenseTerm::Months(n)) => n,
        None => return ExpirationResult::undetermined(),
    };

    let Some(expiration_date) = payment_date.and_then(|paid| add_calendar_months(paid, months))
    else {
        return ExpirationResult::undetermined();
    };

    let today = now.date();
    let remaining = if expiration_date < today {
        RemainingDays::Expired
    } else {
        let days = (expiration_date - today).num_days();
        RemainingDays::Days(u32::try_from(days).unwrap_or(u32::MAX))
    };

    ExpirationResult {
        remaining,
        expiration_date: Some(expiration_date),
    }
}

/// [`compute_expiration`] over raw API values.
///
/// `payment_date` follows the API convention (`YYYY-MM-DD[ HH:MM:SS]`).
/// The term is normalized first, so an unlimited term wins even when the
/// date is garbage. Never panics on malformed input.
pub fn compute_expiration_raw(
    payment_date: Option<&str>,
    months: &RawTerm,
    now: NaiveDateTime,
) -> ExpirationResult {
    let term = months.normalize().ok();
    if matches!(term, Some(LicenseTerm::Unlimited)) {
        return ExpirationResult::unlimited();
    }
    compute_expiration(payment_date.and_then(parse_api_date), term, now)
}

/// Expiration state of a typed record.
pub fn compute_for(record: &LicenseRecord, now: NaiveDateTime) -> ExpirationResult {
    compute_expiration(record.payment_date, record.term, now)
}
