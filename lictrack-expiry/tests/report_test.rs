//! Report-window filtering: scenarios, exclusions, ordering, single-instant evaluation.

use lictrack_core::models::{LicenseRecord, LicenseTerm, RemainingDays};
use lictrack_expiry::{filter_expiring_within, Evaluation, ReportWindow};
use test_fixtures::{date, june_2024_batch, noon, undated_license, unlimited_license, web_license};

// ============================================================
// Mixed batch
// ============================================================

#[test]
fn june_window_selects_only_mid_june_license() {
    let batch = june_2024_batch();
    let window = ReportWindow::new(date(2024, 6, 1), date(2024, 6, 30));

    let selected = filter_expiring_within(&batch, &window, noon(2024, 6, 1));

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].record.client_id, "due-mid-june");
    assert_eq!(selected[0].expiration.expiration_date, Some(date(2024, 6, 15)));
    assert_eq!(selected[0].expiration.remaining, RemainingDays::Days(14));
}

#[test]
fn input_is_left_untouched() {
    let batch = june_2024_batch();
    let before = batch.clone();
    let window = ReportWindow::new(date(2024, 1, 1), date(2024, 12, 31));
    let _ = filter_expiring_within(&batch, &window, noon(2024, 6, 1));
    assert_eq!(batch, before);
}

// ============================================================
// Exclusions
// ============================================================

#[test]
fn unlimited_and_undated_never_selected() {
    let batch = vec![
        unlimited_license("u1", Some(date(2024, 6, 10))),
        unlimited_license("u2", None),
        undated_license("x", 1),
        LicenseRecord::new("bad-term", None, Some(date(2024, 5, 15)), None),
    ];
    let window = ReportWindow::new(date(1900, 1, 1), date(2999, 12, 31));

    assert!(filter_expiring_within(&batch, &window, noon(2024, 6, 1)).is_empty());
}

#[test]
fn already_expired_licenses_in_window_are_reported() {
    let batch = vec![web_license("lapsed", date(2024, 1, 10), 5)];
    let window = ReportWindow::new(date(2024, 6, 1), date(2024, 6, 30));

    let selected = filter_expiring_within(&batch, &window, noon(2024, 6, 20));
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].expiration.remaining, RemainingDays::Expired);
}

// ============================================================
// Window edges
// ============================================================

#[test]
fn window_edges_are_inclusive() {
    let batch = vec![
        web_license("first-day", date(2024, 5, 1), 1),
        web_license("last-day", date(2024, 5, 30), 1),
        web_license("day-before", date(2024, 4, 30), 1),
        web_license("day-after", date(2024, 6, 1), 1),
    ];
    let window = ReportWindow::new(date(2024, 6, 1), date(2024, 6, 30));

    let names: Vec<_> = filter_expiring_within(&batch, &window, noon(2024, 1, 1))
        .into_iter()
        .map(|a| a.record.client_id)
        .collect();
    assert_eq!(names, vec!["first-day", "last-day"]);
}

#[test]
fn inverted_window_yields_nothing() {
    let window = ReportWindow::new(date(2024, 6, 30), date(2024, 6, 1));
    assert!(filter_expiring_within(&june_2024_batch(), &window, noon(2024, 6, 1)).is_empty());
}

#[test]
fn empty_batch_yields_nothing() {
    let window = ReportWindow::new(date(2024, 6, 1), date(2024, 6, 30));
    assert!(filter_expiring_within(&[], &window, noon(2024, 6, 1)).is_empty());
}

#[test]
fn output_keeps_input_order() {
    let batch = vec![
        web_license("c", date(2024, 5, 20), 1),
        web_license("a", date(2024, 5, 3), 1),
        web_license("b", date(2024, 5, 11), 1),
    ];
    let window = ReportWindow::new(date(2024, 6, 1), date(2024, 6, 30));
    let names: Vec<_> = filter_expiring_within(&batch, &window, noon(2024, 6, 1))
        .into_iter()
        .map(|a| a.record.client_id)
        .collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

// ============================================================
// One instant per pass
// ============================================================

#[test]
fn whole_batch_judged_against_same_instant() {
    // Every license expires on 2024-06-01. Evaluated at 23:59 on 2024-05-31
    // they all have one day left; none may flip to zero mid-batch.
    let batch: Vec<_> = (0..200)
        .map(|i| web_license(&format!("c{i}"), date(2024, 5, 1), 1))
        .collect();
    let eval = Evaluation::at(date(2024, 5, 31).and_hms_opt(23, 59, 59).unwrap());

    let annotated = eval.evaluate_batch(&batch);
    assert!(annotated
        .iter()
        .all(|a| a.expiration.remaining == RemainingDays::Days(1)));

    let window = ReportWindow::new(date(2024, 6, 1), date(2024, 6, 1));
    let selected = filter_expiring_within(&batch, &window, eval.now());
    assert_eq!(selected.len(), 200);
    assert!(selected
        .iter()
        .all(|a| a.expiration.remaining == RemainingDays::Days(1)));
}

#[test]
fn annotations_match_batch_evaluation() {
    let batch = june_2024_batch();
    let eval = Evaluation::at(noon(2024, 6, 1));
    let window = ReportWindow::new(date(2024, 6, 1), date(2024, 6, 30));

    let all = eval.evaluate_batch(&batch);
    for selected in filter_expiring_within(&batch, &window, eval.now()) {
        let twin = all
            .iter()
            .find(|a| a.record == selected.record)
            .expect("selected record present in batch evaluation");
        assert_eq!(twin.expiration, selected.expiration);
    }
    assert_eq!(all[0].expiration.remaining, RemainingDays::Unlimited);
    assert_eq!(all[2].expiration.remaining, RemainingDays::Expired);
    assert_eq!(all[2].record.term, Some(LicenseTerm::Months(6)));
}
