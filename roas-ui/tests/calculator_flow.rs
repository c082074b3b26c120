//! Integration tests that drive the application state the way the screen
//! does: fill the form, submit, and read the displayed metrics.
//!
//! These complement the unit tests inside app.rs and form.rs by exercising
//! the full validate-then-calculate path across the crate boundary.

use pretty_assertions::assert_eq;
use roas_core::{Currency, FieldErrorKind, FormField};
use roas_ui::BreakevenApp;
use rust_decimal_macros::dec;

fn submit(
    app: &mut BreakevenApp,
    margin: &str,
    ad_spend: &str,
    fee: &str,
) {
    app.form.gross_margin_percent = margin.to_string();
    app.form.expected_ad_spend = ad_spend.to_string();
    app.form.service_fee = fee.to_string();
    app.calculate();
}

#[test]
fn submitting_the_published_example_yields_its_metrics() {
    let mut app = BreakevenApp::new(Currency::Eur);

    submit(&mut app, "50", "100000", "2000");

    let metrics = app.metrics.as_ref().expect("metrics after valid submit");
    assert_eq!(metrics.breakeven_revenue_with_fee, dec!(204000));
    assert_eq!(metrics.breakeven_revenue_no_fee, dec!(200000));
    assert_eq!(metrics.breakeven_roas_with_fee, dec!(2.04));
    assert_eq!(metrics.breakeven_roas_no_fee, dec!(2));
    assert!(app.form.errors.is_empty());
}

#[test]
fn resubmitting_replaces_every_metric_atomically() {
    let mut app = BreakevenApp::new(Currency::Usd);

    submit(&mut app, "50", "100000", "2000");
    submit(&mut app, "20", "50000", "5000");

    let metrics = app.metrics.as_ref().expect("metrics after resubmit");
    // Fraction 0.2, total spend 55000: nothing from the first run survives.
    assert_eq!(metrics.breakeven_revenue_with_fee, dec!(275000));
    assert_eq!(metrics.breakeven_revenue_no_fee, dec!(250000));
    assert_eq!(metrics.breakeven_roas_with_fee, dec!(5.5));
    assert_eq!(metrics.breakeven_roas_no_fee, dec!(5));
}

#[test]
fn invalid_submission_leaves_prior_metrics_on_display() {
    let mut app = BreakevenApp::new(Currency::Eur);

    submit(&mut app, "50", "100000", "2000");
    let before = app.metrics.clone();

    submit(&mut app, "100", "not a number", "2000");

    assert_eq!(app.metrics, before);
    assert!(app.form.has_error(FormField::GrossMarginPercent));
    assert!(app.form.has_error(FormField::ExpectedAdSpend));
}

#[test]
fn first_submission_must_pass_validation_before_anything_shows() {
    let mut app = BreakevenApp::new(Currency::Eur);

    submit(&mut app, "0", "100000", "2000");

    assert!(app.metrics.is_none());
    let kinds: Vec<_> = app
        .form
        .errors_for(FormField::GrossMarginPercent)
        .map(|e| e.kind)
        .collect();
    assert_eq!(kinds, vec![FieldErrorKind::OutOfRange]);
}

#[test]
fn no_fee_roas_ignores_the_ad_spend_magnitude() {
    let mut app = BreakevenApp::new(Currency::Gbp);

    submit(&mut app, "40", "1000", "500");
    let small = app.metrics.clone().expect("metrics for small campaign");

    submit(&mut app, "40", "900000", "500");
    let large = app.metrics.clone().expect("metrics for large campaign");

    assert_eq!(small.breakeven_roas_no_fee, dec!(2.5));
    assert_eq!(large.breakeven_roas_no_fee, dec!(2.5));
}
