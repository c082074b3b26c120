//! Validation of raw form input.
//!
//! The calculator screen captures everything as text. This module coerces
//! and checks that text in a single pass: every field is examined, all
//! failures are collected, and the caller gets either a fully typed
//! [`BreakevenInput`] or the complete list of field errors. No partially
//! valid input ever reaches the worksheet.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use roas_core::calculations::BreakevenConfig;
//! use roas_core::form::{self, RawBreakevenInput};
//!
//! let raw = RawBreakevenInput {
//!     currency: "EUR".to_string(),
//!     gross_margin_percent: "50".to_string(),
//!     expected_ad_spend: "100,000".to_string(),
//!     service_fee: "2000".to_string(),
//! };
//!
//! let input = form::validate(&raw, &BreakevenConfig::default()).unwrap();
//!
//! assert_eq!(input.expected_ad_spend, dec!(100000));
//! ```

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::{BreakevenConfig, BreakevenInput};
use crate::models::Currency;

/// Raw, string-typed form capture as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct RawBreakevenInput {
    pub currency: String,
    pub gross_margin_percent: String,
    pub expected_ad_spend: String,
    pub service_fee: String,
}

/// The form fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormField {
    Currency,
    GrossMarginPercent,
    ExpectedAdSpend,
    ServiceFee,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Currency => "Currency",
            Self::GrossMarginPercent => "Gross margin (%)",
            Self::ExpectedAdSpend => "Expected ad spend",
            Self::ServiceFee => "Service fee",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldErrorKind {
    /// The text could not be coerced to a number (or a known currency).
    TypeMismatch,
    /// The coerced number violates the field's bound.
    OutOfRange,
}

/// A single field-scoped validation failure.
///
/// These are user-correctable: the UI shows them inline next to the
/// offending field and nothing crashes or blocks.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}: {}", .field, .message)]
pub struct FieldError {
    pub field: FormField,
    pub kind: FieldErrorKind,
    pub message: String,
}

/// Every failure found by one validation pass. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl fmt::Display for ValidationErrors {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates raw form input against the configured bounds.
///
/// All fields are checked in one pass and every failure is reported, so the
/// user can fix the whole form at once instead of replaying submissions.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing each offending field with a
/// [`FieldErrorKind::TypeMismatch`] (text not coercible) or
/// [`FieldErrorKind::OutOfRange`] (bound violated) reason.
pub fn validate(
    raw: &RawBreakevenInput,
    config: &BreakevenConfig,
) -> Result<BreakevenInput, ValidationErrors> {
    let mut errors = Vec::new();

    let currency = parse_currency(&raw.currency, &mut errors);
    let gross_margin_percent = parse_number(
        FormField::GrossMarginPercent,
        &raw.gross_margin_percent,
        &mut errors,
    );
    let expected_ad_spend =
        parse_number(FormField::ExpectedAdSpend, &raw.expected_ad_spend, &mut errors);
    let service_fee = parse_number(FormField::ServiceFee, &raw.service_fee, &mut errors);

    if let Some(value) = gross_margin_percent {
        if value < config.gross_margin_min || value > config.gross_margin_max {
            errors.push(FieldError {
                field: FormField::GrossMarginPercent,
                kind: FieldErrorKind::OutOfRange,
                message: format!(
                    "must be between {} and {}",
                    config.gross_margin_min, config.gross_margin_max,
                ),
            });
        }
    }
    check_minimum(
        FormField::ExpectedAdSpend,
        expected_ad_spend,
        config.min_ad_spend,
        &mut errors,
    );
    check_minimum(
        FormField::ServiceFee,
        service_fee,
        config.min_service_fee,
        &mut errors,
    );

    match (currency, gross_margin_percent, expected_ad_spend, service_fee) {
        (Some(currency), Some(gross_margin_percent), Some(expected_ad_spend), Some(service_fee))
            if errors.is_empty() =>
        {
            Ok(BreakevenInput {
                currency,
                gross_margin_percent,
                expected_ad_spend,
                service_fee,
            })
        }
        _ => {
            warn!(count = errors.len(), "form input rejected");
            Err(ValidationErrors(errors))
        }
    }
}

/// Trims whitespace and removes the comma thousands separator.
fn normalize_number_input(s: &str) -> String {
    s.trim().replace(',', "")
}

fn parse_currency(
    value: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Currency> {
    match Currency::parse(value) {
        Some(currency) => Some(currency),
        None => {
            errors.push(FieldError {
                field: FormField::Currency,
                kind: FieldErrorKind::TypeMismatch,
                message: format!("unknown currency '{}'", value.trim()),
            });
            None
        }
    }
}

fn parse_number(
    field: FormField,
    value: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Decimal> {
    let normalized = normalize_number_input(value);
    match normalized.parse::<Decimal>() {
        Ok(number) => Some(number),
        Err(_) => {
            errors.push(FieldError {
                field,
                kind: FieldErrorKind::TypeMismatch,
                message: if normalized.is_empty() {
                    "enter a number".to_string()
                } else {
                    format!("'{}' is not a number", value.trim())
                },
            });
            None
        }
    }
}

fn check_minimum(
    field: FormField,
    value: Option<Decimal>,
    minimum: Decimal,
    errors: &mut Vec<FieldError>,
) {
    if let Some(value) = value {
        if value < minimum {
            errors.push(FieldError {
                field,
                kind: FieldErrorKind::OutOfRange,
                message: format!("must be at least {minimum}"),
            });
        }
    }
}
