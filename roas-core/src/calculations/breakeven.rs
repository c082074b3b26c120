//! Break-even worksheet for advertising campaigns.
//!
//! This module implements the break-even computation behind the calculator:
//! given a campaign's gross margin, expected ad spend, and the agency service
//! fee, it derives the revenue and ROAS (return on ad spend) the campaign
//! must reach before it stops losing money.
//!
//! # Worksheet Structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Gross margin fraction: gross margin percent ÷ 100 |
//! | 2    | Total spend: expected ad spend + service fee |
//! | 3    | Break-even revenue (incl. fee): total spend ÷ gross margin fraction |
//! | 4    | Break-even revenue (ad spend only): ad spend ÷ gross margin fraction |
//! | 5    | Break-even ROAS (incl. fee): step 3 ÷ ad spend |
//! | 6    | Break-even ROAS (ad spend only): step 4 ÷ ad spend |
//!
//! Step 6 divides a value whose numerator contains the ad spend by the ad
//! spend itself, so it always equals 1 ÷ gross margin fraction no matter how
//! large the campaign is. That cancellation is part of the published
//! behavior and is kept as-is.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use roas_core::calculations::{BreakevenConfig, BreakevenInput, BreakevenWorksheet};
//! use roas_core::models::Currency;
//!
//! let worksheet = BreakevenWorksheet::new(BreakevenConfig::default());
//! let input = BreakevenInput {
//!     currency: Currency::Eur,
//!     gross_margin_percent: dec!(50),
//!     expected_ad_spend: dec!(100000),
//!     service_fee: dec!(2000),
//! };
//!
//! let metrics = worksheet.calculate(&input).unwrap();
//!
//! assert_eq!(metrics.breakeven_revenue_with_fee, dec!(204000));
//! assert_eq!(metrics.breakeven_revenue_no_fee, dec!(200000));
//! assert_eq!(metrics.breakeven_roas_with_fee, dec!(2.04));
//! assert_eq!(metrics.breakeven_roas_no_fee, dec!(2));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Currency;

/// Errors that can occur during break-even worksheet calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BreakevenWorksheetError {
    /// The gross margin bounds must satisfy 0 < min ≤ max < 100.
    #[error("gross margin bounds must satisfy 0 < min <= max < 100, got [{0}, {1}]")]
    InvalidGrossMarginBounds(Decimal, Decimal),

    /// The minimum ad spend must be positive (ad spend is a divisor).
    #[error("minimum ad spend must be positive, got {0}")]
    InvalidMinAdSpend(Decimal),

    /// The minimum service fee must be non-negative.
    #[error("minimum service fee must be non-negative, got {0}")]
    InvalidMinServiceFee(Decimal),

    /// The input gross margin is not usable as a divisor.
    #[error("gross margin percent must be positive, got {0}")]
    NonPositiveGrossMargin(Decimal),

    /// The input ad spend is not usable as a divisor.
    #[error("expected ad spend must be positive, got {0}")]
    NonPositiveAdSpend(Decimal),
}

/// Validation bounds for the calculator's input fields.
///
/// The defaults are the published form constraints: gross margin between 1%
/// and 99%, ad spend and service fee of at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakevenConfig {
    /// Lowest accepted gross margin, in percent.
    pub gross_margin_min: Decimal,

    /// Highest accepted gross margin, in percent.
    pub gross_margin_max: Decimal,

    /// Lowest accepted expected ad spend.
    pub min_ad_spend: Decimal,

    /// Lowest accepted service fee.
    pub min_service_fee: Decimal,
}

impl Default for BreakevenConfig {
    fn default() -> Self {
        Self {
            gross_margin_min: Decimal::ONE,
            gross_margin_max: Decimal::from(99),
            min_ad_spend: Decimal::ONE,
            min_service_fee: Decimal::ONE,
        }
    }
}

impl BreakevenConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`BreakevenWorksheetError`] if:
    /// - the gross margin bounds do not satisfy 0 < min ≤ max < 100
    /// - `min_ad_spend` is not positive
    /// - `min_service_fee` is negative
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use roas_core::calculations::{BreakevenConfig, BreakevenWorksheetError};
    ///
    /// let invalid = BreakevenConfig {
    ///     gross_margin_min: dec!(0),
    ///     ..BreakevenConfig::default()
    /// };
    ///
    /// assert_eq!(
    ///     invalid.validate(),
    ///     Err(BreakevenWorksheetError::InvalidGrossMarginBounds(dec!(0), dec!(99))),
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), BreakevenWorksheetError> {
        if self.gross_margin_min <= Decimal::ZERO
            || self.gross_margin_max >= Decimal::ONE_HUNDRED
            || self.gross_margin_min > self.gross_margin_max
        {
            return Err(BreakevenWorksheetError::InvalidGrossMarginBounds(
                self.gross_margin_min,
                self.gross_margin_max,
            ));
        }
        if self.min_ad_spend <= Decimal::ZERO {
            return Err(BreakevenWorksheetError::InvalidMinAdSpend(
                self.min_ad_spend,
            ));
        }
        if self.min_service_fee < Decimal::ZERO {
            return Err(BreakevenWorksheetError::InvalidMinServiceFee(
                self.min_service_fee,
            ));
        }
        Ok(())
    }
}

/// Validated input for one break-even calculation.
///
/// Produced by [`crate::form::validate`]; the currency is carried through
/// for display only and never enters the arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakevenInput {
    /// Display currency for the revenue figures.
    pub currency: Currency,

    /// Gross margin as a percentage, e.g. 50 for a 50% margin.
    pub gross_margin_percent: Decimal,

    /// Planned advertising spend for the period.
    pub expected_ad_spend: Decimal,

    /// Fixed agency or tooling fee added on top of the ad spend.
    pub service_fee: Decimal,
}

/// The four derived break-even metrics.
///
/// Always produced as a whole; callers replace any previously displayed
/// metrics with a fresh value rather than updating fields one by one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakevenMetrics {
    /// Revenue needed to cover ad spend plus the service fee (step 3).
    pub breakeven_revenue_with_fee: Decimal,

    /// Revenue needed to cover the ad spend alone (step 4).
    pub breakeven_revenue_no_fee: Decimal,

    /// ROAS at which ad spend plus fee is recovered (step 5).
    pub breakeven_roas_with_fee: Decimal,

    /// ROAS at which the ad spend alone is recovered (step 6).
    ///
    /// Always equals 1 ÷ gross margin fraction; see the module docs.
    pub breakeven_roas_no_fee: Decimal,
}

/// Calculator for the break-even worksheet.
#[derive(Debug, Clone)]
pub struct BreakevenWorksheet {
    config: BreakevenConfig,
}

impl BreakevenWorksheet {
    /// Creates a new worksheet with the given validation bounds.
    pub fn new(config: BreakevenConfig) -> Self {
        Self { config }
    }

    /// The validation bounds this worksheet was built with.
    pub fn config(&self) -> &BreakevenConfig {
        &self.config
    }

    /// Calculates the four break-even metrics for a validated input.
    ///
    /// Range enforcement is the validation pass's job; this method only
    /// guards the two divisors so a hand-built input cannot divide by zero.
    ///
    /// # Errors
    ///
    /// Returns [`BreakevenWorksheetError`] if the configuration is invalid
    /// or if the gross margin or ad spend is not positive.
    pub fn calculate(
        &self,
        input: &BreakevenInput,
    ) -> Result<BreakevenMetrics, BreakevenWorksheetError> {
        self.config.validate()?;

        if input.gross_margin_percent <= Decimal::ZERO {
            return Err(BreakevenWorksheetError::NonPositiveGrossMargin(
                input.gross_margin_percent,
            ));
        }
        if input.expected_ad_spend <= Decimal::ZERO {
            return Err(BreakevenWorksheetError::NonPositiveAdSpend(
                input.expected_ad_spend,
            ));
        }

        let gross_margin_fraction = self.gross_margin_fraction(input.gross_margin_percent);
        let total_spend = self.total_spend(input.expected_ad_spend, input.service_fee);

        let breakeven_revenue_with_fee = self.breakeven_revenue(total_spend, gross_margin_fraction);
        let breakeven_revenue_no_fee =
            self.breakeven_revenue(input.expected_ad_spend, gross_margin_fraction);

        let breakeven_roas_with_fee =
            self.breakeven_roas(breakeven_revenue_with_fee, input.expected_ad_spend);
        // Numerator and denominator both carry the ad spend, so this cancels
        // to 1 / gross margin fraction. Kept literal; see module docs.
        let breakeven_roas_no_fee =
            self.breakeven_roas(breakeven_revenue_no_fee, input.expected_ad_spend);

        Ok(BreakevenMetrics {
            breakeven_revenue_with_fee,
            breakeven_revenue_no_fee,
            breakeven_roas_with_fee,
            breakeven_roas_no_fee,
        })
    }

    /// Converts the percentage margin into a fraction (step 1).
    fn gross_margin_fraction(
        &self,
        gross_margin_percent: Decimal,
    ) -> Decimal {
        gross_margin_percent / Decimal::ONE_HUNDRED
    }

    /// Ad spend plus the fixed service fee (step 2).
    fn total_spend(
        &self,
        expected_ad_spend: Decimal,
        service_fee: Decimal,
    ) -> Decimal {
        expected_ad_spend + service_fee
    }

    /// Revenue at which the margin covers the given cost base (steps 3, 4).
    fn breakeven_revenue(
        &self,
        spend: Decimal,
        gross_margin_fraction: Decimal,
    ) -> Decimal {
        spend / gross_margin_fraction
    }

    /// Revenue-to-ad-spend ratio (steps 5, 6).
    fn breakeven_roas(
        &self,
        revenue: Decimal,
        expected_ad_spend: Decimal,
    ) -> Decimal {
        revenue / expected_ad_spend
    }
}
