//! Break-even calculation modules for the ROAS calculator.
//!
//! This module provides the worksheet that derives the four break-even
//! metrics (revenue and ROAS, each with and without the service fee) from a
//! validated campaign input.

pub mod breakeven;

pub use breakeven::{
    BreakevenConfig, BreakevenInput, BreakevenMetrics, BreakevenWorksheet, BreakevenWorksheetError,
};
