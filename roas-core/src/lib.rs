pub mod calculations;
pub mod form;
pub mod models;

pub use calculations::{
    BreakevenConfig, BreakevenInput, BreakevenMetrics, BreakevenWorksheet, BreakevenWorksheetError,
};
pub use form::{FieldError, FieldErrorKind, FormField, RawBreakevenInput, ValidationErrors};
pub use models::*;
