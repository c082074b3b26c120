//! Form state for the calculator screen.

use roas_core::form::{self, FieldError, FormField, RawBreakevenInput};
use roas_core::{BreakevenConfig, BreakevenInput, Currency};

/// String-typed state backing the input widgets, plus the field errors
/// currently on display.
#[derive(Debug, Clone, Default)]
pub struct BreakevenForm {
    pub currency: Currency,
    pub gross_margin_percent: String,
    pub expected_ad_spend: String,
    pub service_fee: String,

    /// Field errors from the last rejected submission.
    pub errors: Vec<FieldError>,
}

impl BreakevenForm {
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            ..Default::default()
        }
    }

    fn to_raw_input(&self) -> RawBreakevenInput {
        RawBreakevenInput {
            currency: self.currency.as_str().to_string(),
            gross_margin_percent: self.gross_margin_percent.clone(),
            expected_ad_spend: self.expected_ad_spend.clone(),
            service_fee: self.service_fee.clone(),
        }
    }

    /// Runs the single validation pass over the current field values.
    ///
    /// On success the displayed errors are cleared and the typed input is
    /// returned; on failure the full list of field errors is stored for
    /// inline display and `None` comes back.
    pub fn validate(
        &mut self,
        config: &BreakevenConfig,
    ) -> Option<BreakevenInput> {
        match form::validate(&self.to_raw_input(), config) {
            Ok(input) => {
                self.errors.clear();
                Some(input)
            }
            Err(errors) => {
                self.errors = errors.0;
                None
            }
        }
    }

    /// Error messages attached to one field, for inline display.
    pub fn errors_for(
        &self,
        field: FormField,
    ) -> impl Iterator<Item = &FieldError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn has_error(
        &self,
        field: FormField,
    ) -> bool {
        self.errors_for(field).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use roas_core::FieldErrorKind;
    use rust_decimal_macros::dec;

    use super::*;

    fn filled_form() -> BreakevenForm {
        BreakevenForm {
            gross_margin_percent: "50".to_string(),
            expected_ad_spend: "100000".to_string(),
            service_fee: "2000".to_string(),
            ..BreakevenForm::new(Currency::Eur)
        }
    }

    #[test]
    fn new_form_defaults_to_eur() {
        let form = BreakevenForm::default();

        assert_eq!(form.currency, Currency::Eur);
    }

    #[test]
    fn validate_returns_typed_input_and_clears_errors() {
        let mut form = filled_form();
        form.errors = vec![FieldError {
            field: FormField::ServiceFee,
            kind: FieldErrorKind::OutOfRange,
            message: "stale".to_string(),
        }];

        let input = form.validate(&BreakevenConfig::default()).unwrap();

        assert_eq!(input.gross_margin_percent, dec!(50));
        assert_eq!(input.currency, Currency::Eur);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn validate_stores_field_errors_on_rejection() {
        let mut form = filled_form();
        form.gross_margin_percent = "120".to_string();
        form.service_fee = "free".to_string();

        let result = form.validate(&BreakevenConfig::default());

        assert!(result.is_none());
        assert!(form.has_error(FormField::GrossMarginPercent));
        assert!(form.has_error(FormField::ServiceFee));
        assert!(!form.has_error(FormField::ExpectedAdSpend));
    }

    #[test]
    fn errors_for_filters_by_field() {
        let mut form = filled_form();
        form.expected_ad_spend = "0".to_string();

        form.validate(&BreakevenConfig::default());

        let messages: Vec<_> = form
            .errors_for(FormField::ExpectedAdSpend)
            .map(|e| e.kind)
            .collect();
        assert_eq!(messages, vec![FieldErrorKind::OutOfRange]);
        assert_eq!(form.errors_for(FormField::Currency).count(), 0);
    }
}
