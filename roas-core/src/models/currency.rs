use serde::{Deserialize, Serialize};

/// Display currency for the revenue figures. Not used in any computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    #[default]
    Eur,
    Gbp,
}

impl Currency {
    pub fn all() -> &'static [Currency] {
        &[Currency::Usd, Currency::Eur, Currency::Gbp]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Usd => "US Dollar (USD)",
            Self::Eur => "Euro (EUR)",
            Self::Gbp => "Pound Sterling (GBP)",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Some(Self::Usd),
            "EUR" => Some(Self::Eur),
            "GBP" => Some(Self::Gbp),
            _ => None,
        }
    }
}
