mod currency;

pub use currency::Currency;
