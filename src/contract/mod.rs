//! Contract billing profiles and record loading

mod data;
pub mod loader;

pub use data::{BillingFrequency, BillingProfile, PaymentTerms, RateCard, DEFAULT_PAYMENT_TERM_DAYS};
pub use loader::{load_contracts, load_contracts_from_reader, to_profiles, ContractRecord};
