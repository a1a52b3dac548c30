//! Cash-flow projection - recurring billing forecasts for service contracts
//!
//! This library provides:
//! - Billing-cycle calendars for weekly through annual contracts
//! - Settlement dates from payment terms
//! - Per-contract projections with running balances and totals
//! - Monthly roll-ups and CSV export for reporting
//! - Parallel batch projection and portfolio consolidation

pub mod contract;
pub mod error;
pub mod export;
pub mod portfolio;
pub mod projection;
pub mod schedule;

// Re-export commonly used types
pub use contract::{BillingFrequency, BillingProfile, ContractRecord, PaymentTerms, RateCard};
pub use error::{ProjectionError, Result};
pub use portfolio::PortfolioRunner;
pub use projection::{
    aggregate_by_month, build_projection, CashFlowEntry, CashFlowProjection, ProjectionConfig,
    ProjectionEngine,
};
