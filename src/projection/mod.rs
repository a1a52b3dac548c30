//! Projection engine for recurring billing cash flows

mod aggregate;
mod cashflows;
mod engine;

pub use aggregate::{aggregate_by_month, MonthlyBucket};
pub use cashflows::{CashFlowEntry, CashFlowProjection, ProjectionSummary};
pub use engine::{build_projection, ProjectionConfig, ProjectionEngine, DEFAULT_PROJECTION_MONTHS};
