//! Billing schedule: cycle dates, settlement dates and per-cycle values

mod calendar;
mod rates;
mod settlement;

pub use calendar::{cycle_count, cycle_date, generate_billing_dates};
pub use rates::{resolve_cycle_values, CycleValues};
pub use settlement::{
    cost_settlement_date, resolve_settlement_date, resolve_settlement_date_raw, COST_SETTLEMENT_DAYS,
};
