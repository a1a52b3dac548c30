//! Core projection engine for recurring billing cash flows

use crate::contract::BillingProfile;
use crate::error::{ProjectionError, Result};
use crate::schedule::{
    cost_settlement_date, cycle_count, generate_billing_dates, resolve_cycle_values,
    resolve_settlement_date,
};
use super::cashflows::{CashFlowEntry, CashFlowProjection};
use chrono::{Months, NaiveDate};
use log::debug;

/// Window used when the caller does not choose one
pub const DEFAULT_PROJECTION_MONTHS: u32 = 12;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionConfig {
    /// Number of months to project from the contract start
    pub projection_months: u32,

    /// Whether display dates (tables, CSV export) carry the year
    pub include_year_in_dates: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            projection_months: DEFAULT_PROJECTION_MONTHS,
            include_year_in_dates: true,
        }
    }
}

impl ProjectionConfig {
    pub fn with_months(projection_months: u32) -> Self {
        Self {
            projection_months,
            ..Default::default()
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run projection for a single contract
    pub fn project(&self, profile: &BillingProfile) -> Result<CashFlowProjection> {
        build_projection(profile, self.config.projection_months)
    }
}

/// End of the projection window
fn projection_end(start: NaiveDate, projection_months: u32) -> Result<NaiveDate> {
    start
        .checked_add_months(Months::new(projection_months))
        .ok_or(ProjectionError::DateOutOfRange(start))
}

/// Build the revenue and cost entries for `profile` over `projection_months`
///
/// Cycle values are resolved once; rates do not escalate across cycles.
pub fn build_projection(profile: &BillingProfile, projection_months: u32) -> Result<CashFlowProjection> {
    if projection_months < 1 {
        return Err(ProjectionError::InvalidProjectionMonths(projection_months));
    }

    let start = profile.start_date;
    let end = projection_end(start, projection_months)?;
    let frequency = profile.billing_frequency;
    let cycles = cycle_count(frequency, projection_months);
    let billing_dates = generate_billing_dates(start, frequency, cycles)?;
    let values = resolve_cycle_values(profile);

    let mut entries = Vec::with_capacity(billing_dates.len() * 2);
    for (idx, billing_date) in billing_dates.into_iter().enumerate() {
        if billing_date > end {
            continue;
        }

        entries.push(CashFlowEntry::revenue(
            resolve_settlement_date(billing_date, profile.payment_terms),
            format!("Invoice {} - {}", idx + 1, profile.label),
            values.revenue,
        ));
        entries.push(CashFlowEntry::cost(
            cost_settlement_date(billing_date),
            format!("Supplier payment - {}", profile.label),
            values.cost,
        ));
    }

    debug!(
        "projected {:?}: {} {} cycles, {} entries to {}",
        profile.label,
        cycles,
        frequency.as_str(),
        entries.len(),
        end
    );

    Ok(CashFlowProjection::from_entries(entries, start, end))
}
