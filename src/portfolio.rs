//! Batch projections across many contracts
//!
//! Projects each contract independently (in parallel), then optionally
//! consolidates them into a single company-wide cash-flow view.

use crate::contract::{BillingProfile, ContractRecord};
use crate::error::Result;
use crate::projection::{CashFlowProjection, ProjectionConfig, ProjectionEngine};
use log::{debug, warn};
use rayon::prelude::*;

/// Runs one projection configuration over a set of contracts
///
/// # Example
/// ```ignore
/// let runner = PortfolioRunner::new(ProjectionConfig::with_months(12));
/// let projections = runner.run_batch(&profiles);
/// let combined = PortfolioRunner::consolidate(&projections);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioRunner {
    engine: ProjectionEngine,
}

impl PortfolioRunner {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }

    /// Run a single projection
    pub fn run(&self, profile: &BillingProfile) -> Result<CashFlowProjection> {
        self.engine.project(profile)
    }

    /// Project every profile; results keep the input order
    pub fn run_batch(&self, profiles: &[BillingProfile]) -> Result<Vec<CashFlowProjection>> {
        profiles.par_iter().map(|profile| self.engine.project(profile)).collect()
    }

    /// Project raw records, skipping any that cannot become a profile
    pub fn run_records(&self, records: &[ContractRecord]) -> Vec<CashFlowProjection> {
        records
            .par_iter()
            .enumerate()
            .filter_map(|(idx, record)| {
                let projected = record.to_profile().and_then(|profile| self.engine.project(&profile));
                match projected {
                    Ok(projection) => Some(projection),
                    Err(e) => {
                        warn!("skipping contract record {} ({:?}): {}", idx + 1, record.name, e);
                        None
                    }
                }
            })
            .collect()
    }

    /// Merge projections into one chronological view with a shared running balance
    ///
    /// Same-day entries keep the order of the input projections.
    pub fn consolidate(projections: &[CashFlowProjection]) -> Option<CashFlowProjection> {
        let start = projections.iter().map(|p| p.projection_start).min()?;
        let end = projections.iter().map(|p| p.projection_end).max()?;

        let entries: Vec<_> = projections
            .iter()
            .flat_map(|p| p.entries.iter().cloned())
            .collect();

        debug!("consolidated {} projections into {} entries", projections.len(), entries.len());
        Some(CashFlowProjection::from_entries(entries, start, end))
    }
}
