//! Cash-flow output structures for projections

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated movement of cash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowEntry {
    /// Settlement date the cash moves on
    pub date: NaiveDate,
    pub description: String,
    pub incoming: f64,
    pub outgoing: f64,
    /// Running balance after this entry, in chronological order
    pub balance: f64,
}

impl CashFlowEntry {
    /// Revenue entry; balance is filled in when the projection is assembled
    pub fn revenue(date: NaiveDate, description: String, amount: f64) -> Self {
        Self {
            date,
            description,
            incoming: amount,
            outgoing: 0.0,
            balance: 0.0,
        }
    }

    /// Cost entry; balance is filled in when the projection is assembled
    pub fn cost(date: NaiveDate, description: String, amount: f64) -> Self {
        Self {
            date,
            description,
            incoming: 0.0,
            outgoing: amount,
            balance: 0.0,
        }
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowProjection {
    /// Entries in settlement-date order
    pub entries: Vec<CashFlowEntry>,

    pub total_incoming: f64,
    pub total_outgoing: f64,
    pub net_cash_flow: f64,

    pub projection_start: NaiveDate,
    pub projection_end: NaiveDate,
}

impl CashFlowProjection {
    /// Assemble a projection from entries in emission order
    ///
    /// Entries are stable-sorted by date (same-day entries keep their
    /// emission order) before running balances are written, since revenue
    /// and cost for one cycle can settle on different days.
    pub fn from_entries(
        mut entries: Vec<CashFlowEntry>,
        projection_start: NaiveDate,
        projection_end: NaiveDate,
    ) -> Self {
        entries.sort_by_key(|entry| entry.date);

        let mut balance = 0.0;
        let mut total_incoming = 0.0;
        let mut total_outgoing = 0.0;
        for entry in entries.iter_mut() {
            balance += entry.incoming - entry.outgoing;
            entry.balance = balance;
            total_incoming += entry.incoming;
            total_outgoing += entry.outgoing;
        }

        Self {
            entries,
            total_incoming,
            total_outgoing,
            net_cash_flow: total_incoming - total_outgoing,
            projection_start,
            projection_end,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let revenue_entries = self.entries.iter().filter(|e| e.incoming > 0.0).count();
        let cost_entries = self.entries.iter().filter(|e| e.outgoing > 0.0).count();
        let closing_balance = self.entries.last().map(|e| e.balance).unwrap_or(0.0);

        let lowest = self
            .entries
            .iter()
            .min_by(|a, b| a.balance.total_cmp(&b.balance));

        ProjectionSummary {
            revenue_entries,
            cost_entries,
            total_incoming: self.total_incoming,
            total_outgoing: self.total_outgoing,
            net_cash_flow: self.net_cash_flow,
            closing_balance,
            lowest_balance: lowest.map(|e| e.balance).unwrap_or(0.0),
            lowest_balance_date: lowest.map(|e| e.date),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub revenue_entries: usize,
    pub cost_entries: usize,
    pub total_incoming: f64,
    pub total_outgoing: f64,
    pub net_cash_flow: f64,
    pub closing_balance: f64,
    /// Tightest cash position reached in the window
    pub lowest_balance: f64,
    pub lowest_balance_date: Option<NaiveDate>,
}
