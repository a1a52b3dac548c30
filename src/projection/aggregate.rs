//! Calendar-month roll-up of projection entries for charting

use super::cashflows::CashFlowEntry;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Totals for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    /// Short label, e.g. `Jan 2024`
    pub month: String,
    pub incoming: f64,
    pub outgoing: f64,
    /// Balance of the last entry seen in this month
    pub balance: f64,
    /// Date of the first entry seen in this month
    pub date: NaiveDate,
}

/// Bucket entries by the calendar month of their date
///
/// Buckets come back ordered by their first date. Entries are expected in
/// chronological order (as produced by the engine); when they are not, a
/// bucket's balance is still that of the last entry encountered.
pub fn aggregate_by_month(entries: &[CashFlowEntry]) -> Vec<MonthlyBucket> {
    let mut buckets: Vec<MonthlyBucket> = Vec::new();
    let mut index: HashMap<(i32, u32), usize> = HashMap::new();

    for entry in entries {
        let key = (entry.date.year(), entry.date.month());
        match index.get(&key) {
            Some(&idx) => {
                let bucket = &mut buckets[idx];
                bucket.incoming += entry.incoming;
                bucket.outgoing += entry.outgoing;
                bucket.balance = entry.balance;
            }
            None => {
                index.insert(key, buckets.len());
                buckets.push(MonthlyBucket {
                    month: entry.date.format("%b %Y").to_string(),
                    incoming: entry.incoming,
                    outgoing: entry.outgoing,
                    balance: entry.balance,
                    date: entry.date,
                });
            }
        }
    }

    buckets.sort_by_key(|bucket| bucket.date);
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{BillingFrequency, BillingProfile, PaymentTerms, RateCard};
    use crate::projection::build_projection;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(d: NaiveDate, incoming: f64, outgoing: f64, balance: f64) -> CashFlowEntry {
        CashFlowEntry {
            date: d,
            description: String::new(),
            incoming,
            outgoing,
            balance,
        }
    }

    #[test]
    fn test_buckets_sum_flows_and_keep_last_balance() {
        let entries = vec![
            entry(date(2024, 1, 8), 0.0, 3000.0, -3000.0),
            entry(date(2024, 1, 15), 5000.0, 0.0, 2000.0),
            entry(date(2024, 2, 8), 0.0, 3000.0, -1000.0),
        ];

        let buckets = aggregate_by_month(&entries);
        assert_eq!(buckets.len(), 2);

        assert_eq!(buckets[0].month, "Jan 2024");
        assert_eq!(buckets[0].date, date(2024, 1, 8));
        assert_relative_eq!(buckets[0].incoming, 5000.0);
        assert_relative_eq!(buckets[0].outgoing, 3000.0);
        assert_relative_eq!(buckets[0].balance, 2000.0);

        assert_eq!(buckets[1].month, "Feb 2024");
        assert_relative_eq!(buckets[1].balance, -1000.0);
    }

    #[test]
    fn test_same_month_different_years_are_separate() {
        let entries = vec![
            entry(date(2024, 3, 1), 10.0, 0.0, 10.0),
            entry(date(2025, 3, 1), 10.0, 0.0, 20.0),
        ];
        let buckets = aggregate_by_month(&entries);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[1].month, "Mar 2025");
    }

    #[test]
    fn test_unordered_input_buckets_ordered_by_first_date() {
        let entries = vec![
            entry(date(2024, 5, 20), 1.0, 0.0, 1.0),
            entry(date(2024, 4, 2), 2.0, 0.0, 3.0),
        ];
        let buckets = aggregate_by_month(&entries);
        assert_eq!(buckets[0].month, "Apr 2024");
        assert_eq!(buckets[1].month, "May 2024");
    }

    #[test]
    fn test_aggregating_a_projection() {
        let profile = BillingProfile::new("Canteen", date(2024, 1, 1))
            .with_frequency(BillingFrequency::Weekly)
            .with_payment_terms(PaymentTerms::Net(30))
            .with_rates(RateCard { weekly_revenue: 100.0, weekly_cost: 60.0, ..Default::default() });

        let projection = build_projection(&profile, 3).unwrap();
        let buckets = aggregate_by_month(&projection.entries);

        let incoming: f64 = buckets.iter().map(|b| b.incoming).sum();
        let outgoing: f64 = buckets.iter().map(|b| b.outgoing).sum();
        assert_relative_eq!(incoming, projection.total_incoming, epsilon = 1e-9);
        assert_relative_eq!(outgoing, projection.total_outgoing, epsilon = 1e-9);
        assert_relative_eq!(
            buckets.last().unwrap().balance,
            projection.entries.last().unwrap().balance
        );
        assert!(buckets.windows(2).all(|w| w[0].date < w[1].date));
    }
}
