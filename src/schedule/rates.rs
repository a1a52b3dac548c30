//! Revenue and cost amounts for a single billing cycle

use crate::contract::{BillingFrequency, BillingProfile, RateCard};
use serde::{Deserialize, Serialize};

/// Amounts invoiced and paid out for one cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CycleValues {
    pub revenue: f64,
    pub cost: f64,
}

impl CycleValues {
    /// Select the rate pair for `frequency`, scaling where the contract
    /// only stores a shorter-period rate (fortnightly from weekly,
    /// quarterly from monthly)
    pub fn for_frequency(frequency: BillingFrequency, rates: &RateCard) -> Self {
        match frequency {
            BillingFrequency::Weekly => Self {
                revenue: rates.weekly_revenue,
                cost: rates.weekly_cost,
            },
            BillingFrequency::Fortnightly => Self {
                revenue: rates.weekly_revenue * 2.0,
                cost: rates.weekly_cost * 2.0,
            },
            BillingFrequency::Monthly => Self {
                revenue: rates.monthly_revenue,
                cost: rates.monthly_cost,
            },
            BillingFrequency::Quarterly => Self {
                revenue: rates.monthly_revenue * 3.0,
                cost: rates.monthly_cost * 3.0,
            },
            BillingFrequency::Annually => Self {
                revenue: rates.annual_revenue,
                cost: rates.annual_cost,
            },
        }
    }
}

/// Revenue and cost for one cycle of `profile`
pub fn resolve_cycle_values(profile: &BillingProfile) -> CycleValues {
    CycleValues::for_frequency(profile.billing_frequency, &profile.rates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn rates() -> RateCard {
        RateCard {
            weekly_revenue: 1000.0,
            weekly_cost: 250.0,
            monthly_revenue: 5000.0,
            monthly_cost: 3000.0,
            annual_revenue: 60000.0,
            annual_cost: 20000.0,
        }
    }

    #[test]
    fn test_fortnightly_doubles_weekly() {
        let profile = BillingProfile::new("Test", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .with_frequency(BillingFrequency::Fortnightly)
            .with_rates(RateCard { weekly_revenue: 1000.0, ..Default::default() });

        let values = resolve_cycle_values(&profile);
        assert_relative_eq!(values.revenue, 2000.0);
        assert_relative_eq!(values.cost, 0.0);
    }

    #[test]
    fn test_selection_table() {
        let r = rates();
        let cases = [
            (BillingFrequency::Weekly, 1000.0, 250.0),
            (BillingFrequency::Fortnightly, 2000.0, 500.0),
            (BillingFrequency::Monthly, 5000.0, 3000.0),
            (BillingFrequency::Quarterly, 15000.0, 9000.0),
            (BillingFrequency::Annually, 60000.0, 20000.0),
        ];

        for (frequency, revenue, cost) in cases {
            let values = CycleValues::for_frequency(frequency, &r);
            assert_relative_eq!(values.revenue, revenue);
            assert_relative_eq!(values.cost, cost);
        }
    }

    #[test]
    fn test_missing_rates_are_zero() {
        let profile = BillingProfile::new("Empty", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .with_frequency(BillingFrequency::Annually);
        assert_eq!(resolve_cycle_values(&profile), CycleValues::default());
    }
}
