//! Billing-cycle anchor dates for each frequency

use crate::contract::BillingFrequency;
use crate::error::{ProjectionError, Result};
use chrono::{Days, Months, NaiveDate};

/// Date of cycle `index` counted from `start`
///
/// Month arithmetic clamps to the last day of shorter months, so a
/// contract anchored on the 31st bills on the 30th (or 28th/29th) where
/// the month is shorter.
pub fn cycle_date(start: NaiveDate, frequency: BillingFrequency, index: u32) -> Result<NaiveDate> {
    let shifted = match frequency {
        BillingFrequency::Weekly => start.checked_add_days(Days::new(7 * index as u64)),
        BillingFrequency::Fortnightly => start.checked_add_days(Days::new(14 * index as u64)),
        BillingFrequency::Monthly => start.checked_add_months(Months::new(index)),
        BillingFrequency::Quarterly => index.checked_mul(3).and_then(|m| start.checked_add_months(Months::new(m))),
        BillingFrequency::Annually => index.checked_mul(12).and_then(|m| start.checked_add_months(Months::new(m))),
    };
    shifted.ok_or(ProjectionError::DateOutOfRange(start))
}

/// Generate `count` billing dates, the first equal to `start`
pub fn generate_billing_dates(
    start: NaiveDate,
    frequency: BillingFrequency,
    count: u32,
) -> Result<Vec<NaiveDate>> {
    (0..count).map(|i| cycle_date(start, frequency, i)).collect()
}

/// Number of cycles needed to cover a projection window
///
/// Weekly and fortnightly counts approximate a month as four weeks.
pub fn cycle_count(frequency: BillingFrequency, projection_months: u32) -> u32 {
    match frequency {
        BillingFrequency::Weekly => projection_months.saturating_mul(4),
        BillingFrequency::Fortnightly => projection_months.saturating_mul(2),
        BillingFrequency::Monthly => projection_months,
        BillingFrequency::Quarterly => projection_months.div_ceil(3).max(2),
        BillingFrequency::Annually => projection_months.div_ceil(12).max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const ALL: [BillingFrequency; 5] = [
        BillingFrequency::Weekly,
        BillingFrequency::Fortnightly,
        BillingFrequency::Monthly,
        BillingFrequency::Quarterly,
        BillingFrequency::Annually,
    ];

    #[test]
    fn test_length_and_strictly_increasing() {
        for start in [date(2024, 1, 1), date(2024, 1, 31), date(2024, 2, 29)] {
            for frequency in ALL {
                for count in [1, 2, 13, 60] {
                    let dates = generate_billing_dates(start, frequency, count).unwrap();
                    assert_eq!(dates.len(), count as usize);
                    assert_eq!(dates[0], start);
                    assert!(dates.windows(2).all(|w| w[0] < w[1]), "{:?} from {}", frequency, start);
                }
            }
        }
    }

    #[test]
    fn test_frequency_steps() {
        let start = date(2024, 1, 10);
        let weekly = generate_billing_dates(start, BillingFrequency::Weekly, 3).unwrap();
        assert_eq!(weekly, vec![start, date(2024, 1, 17), date(2024, 1, 24)]);

        let fortnightly = generate_billing_dates(start, BillingFrequency::Fortnightly, 3).unwrap();
        assert_eq!(fortnightly, vec![start, date(2024, 1, 24), date(2024, 2, 7)]);

        let quarterly = generate_billing_dates(start, BillingFrequency::Quarterly, 3).unwrap();
        assert_eq!(quarterly, vec![start, date(2024, 4, 10), date(2024, 7, 10)]);

        let annually = generate_billing_dates(start, BillingFrequency::Annually, 2).unwrap();
        assert_eq!(annually, vec![start, date(2025, 1, 10)]);
    }

    #[test]
    fn test_month_end_is_derived_from_start() {
        // Each cycle is offset from the anchor, so a short February does not drag later months.
        let dates = generate_billing_dates(date(2024, 1, 31), BillingFrequency::Monthly, 3).unwrap();
        assert_eq!(dates, vec![date(2024, 1, 31), date(2024, 2, 29), date(2024, 3, 31)]);
    }

    #[test]
    fn test_cycle_counts() {
        assert_eq!(cycle_count(BillingFrequency::Monthly, 3), 3);
        assert_eq!(cycle_count(BillingFrequency::Weekly, 1), 4);
        assert_eq!(cycle_count(BillingFrequency::Fortnightly, 6), 12);
        assert_eq!(cycle_count(BillingFrequency::Quarterly, 1), 2);
        assert_eq!(cycle_count(BillingFrequency::Quarterly, 12), 4);
        assert_eq!(cycle_count(BillingFrequency::Quarterly, 13), 5);
        assert_eq!(cycle_count(BillingFrequency::Annually, 1), 1);
        assert_eq!(cycle_count(BillingFrequency::Annually, 25), 3);
    }

    #[test]
    fn test_out_of_range_is_reported() {
        let err = generate_billing_dates(NaiveDate::MAX, BillingFrequency::Weekly, 2).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
