//! Expected cash-settlement dates for revenue and cost

use crate::contract::PaymentTerms;
use chrono::{Days, NaiveDate};

/// Suppliers are paid a fixed week after each billing date
pub const COST_SETTLEMENT_DAYS: u32 = 7;

fn add_days_saturating(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(days as u64)).unwrap_or(NaiveDate::MAX)
}

/// Date the client is expected to pay an invoice raised on `billing_date`
pub fn resolve_settlement_date(billing_date: NaiveDate, terms: PaymentTerms) -> NaiveDate {
    add_days_saturating(billing_date, terms.days())
}

/// Same as [`resolve_settlement_date`] for a raw stored descriptor
pub fn resolve_settlement_date_raw(billing_date: NaiveDate, descriptor: Option<&str>) -> NaiveDate {
    resolve_settlement_date(billing_date, PaymentTerms::resolve(descriptor))
}

/// Date the supplier cost for a cycle is paid out
pub fn cost_settlement_date(billing_date: NaiveDate) -> NaiveDate {
    add_days_saturating(billing_date, COST_SETTLEMENT_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_net_terms() {
        let d = date(2024, 1, 1);
        assert_eq!(resolve_settlement_date_raw(d, Some("net_30")), date(2024, 1, 31));
        assert_eq!(resolve_settlement_date_raw(d, Some("net_0")), d);
        assert_eq!(resolve_settlement_date(d, PaymentTerms::Net(60)), date(2024, 3, 1));
    }

    #[test]
    fn test_fallback_to_fourteen_days() {
        let d = date(2024, 2, 20);
        assert_eq!(resolve_settlement_date_raw(d, None), date(2024, 3, 5));
        assert_eq!(resolve_settlement_date_raw(d, Some("garbage")), date(2024, 3, 5));
        assert_eq!(resolve_settlement_date_raw(d, Some("net_abc")), date(2024, 3, 5));
    }

    #[test]
    fn test_never_fails_near_date_limit() {
        let d = NaiveDate::MAX;
        assert_eq!(resolve_settlement_date(d, PaymentTerms::Net(30)), NaiveDate::MAX);
        assert_eq!(cost_settlement_date(d), NaiveDate::MAX);
    }

    #[test]
    fn test_cost_settles_after_a_week() {
        assert_eq!(cost_settlement_date(date(2024, 12, 28)), date(2025, 1, 4));
    }
}
