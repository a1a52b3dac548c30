//! Billing profile structures read from persisted contracts

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

/// Payment offset applied when terms are missing or unreadable
pub const DEFAULT_PAYMENT_TERM_DAYS: u32 = 14;

/// How often a contract is invoiced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingFrequency {
    Weekly,
    Fortnightly,
    Monthly,
    Quarterly,
    Annually,
}

impl Default for BillingFrequency {
    fn default() -> Self {
        BillingFrequency::Monthly
    }
}

impl BillingFrequency {
    /// Parse a stored frequency name, returning None for unknown names
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "weekly" => Some(BillingFrequency::Weekly),
            "fortnightly" | "biweekly" => Some(BillingFrequency::Fortnightly),
            "monthly" => Some(BillingFrequency::Monthly),
            "quarterly" => Some(BillingFrequency::Quarterly),
            "annually" | "annual" | "yearly" => Some(BillingFrequency::Annually),
            _ => None,
        }
    }

    /// Resolve an optional stored name, falling back to monthly
    pub fn resolve(name: Option<&str>) -> Self {
        match name {
            Some(raw) => Self::parse(raw).unwrap_or_else(|| {
                debug!("unrecognised billing frequency {:?}, using monthly", raw);
                BillingFrequency::default()
            }),
            None => BillingFrequency::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingFrequency::Weekly => "weekly",
            BillingFrequency::Fortnightly => "fortnightly",
            BillingFrequency::Monthly => "monthly",
            BillingFrequency::Quarterly => "quarterly",
            BillingFrequency::Annually => "annually",
        }
    }
}

/// Payment terms agreed with the client
///
/// `Standard` is the resolved form of missing or malformed terms, kept
/// distinct from an explicit `Net(14)` so the fallback can be inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentTerms {
    /// Explicit `net_<N>` terms
    Net(u32),
    /// Terms absent or unreadable
    Standard,
}

impl Default for PaymentTerms {
    fn default() -> Self {
        PaymentTerms::Standard
    }
}

impl PaymentTerms {
    /// Parse a `net_<digits>` descriptor
    pub fn parse(descriptor: &str) -> Option<Self> {
        let lowered = descriptor.trim().to_ascii_lowercase();
        let digits = lowered.strip_prefix("net_")?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().map(PaymentTerms::Net)
    }

    /// Resolve optional stored terms, falling back to the standard offset
    pub fn resolve(descriptor: Option<&str>) -> Self {
        match descriptor {
            Some(raw) => Self::parse(raw).unwrap_or_else(|| {
                debug!("unreadable payment terms {:?}, using net_{}", raw, DEFAULT_PAYMENT_TERM_DAYS);
                PaymentTerms::Standard
            }),
            None => PaymentTerms::Standard,
        }
    }

    /// Days between invoice and expected payment
    pub fn days(&self) -> u32 {
        match self {
            PaymentTerms::Net(days) => *days,
            PaymentTerms::Standard => DEFAULT_PAYMENT_TERM_DAYS,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, PaymentTerms::Standard)
    }
}

/// Per-period rate fields stored on a contract
///
/// Only the pair matching the billing frequency is used; see
/// [`crate::schedule::resolve_cycle_values`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    pub weekly_revenue: f64,
    pub weekly_cost: f64,
    pub monthly_revenue: f64,
    pub monthly_cost: f64,
    pub annual_revenue: f64,
    pub annual_cost: f64,
}

/// Everything the projection engine reads from a contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingProfile {
    /// Anchor date of the first billing cycle
    pub start_date: NaiveDate,

    pub billing_frequency: BillingFrequency,

    pub payment_terms: PaymentTerms,

    pub rates: RateCard,

    /// Contract name and code, used in entry descriptions
    pub label: String,
}

impl BillingProfile {
    /// Create a monthly profile on standard terms with zero rates
    pub fn new(label: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            start_date,
            billing_frequency: BillingFrequency::default(),
            payment_terms: PaymentTerms::default(),
            rates: RateCard::default(),
            label: label.into(),
        }
    }

    pub fn with_frequency(mut self, frequency: BillingFrequency) -> Self {
        self.billing_frequency = frequency;
        self
    }

    pub fn with_payment_terms(mut self, terms: PaymentTerms) -> Self {
        self.payment_terms = terms;
        self
    }

    pub fn with_rates(mut self, rates: RateCard) -> Self {
        self.rates = rates;
        self
    }
}
