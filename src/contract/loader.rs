//! Load contract records exported from the contracts table

use super::{BillingFrequency, BillingProfile, PaymentTerms, RateCard};
use crate::error::{ProjectionError, Result};
use chrono::{DateTime, NaiveDate};
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Contract record as persisted, before defaults are applied
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    pub start_date: String,
    #[serde(default)]
    pub billing_frequency: Option<String>,
    #[serde(default)]
    pub payment_terms: Option<String>,
    #[serde(default)]
    pub weekly_revenue: Option<f64>,
    #[serde(default)]
    pub weekly_cost: Option<f64>,
    #[serde(default)]
    pub monthly_revenue: Option<f64>,
    #[serde(default)]
    pub monthly_cost: Option<f64>,
    #[serde(default)]
    pub annual_revenue: Option<f64>,
    #[serde(default)]
    pub annual_cost: Option<f64>,
}

impl ContractRecord {
    /// Label used in entry descriptions: `name (code)` or just `name`
    pub fn label(&self) -> String {
        match self.code.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => format!("{} ({})", self.name.trim(), code),
            _ => self.name.trim().to_string(),
        }
    }

    /// Apply defaults and produce the profile the engine reads
    pub fn to_profile(&self) -> Result<BillingProfile> {
        let start_date = parse_start_date(&self.start_date)?;

        let rates = RateCard {
            weekly_revenue: self.weekly_revenue.unwrap_or(0.0),
            weekly_cost: self.weekly_cost.unwrap_or(0.0),
            monthly_revenue: self.monthly_revenue.unwrap_or(0.0),
            monthly_cost: self.monthly_cost.unwrap_or(0.0),
            annual_revenue: self.annual_revenue.unwrap_or(0.0),
            annual_cost: self.annual_cost.unwrap_or(0.0),
        };

        Ok(BillingProfile {
            start_date,
            billing_frequency: BillingFrequency::resolve(self.billing_frequency.as_deref()),
            payment_terms: PaymentTerms::resolve(self.payment_terms.as_deref()),
            rates,
            label: self.label(),
        })
    }
}

/// Parse a stored start date: `YYYY-MM-DD` or an RFC 3339 timestamp
pub fn parse_start_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|ts| ts.date_naive())
        .map_err(|_| ProjectionError::InvalidStartDate(raw.to_string()))
}

/// Load contract records from a CSV reader
pub fn load_contracts_from_reader<R: Read>(reader: R) -> Result<Vec<ContractRecord>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize() {
        let record: ContractRecord = result?;
        records.push(record);
    }

    Ok(records)
}

/// Load contract records from a JSON array
pub fn load_contracts_from_json<R: Read>(reader: R) -> Result<Vec<ContractRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load contract records from a `.json` or CSV file
pub fn load_contracts<P: AsRef<Path>>(path: P) -> Result<Vec<ContractRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        load_contracts_from_json(file)
    } else {
        load_contracts_from_reader(file)
    }
}

/// Convert records into profiles, reporting the first invalid row
pub fn to_profiles(records: &[ContractRecord]) -> Result<Vec<BillingProfile>> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            record.to_profile().map_err(|e| ProjectionError::InvalidRecord {
                row: idx + 1,
                message: e.to_string(),
            })
        })
        .collect()
}
