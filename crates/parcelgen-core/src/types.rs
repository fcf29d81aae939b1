use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::rules::{HazmatClass, RuleCode, RuleParams};

/// A rule assigned to one driver, with its own identifier and parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleInstance {
    /// Identifier unique across the run (UUID v4 text).
    pub rule_id: String,
    /// Code and parameters, flattened into `code` / `params`.
    #[serde(flatten)]
    pub rule: RuleParams,
}

impl RuleInstance {
    pub fn code(&self) -> RuleCode {
        self.rule.code()
    }
}

/// A driver and the eligibility rules assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Driver {
    pub id: String,
    pub rules: Vec<RuleInstance>,
}

/// A synthetic package record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Package {
    pub package_id: String,
    /// Weight in kilograms, in [0.5, 20].
    pub weight_kg: f64,
    pub is_perishable: bool,
    /// One of the `REGION_ONLY` regions.
    pub region: String,
    /// Distance in kilometers, in [1, 100].
    pub distance_km: f64,
    pub is_express: bool,
    pub is_fragile: bool,
    /// One of the `HAZMAT_ALLOWED` classes, or `None` for no hazmat.
    pub hazmat_class: Option<HazmatClass>,
    /// Temperature in Celsius, in [-5, 25].
    pub temperature_c: f64,
    /// Hour of day, in [0, 23].
    pub delivery_hour: u8,
    /// Volume in cubic meters, in [0.1, 3.0].
    pub volume_m3: f64,
}
