use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// Options for the fixture engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Number of drivers to generate.
    pub driver_count: usize,
    /// Prefix for driver identifiers; ids are numbered from 1.
    pub driver_id_prefix: String,
    /// Minimum rules per driver (inclusive).
    pub min_rules: usize,
    /// Maximum rules per driver (inclusive).
    pub max_rules: usize,
    /// Packages generated per driver.
    pub packages_per_driver: usize,
    /// Seed for reproducible output. Packages use `seed + 1`.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            driver_count: 99,
            driver_id_prefix: "driver_".to_string(),
            min_rules: 0,
            max_rules: 2,
            packages_per_driver: 10,
            seed: None,
        }
    }
}

impl GenerateOptions {
    /// Parse options from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, GenerationError> {
        Ok(toml::from_str(content)?)
    }

    pub fn driver_ids(&self) -> Vec<String> {
        (1..=self.driver_count)
            .map(|i| format!("{}{i}", self.driver_id_prefix))
            .collect()
    }

    pub fn package_count(&self) -> Result<usize, GenerationError> {
        self.driver_count
            .checked_mul(self.packages_per_driver)
            .ok_or_else(|| {
                GenerationError::InvalidOptions(format!(
                    "package count overflows: {} drivers x {} packages",
                    self.driver_count, self.packages_per_driver
                ))
            })
    }
}

/// Report for a fixture generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub started_at: String,
    pub seed: Option<u64>,
    pub drivers: u64,
    pub rules: u64,
    pub packages: u64,
    pub rule_usage: BTreeMap<String, u64>,
    pub packages_without_hazmat: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, started_at: String, seed: Option<u64>) -> Self {
        Self {
            run_id,
            started_at,
            seed,
            drivers: 0,
            rules: 0,
            packages: 0,
            rule_usage: BTreeMap::new(),
            packages_without_hazmat: 0,
            duration_ms: 0,
        }
    }

    pub fn record_rule_usage(&mut self, code: &str) {
        self.rules += 1;
        *self.rule_usage.entry(code.to_string()).or_insert(0) += 1;
    }
}
