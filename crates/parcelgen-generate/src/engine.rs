use std::time::Instant;

use rand::Rng;
use tracing::{info, warn};

use parcelgen_core::{Driver, Package, RuleTemplate};

use crate::drivers::generate_driver_rules_with_rng;
use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport};
use crate::packages::generate_packages_with_rng;
use crate::rng::{PACKAGE_SEED_OFFSET, seeded_rng};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    pub drivers: Vec<Driver>,
    pub packages: Vec<Package>,
    pub report: GenerationReport,
}

/// Entry point for generating drivers and packages from a rule catalog.
#[derive(Debug, Clone, Default)]
pub struct FixtureEngine {
    options: GenerateOptions,
}

impl FixtureEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn run(&self, rule_templates: &[RuleTemplate]) -> Result<FixtureSet, GenerationError> {
        let start = Instant::now();
        let seed = self.options.seed;
        let mut driver_rng = seeded_rng(seed);
        let mut package_rng =
            seeded_rng(seed.map(|seed| seed.wrapping_add(PACKAGE_SEED_OFFSET)));
        let run_id = uuid::Uuid::new_v4().to_string();
        let started_at = chrono::Utc::now().to_rfc3339();
        let mut report = GenerationReport::new(run_id.clone(), started_at, seed);

        info!(
            run_id = %run_id,
            drivers = self.options.driver_count,
            min_rules = self.options.min_rules,
            max_rules = self.options.max_rules,
            seed = ?seed,
            "generation started"
        );

        let result = self.generate(rule_templates, &mut driver_rng, &mut package_rng);
        let (drivers, packages) = match result {
            Ok(fixtures) => fixtures,
            Err(err) => {
                warn!(run_id = %run_id, error = %err, "generation failed");
                return Err(err);
            }
        };

        report.drivers = drivers.len() as u64;
        for rule in drivers.iter().flat_map(|driver| &driver.rules) {
            report.record_rule_usage(rule.code().as_str());
        }
        report.packages = packages.len() as u64;
        report.packages_without_hazmat =
            packages.iter().filter(|p| p.hazmat_class.is_none()).count() as u64;
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            run_id = %run_id,
            drivers = report.drivers,
            rules = report.rules,
            packages = report.packages,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(FixtureSet {
            drivers,
            packages,
            report,
        })
    }

    fn generate<R: Rng + ?Sized>(
        &self,
        rule_templates: &[RuleTemplate],
        driver_rng: &mut R,
        package_rng: &mut R,
    ) -> Result<(Vec<Driver>, Vec<Package>), GenerationError> {
        let driver_ids = self.options.driver_ids();
        let drivers = generate_driver_rules_with_rng(
            &driver_ids,
            rule_templates,
            self.options.min_rules,
            self.options.max_rules,
            driver_rng,
        )?;

        let package_count = self.options.package_count()?;
        let packages = generate_packages_with_rng(package_count, rule_templates, package_rng)?;

        Ok((drivers, packages))
    }
}
