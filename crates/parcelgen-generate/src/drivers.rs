use rand::Rng;
use rand::seq::index;
use tracing::debug;

use parcelgen_core::{Driver, Error as CoreError, RuleInstance, RuleParams, RuleTemplate};

use crate::errors::GenerationError;
use crate::rng::{random_uuid, seeded_rng};

/// Regions kept on each `REGION_ONLY` instance.
pub const REGION_SAMPLE_SIZE: usize = 2;
/// Bounds on classes kept on each `HAZMAT_ALLOWED` instance.
pub const HAZMAT_SAMPLE_MIN: usize = 1;
pub const HAZMAT_SAMPLE_MAX: usize = 2;

/// Assign random rules to each driver, in input order.
///
/// With `Some(seed)` the output, rule ids included, is fully reproducible.
pub fn generate_driver_rules<S: AsRef<str>>(
    driver_ids: &[S],
    rule_templates: &[RuleTemplate],
    min_rules: usize,
    max_rules: usize,
    seed: Option<u64>,
) -> Result<Vec<Driver>, GenerationError> {
    let mut rng = seeded_rng(seed);
    generate_driver_rules_with_rng(driver_ids, rule_templates, min_rules, max_rules, &mut rng)
}

/// Same as [`generate_driver_rules`], drawing from a caller-owned source.
pub fn generate_driver_rules_with_rng<S: AsRef<str>, R: Rng + ?Sized>(
    driver_ids: &[S],
    rule_templates: &[RuleTemplate],
    min_rules: usize,
    max_rules: usize,
    rng: &mut R,
) -> Result<Vec<Driver>, GenerationError> {
    if min_rules > max_rules || max_rules > rule_templates.len() {
        return Err(GenerationError::InvalidRange {
            min_rules,
            max_rules,
            catalog_size: rule_templates.len(),
        });
    }

    let mut drivers = Vec::with_capacity(driver_ids.len());
    for driver_id in driver_ids {
        let k = rng.random_range(min_rules..=max_rules);
        let mut rules = Vec::with_capacity(k);
        for idx in index::sample(rng, rule_templates.len(), k) {
            rules.push(instantiate(&rule_templates[idx], rng)?);
        }
        debug!(driver_id = driver_id.as_ref(), rules = rules.len(), "driver generated");
        drivers.push(Driver {
            id: driver_id.as_ref().to_string(),
            rules,
        });
    }

    Ok(drivers)
}

/// Instantiate a template with a fresh id, narrowing list-valued params.
fn instantiate<R: Rng + ?Sized>(
    template: &RuleTemplate,
    rng: &mut R,
) -> Result<RuleInstance, GenerationError> {
    let rule = match &template.params {
        RuleParams::RegionOnly { allowed_regions } => RuleParams::RegionOnly {
            allowed_regions: sample_distinct(allowed_regions, REGION_SAMPLE_SIZE, rng)?,
        },
        RuleParams::HazmatAllowed { allowed_classes } => {
            let count = rng.random_range(HAZMAT_SAMPLE_MIN..=HAZMAT_SAMPLE_MAX);
            RuleParams::HazmatAllowed {
                allowed_classes: sample_distinct(allowed_classes, count, rng)?,
            }
        }
        other => other.clone(),
    };

    Ok(RuleInstance {
        rule_id: random_uuid(rng),
        rule,
    })
}

fn sample_distinct<T: Clone, R: Rng + ?Sized>(
    values: &[T],
    amount: usize,
    rng: &mut R,
) -> Result<Vec<T>, GenerationError> {
    if amount > values.len() {
        return Err(CoreError::Sampling {
            requested: amount,
            available: values.len(),
        }
        .into());
    }
    Ok(index::sample(rng, values.len(), amount)
        .into_iter()
        .map(|idx| values[idx].clone())
        .collect())
}
