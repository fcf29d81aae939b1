use rand::Rng;
use rand::seq::IndexedRandom;

use parcelgen_core::{CatalogDomains, Error as CoreError, Package, RuleTemplate, validate_catalog};

use crate::errors::GenerationError;
use crate::rng::{PACKAGE_SEED_OFFSET, random_uuid, seeded_rng, uniform_2dp};

/// Inclusive bounds on package weight, in kilograms.
pub const WEIGHT_KG: (f64, f64) = (0.5, 20.0);
/// Inclusive bounds on delivery distance, in kilometers.
pub const DISTANCE_KM: (f64, f64) = (1.0, 100.0);
/// Inclusive bounds on package temperature, in Celsius.
pub const TEMPERATURE_C: (f64, f64) = (-5.0, 25.0);
/// Inclusive bounds on package volume, in cubic meters.
pub const VOLUME_M3: (f64, f64) = (0.1, 3.0);
/// Inclusive bounds on the delivery hour of day.
pub const DELIVERY_HOURS: (u8, u8) = (0, 23);

/// Generate `count` packages whose region and hazmat class come from the
/// catalog's `REGION_ONLY` and `HAZMAT_ALLOWED` templates.
///
/// With `Some(seed)` the stream is seeded with `seed + 1`.
pub fn generate_packages(
    count: usize,
    rule_templates: &[RuleTemplate],
    seed: Option<u64>,
) -> Result<Vec<Package>, GenerationError> {
    let mut rng = seeded_rng(seed.map(|seed| seed.wrapping_add(PACKAGE_SEED_OFFSET)));
    generate_packages_with_rng(count, rule_templates, &mut rng)
}

/// Same as [`generate_packages`], drawing from a caller-owned source.
pub fn generate_packages_with_rng<R: Rng + ?Sized>(
    count: usize,
    rule_templates: &[RuleTemplate],
    rng: &mut R,
) -> Result<Vec<Package>, GenerationError> {
    let domains = validate_catalog(rule_templates)?;
    (0..count).map(|_| random_package(&domains, rng)).collect()
}

fn random_package<R: Rng + ?Sized>(
    domains: &CatalogDomains,
    rng: &mut R,
) -> Result<Package, GenerationError> {
    let package_id = random_uuid(rng);
    let weight_kg = uniform_2dp(rng, WEIGHT_KG.0, WEIGHT_KG.1);
    let is_perishable = rng.random_bool(0.5);
    let region = domains
        .regions
        .choose(rng)
        .cloned()
        .ok_or(CoreError::Sampling {
            requested: 1,
            available: 0,
        })?;
    let distance_km = uniform_2dp(rng, DISTANCE_KM.0, DISTANCE_KM.1);
    let is_express = rng.random_bool(0.5);
    let is_fragile = rng.random_bool(0.5);
    let hazmat_class = pick_hazmat_class(&domains.hazmat_classes, rng);
    let temperature_c = uniform_2dp(rng, TEMPERATURE_C.0, TEMPERATURE_C.1);
    let delivery_hour = rng.random_range(DELIVERY_HOURS.0..=DELIVERY_HOURS.1);
    let volume_m3 = uniform_2dp(rng, VOLUME_M3.0, VOLUME_M3.1);

    Ok(Package {
        package_id,
        weight_kg,
        is_perishable,
        region,
        distance_km,
        is_express,
        is_fragile,
        hazmat_class,
        temperature_c,
        delivery_hour,
        volume_m3,
    })
}

/// Uniform over the declared classes plus one "no hazmat" slot, so `None`
/// has probability `1 / (n + 1)`.
fn pick_hazmat_class<T: Copy, R: Rng + ?Sized>(classes: &[T], rng: &mut R) -> Option<T> {
    let slot = rng.random_range(0..=classes.len());
    classes.get(slot).copied()
}
