use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Offset applied to the caller's seed for the package stream.
pub const PACKAGE_SEED_OFFSET: u64 = 1;

/// ChaCha8 stream for `seed`, or a fresh one seeded from the thread rng.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    }
}

/// Random v4 UUID drawn from `rng`, so seeded runs reproduce identifiers.
pub fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .to_string()
}

/// Uniform value in `[min, max]` rounded to two decimals.
pub fn uniform_2dp<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    let value = rng.random_range(min..=max);
    ((value * 100.0).round() / 100.0).clamp(min, max)
}
