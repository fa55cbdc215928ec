use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Largest seed ever generated (exclusive), the maximum of a signed 64-bit integer
pub const MAX_SEED: u64 = i64::MAX as u64;

/// Return `seed` if one was specified, otherwise generate a new one.
///
/// A newly generated seed is announced on stdout as `Created new seed {s}`.
/// Use [`get_seed_with`] to be notified some other way. A supplied seed is
/// returned unchecked, even above `MAX_SEED`.
pub fn get_seed(seed: Option<u64>) -> u64 {
    get_seed_with(seed, |s| println!("Created new seed {}", s))
}

/// Return `seed` if one was specified, otherwise draw one uniformly from `[0, MAX_SEED)`
/// using a freshly seeded generator and pass it to `notify` before returning it.
///
/// `notify` is never called for a caller-supplied seed. Supplied seeds are
/// returned as given, without checking them against `MAX_SEED`.
pub fn get_seed_with<F>(seed: Option<u64>, notify: F) -> u64
where
    F: FnOnce(u64),
{
    if let Some(seed) = seed {
        return seed;
    }

    let mut rng = StdRng::from_entropy();
    let new_seed = rng.gen_range(0..MAX_SEED);
    info!("Generated new seed {}", new_seed);
    notify(new_seed);
    new_seed
}
