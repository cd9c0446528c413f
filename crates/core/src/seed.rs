//! Battle seeds: either chosen by the user or generated at startup.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn from_option(seed: Option<u64>) -> Self {
        seed.map_or_else(|| Self::Generated(generate_runtime_seed()), Self::Cli)
    }

    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

/// Derive an independent stream seed, e.g. for the enemy's own dice.
pub fn derive_seed(seed: u64, stream: u64) -> u64 {
    mix_seed(seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
