//! Synthetic user dataset
//! Generated once per process and read-only afterwards

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// One synthetic user record. Flat and immutable after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

/// Generate `size` user records.
///
/// A fixed `seed` makes the admin flags reproducible across runs; without one
/// the generator draws from OS entropy.
pub fn generate(size: usize, seed: Option<u64>) -> Vec<UserRecord> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (0..size)
        .map(|i| UserRecord {
            name: format!("User_{i}"),
            email: format!("user_{i}@gmail.com"),
            is_admin: rng.gen_bool(0.5),
        })
        .collect()
}
