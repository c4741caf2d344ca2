//! Synthetic customer data.
//!
//! The generator never reaches for a global random source. Callers hand in
//! whatever [`rand::Rng`] they want, which keeps batches reproducible:
//!
//! ```
//! use customer_desk::generator::generate_batch;
//! use rand::SeedableRng as _;
//! use rand::rngs::StdRng;
//!
//! let a = generate_batch(&mut StdRng::seed_from_u64(7), 15);
//! let b = generate_batch(&mut StdRng::seed_from_u64(7), 15);
//! assert_eq!(a, b);
//! ```

use crate::records::{CustomerRecord, round_rating};
use rand::Rng;
use std::ops::RangeInclusive;

pub const CUSTOMER_ID_RANGE: RangeInclusive<u32> = 1000..=9999;
pub const AGE_RANGE: RangeInclusive<u8> = 18..=70;
pub const MOBILE_RANGE: RangeInclusive<u64> = 7_000_000_000..=9_999_999_999;
pub const RATING_RANGE: RangeInclusive<f64> = 1.0..=5.0;
pub const NAME_LEN_RANGE: RangeInclusive<usize> = 3..=10;

/// Length of the shared letter pool names are cut from.
pub const NAME_POOL_LEN: usize = 50;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Builds `count` customer records.
///
/// Names are not independent: one random pool of [`NAME_POOL_LEN`] letters is
/// drawn per batch and every record takes a prefix of 3 to 10 letters from it,
/// so all names in a batch share their leading characters. Callers that want
/// independent names should not rely on this function.
///
/// A `count` of zero yields an empty batch.
pub fn generate_batch<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<CustomerRecord> {
    let pool = name_pool(rng, NAME_POOL_LEN);
    let records: Vec<CustomerRecord> = (0..count)
        .map(|_| generate_record(rng, &pool))
        .collect();
    tracing::debug!(count = records.len(), "Generated customer batch");
    records
}

fn generate_record<R: Rng + ?Sized>(rng: &mut R, pool: &str) -> CustomerRecord {
    let name_len = rng.gen_range(NAME_LEN_RANGE).min(pool.len());
    CustomerRecord {
        customer_id: rng.gen_range(CUSTOMER_ID_RANGE),
        name: pool.get(..name_len).unwrap_or(pool).to_owned(),
        age: rng.gen_range(AGE_RANGE),
        mobile_number: rng.gen_range(MOBILE_RANGE),
        rating: round_rating(rng.gen_range(RATING_RANGE)),
    }
}

/// Random ASCII letters, upper and lower case.
pub fn name_pool<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..LETTERS.len());
            LETTERS.get(idx).map_or('a', |&b| char::from(b))
        })
        .collect()
}
