use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RNG_SEED: u64 = 0x5EED_2026;

/// Criterion settings for one band of input lengths.
#[derive(Clone, Copy, Debug)]
pub struct RuntimeProfile {
    /// Largest input length this profile covers.
    pub max_len: usize,
    pub sample_size: usize,
    pub warm_up_ms: u64,
    pub measure_ms: u64,
    pub flat_sampling: bool,
}

/// Ordered by `max_len`. Up to 64Ki elements a sort takes well under a millisecond;
/// the 1Mi and 4Mi inputs take tens of milliseconds per iteration, so they get flat
/// sampling and fewer samples.
pub const RUNTIME_PROFILES: [RuntimeProfile; 3] = [
    RuntimeProfile {
        max_len: 1 << 16,
        sample_size: 20,
        warm_up_ms: 100,
        measure_ms: 300,
        flat_sampling: false,
    },
    RuntimeProfile {
        max_len: 1 << 20,
        sample_size: 10,
        warm_up_ms: 500,
        measure_ms: 2000,
        flat_sampling: true,
    },
    RuntimeProfile {
        max_len: usize::MAX,
        sample_size: 10,
        warm_up_ms: 1000,
        measure_ms: 5000,
        flat_sampling: true,
    },
];

pub fn runtime_profile_for_len(len: usize) -> RuntimeProfile {
    RUNTIME_PROFILES
        .iter()
        .copied()
        .find(|profile| len <= profile.max_len)
        .unwrap_or(RUNTIME_PROFILES[RUNTIME_PROFILES.len() - 1])
}

pub fn apply_runtime_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    let profile = runtime_profile_for_len(len);
    group.sampling_mode(if profile.flat_sampling {
        SamplingMode::Flat
    } else {
        SamplingMode::Auto
    });
    group.sample_size(profile.sample_size);
    group.warm_up_time(Duration::from_millis(profile.warm_up_ms));
    group.measurement_time(Duration::from_millis(profile.measure_ms));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
    Descending,
    FewUnique,
    AllEqual,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 5] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
    Distribution::Descending,
    Distribution::FewUnique,
    Distribution::AllEqual,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::Descending => "descending",
            Self::FewUnique => "few_unique",
            Self::AllEqual => "all_equal",
        }
    }
}

pub fn generate_dataset<R: Rng>(rng: &mut R, dist: Distribution, len: usize) -> Vec<i32> {
    match dist {
        Distribution::RandomUniform => (0..len).map(|_| rng.random::<i32>()).collect(),
        Distribution::NearlySorted1pctSwaps => {
            let mut data: Vec<i32> = (0..len).map(|i| i as i32).collect();
            if len > 0 {
                let swaps = (len / 100).max(1);
                for _ in 0..swaps {
                    let a = rng.random_range(0..len);
                    let b = rng.random_range(0..len);
                    data.swap(a, b);
                }
            }
            data
        }
        Distribution::Descending => (0..len).rev().map(|i| i as i32).collect(),
        Distribution::FewUnique => (0..len).map(|_| rng.random_range(0..8)).collect(),
        Distribution::AllEqual => vec![42; len],
    }
}
