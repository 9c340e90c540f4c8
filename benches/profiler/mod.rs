// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr + Ord>(name: &str, default: T, min: T, max: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
        .clamp(min, max)
}

/// Criterion with a flamegraph profiler. Sampling and timing are tunable through
/// `DIRGRAPH_BENCH_*` variables.
pub fn criterion() -> Criterion {
    let frequency: i32 = env_or("DIRGRAPH_BENCH_PROFILE_FREQ", 100, 1, 1000);
    let sample_size: usize = env_or("DIRGRAPH_BENCH_SAMPLE_SIZE", 50, 10, 200);
    let warmup_secs: u64 = env_or("DIRGRAPH_BENCH_WARMUP_SECS", 2, 1, 60);
    let measurement_secs: u64 = env_or("DIRGRAPH_BENCH_MEASUREMENT_SECS", 4, 1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
