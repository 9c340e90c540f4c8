// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dirgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dirgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagnostics for the binary. The library only emits `tracing` events.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const LOG_ENV: &str = "DIRGRAPH_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Filter from `DIRGRAPH_LOG` when it parses, `warn` otherwise.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs a stderr subscriber. Calling it again once a subscriber is set is a no-op.
pub fn init_logging() {
    let _ = Registry::default()
        .with(env_filter())
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init();
}
