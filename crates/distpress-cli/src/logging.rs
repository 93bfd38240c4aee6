// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Tracing initialization
//!
//! Logs go to stderr so the report and `--json` output own stdout.
//! `RUST_LOG` wins over the configured level when set.

use anyhow::Result;
use std::io;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Initialize the global tracing subscriber
///
/// `format` is one of `pretty`, `compact` or `json`, as validated by the
/// configuration layer.
pub fn init_tracing(level: &str, format: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    let registry = Registry::default().with(filter);

    match format {
        "json" => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init()?,
        "compact" => registry
            .with(fmt::layer().compact().with_writer(io::stderr))
            .try_init()?,
        _ => registry
            .with(fmt::layer().with_writer(io::stderr))
            .try_init()?,
    }

    Ok(())
}
