// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tracing subscriber setup for the CLI

use tracing::Level;

/// Install a stderr fmt subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
