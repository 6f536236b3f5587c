//! Sortnet Tools
//!
//! Shared helpers for the `sortnet` command-line tool.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use sortnet::{ComparisonNetwork, ProgressObserver};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging with a default filter.
///
/// Use `RUST_LOG` environment variable to override the default filter.
/// Logs are written to stderr so that results on stdout can be piped.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,sortnet=info,sortnet_tools=info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Read a network from `path`, or from stdin when `path` is `None`.
pub fn read_network(path: Option<&Path>) -> Result<ComparisonNetwork> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read network from stdin")?;
            text
        }
    };

    parse_network(&text)
}

/// Parse network text, attaching context to parse failures.
pub fn parse_network(text: &str) -> Result<ComparisonNetwork> {
    let network = ComparisonNetwork::parse(text).context("failed to parse network")?;
    debug!(comparators = network.len(), "network loaded");
    Ok(network)
}

/// Parse a comma-separated list of integers such as `3,1,2`.
pub fn parse_values(text: &str) -> Result<Vec<i64>> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("invalid value '{token}'"))
        })
        .collect()
}

/// Format values back into the comma-separated form.
pub fn format_values(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Logs verification progress every `step` percent.
pub struct ProgressLogger {
    step: u32,
    next: u32,
}

impl ProgressLogger {
    pub fn new(step: u32) -> Self {
        let step = step.max(1);
        Self { step, next: 0 }
    }
}

impl Default for ProgressLogger {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ProgressObserver for ProgressLogger {
    fn on_progress(&mut self, completed: f64) {
        let percent = (completed * 100.0).floor() as u32;
        if percent >= self.next {
            info!("verification {percent}% complete");
            self.next = (percent / self.step + 1) * self.step;
        }
    }
}
