//! Clustering Binary
//!
//! Streams weighted points into a fixed-capacity cluster set and prints the clusters.
//!
//! Options: --capacity, --policy, --reduce, --max-variance, --keyed

use clap::Parser;
use gvm::*;

fn main() -> anyhow::Result<()> {
    log();
    cli::Args::parse().run()
}
