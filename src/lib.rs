//! Online greedy variance-minimizing clustering.
//!
//! A [`ClusterSet`](clustering::ClusterSet) keeps at most `capacity` clusters over
//! a stream of weighted points. Each cluster carries only sufficient statistics
//! (mass, first and second weighted moments), so the cost of absorbing a point or
//! merging two clusters is always O(1) in the number of points seen.
//!
//! ## Core Types
//!
//! - [`Space`](space::Space): how points combine and how variance is measured
//! - [`Cluster`](clustering::Cluster): statistics for one slot
//! - [`Pair`](clustering::Pair): cached merge cost between two slots
//! - [`ClusterSet`](clustering::ClusterSet): the engine
pub mod clustering;
pub mod space;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Weight of a point, or total weight absorbed by a cluster.
pub type Mass = f64;
/// Mass-weighted sum of squared deviations, and merge costs derived from it.
pub type Variance = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// CLUSTERING PARAMETERS
// ============================================================================
/// Number of cluster slots when none is configured.
pub const DEFAULT_CAPACITY: usize = 32;
/// Insertion policy when none is configured.
pub const DEFAULT_POLICY: clustering::Policy = clustering::Policy::Grow;
/// Environment variable overriding the terminal log level.
pub const LOG_LEVEL_VAR: &str = "GVM_LOG";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO (or $GVM_LOG) to stderr.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let level = std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
