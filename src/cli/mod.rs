mod record;
pub use record::*;

use crate::Variance;
use crate::clustering::ClusterSet;
use crate::clustering::Config;
use crate::clustering::Policy;
use crate::space::Vector;
use anyhow::Context;
use clap::Parser;
use std::io::BufRead;
use std::io::Write;

/// Cluster a stream of weighted points read from a file or stdin
/// and print the resulting clusters as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input file of `[key] mass x1 .. xd` lines; stdin when omitted
    #[arg(short, long)]
    pub input: Option<std::path::PathBuf>,
    /// Maximum number of clusters kept while streaming
    #[arg(short, long, default_value_t = crate::DEFAULT_CAPACITY)]
    pub capacity: usize,
    /// What to do with a point once every slot is taken: grow | merge
    #[arg(short, long, default_value_t = crate::DEFAULT_POLICY)]
    pub policy: Policy,
    /// Point dimension; inferred from the first record when omitted
    #[arg(short, long)]
    pub dims: Option<usize>,
    /// Treat the first column of every line as the point's key
    #[arg(short, long)]
    pub keyed: bool,
    /// After streaming, merge down to at most this many clusters
    #[arg(short, long)]
    pub reduce: Option<usize>,
    /// Stop reducing before total variance reaches this value
    #[arg(short = 'v', long)]
    pub max_variance: Option<Variance>,
}

impl Args {
    pub fn run(self) -> anyhow::Result<()> {
        let reader: Box<dyn BufRead> = match self.input {
            Some(ref path) => Box::new(std::io::BufReader::new(
                std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?,
            )),
            None => Box::new(std::io::BufReader::new(std::io::stdin())),
        };
        let config = Config::new(self.capacity).policy(self.policy);
        let mut clusters = None::<ClusterSet<Vector, String>>;
        let mut points = 0usize;
        for (n, line) in reader.lines().enumerate() {
            let line = line.context("read input")?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let record = Record::parse(line, self.keyed)
                .with_context(|| format!("line {}", n + 1))?;
            if clusters.is_none() {
                let dims = self.dims.unwrap_or(record.point.len());
                log::info!(
                    "{:<32}{:<8}{:<8}{}",
                    "clustering",
                    self.capacity,
                    dims,
                    self.policy
                );
                clusters = Some(ClusterSet::with_config(Vector::new(dims), config)?);
            }
            let set = clusters.as_mut().expect("initialized above");
            set.add_point(record.mass, &record.point, record.key)
                .with_context(|| format!("line {}", n + 1))?;
            points += 1;
        }
        let Some(mut set) = clusters else {
            log::warn!("no points read");
            return Ok(());
        };
        log::info!("{:<32}{:<8}{:<8}", "ingested points", points, set.len());
        let results = match (self.reduce, self.max_variance) {
            (None, None) => set.results(),
            (floor, ceiling) => set.reduce(ceiling, floor.unwrap_or(0)),
        };
        log::info!(
            "{:<32}{:<8}{:.6}",
            "final clusters",
            results.len(),
            set.total_variance()
        );
        let ref mut out = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut *out, &results)?;
        writeln!(out)?;
        Ok(())
    }
}
