//! Render Bench
//!
//! Micro-benchmark harness timing template engines over an identical
//! synthetic dataset.
//!
//! ## Architecture
//! - Bench: wall-clock timing primitives and sampled measurement
//! - Dataset: synthetic user records shared by every engine
//! - Engines: one adapter per template library behind a common trait
//! - Report: elapsed times ranked ascending

pub mod bench;
pub mod config;
pub mod dataset;
pub mod engines;
pub mod error;
pub mod report;

pub use bench::{round_secs, time, try_time, SampleStats, Timed};
pub use config::Config;
pub use dataset::UserRecord;
pub use engines::RenderEngine;
pub use error::Error;
pub use report::{Report, ReportEntry};

use tracing::{debug, info};

/// Benchmark harness orchestrating dataset, engines, and timing.
///
/// Everything runs single-threaded and sequentially; the dataset is generated
/// once and read-only afterwards.
pub struct Harness {
    config: Config,
    engines: Vec<Box<dyn RenderEngine>>,
    users: Vec<UserRecord>,
}

impl Harness {
    /// Generate the dataset and build the enabled engines.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let generated = bench::time(|| dataset::generate(config.dataset.size, config.dataset.seed));
        debug!(
            "Dataset ready | records: {} | took: {:?}",
            generated.value.len(),
            generated.elapsed
        );

        let engines = engines::build(&config)?;
        info!(
            "Engines ready: {}",
            engines
                .iter()
                .map(|e| e.label())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self {
            config,
            engines,
            users: generated.value,
        })
    }

    /// Time one render per engine and rank the results.
    ///
    /// A failing render aborts the run with that engine's error.
    pub fn run(&self) -> anyhow::Result<Report> {
        let mut entries = Vec::with_capacity(self.engines.len());

        for engine in &self.engines {
            let timed = bench::try_time(|| engine.render(&self.users))?;
            let seconds = timed.elapsed_secs(self.config.bench.precision);
            info!(
                "{:<12} | {} bytes | {}s",
                engine.label(),
                timed.value.len(),
                seconds
            );
            entries.push(ReportEntry {
                engine: engine.label().to_string(),
                seconds,
            });
        }

        Ok(Report::ranked(entries))
    }

    /// Repeated-measurement variant: warmup plus N samples per engine.
    pub fn run_sampled(&self) -> anyhow::Result<Vec<SampleStats>> {
        let iterations = self.config.bench.iterations;
        let warmup = self.config.bench.warmup;
        let mut all = Vec::with_capacity(self.engines.len());

        for engine in &self.engines {
            // One checked render first so a broken template fails loudly
            // instead of being timed over and over.
            engine.render(&self.users)?;

            let stats = bench::run_sampled(engine.label(), iterations, warmup, || {
                engine.render(&self.users)
            });
            all.push(stats);
        }

        Ok(all)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }
}
