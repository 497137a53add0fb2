//! Batch recoloring of profile tiles.
//!
//! A batch is planned up front (one job per source × fill pair, with
//! uniquely numbered outputs) and then run sequentially through an
//! [`ImageTool`]. A failed job is reported and skipped; the rest of the
//! batch keeps going.

pub mod magick;
pub mod mock;

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

/// One fuzz-matched color replace: source tile in, numbered tile out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecolorJob {
    pub source: PathBuf,
    pub output: PathBuf,
    pub fill: String,
    pub fuzz_percent: u8,
    pub opaque: String,
}

/// Settings shared by every job in a batch.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub out_dir: PathBuf,
    pub prefix: String,
    pub start: usize,
    pub fuzz_percent: u8,
    pub opaque: String,
}

/// Counts from a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub completed: usize,
    pub failed: usize,
}

/// Performs a single recolor operation. Implemented by the ImageMagick
/// wrapper and by [`mock::RecordingTool`] in tests.
#[async_trait]
pub trait ImageTool: Send + Sync {
    async fn recolor(&self, job: &RecolorJob) -> Result<()>;
}

/// Plan one job per (source, fill) pair. Outputs are named
/// `<prefix><n>.png` with `n` increasing from `config.start`, unique
/// within the batch.
pub fn plan(sources: &[PathBuf], fills: &[String], config: &BatchConfig) -> Vec<RecolorJob> {
    let mut jobs = Vec::with_capacity(sources.len() * fills.len());
    let mut index = config.start;
    for source in sources {
        for fill in fills {
            jobs.push(RecolorJob {
                source: source.clone(),
                output: config.out_dir.join(format!("{}{}.png", config.prefix, index)),
                fill: fill.clone(),
                fuzz_percent: config.fuzz_percent,
                opaque: config.opaque.clone(),
            });
            index += 1;
        }
    }
    jobs
}

/// Run jobs in order. Failures go to stderr and are counted; the batch
/// never aborts on one.
pub async fn run(tool: &dyn ImageTool, jobs: &[RecolorJob]) -> BatchReport {
    let mut report = BatchReport::default();
    for job in jobs {
        match tool.recolor(job).await {
            Ok(()) => {
                println!("  {} -> {}", job.source.display(), job.output.display());
                report.completed += 1;
            }
            Err(e) => {
                eprintln!("  {}: {}", job.output.display(), e);
                report.failed += 1;
            }
        }
    }
    report
}
