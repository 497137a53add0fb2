//! A recording image tool for tests.

use std::sync::Mutex;

use anyhow::{Result, bail};
use async_trait::async_trait;

use super::{ImageTool, RecolorJob};

/// Records every job instead of invoking ImageMagick. Can be told to
/// fail on chosen output file names to exercise the skip path.
#[derive(Default)]
pub struct RecordingTool {
    jobs: Mutex<Vec<RecolorJob>>,
    fail_on: Vec<String>,
}

impl RecordingTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tool that fails any job whose output file name is in `names`.
    pub fn failing_on(names: &[&str]) -> Self {
        Self {
            jobs: Mutex::new(Vec::new()),
            fail_on: names.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Every job seen so far, in invocation order.
    pub fn jobs(&self) -> Vec<RecolorJob> {
        self.jobs.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageTool for RecordingTool {
    async fn recolor(&self, job: &RecolorJob) -> Result<()> {
        self.jobs.lock().unwrap().push(job.clone());

        let name = job
            .output
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("");
        if self.fail_on.iter().any(|f| f == name) {
            bail!("scripted failure for {}", name);
        }
        Ok(())
    }
}
