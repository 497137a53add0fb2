//! ImageMagick invocation.

use std::ffi::OsString;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use tokio::process::Command;

use super::{ImageTool, RecolorJob};

/// Recolors tiles by shelling out to ImageMagick's `convert`.
pub struct Magick {
    bin: String,
}

impl Magick {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }

    /// Argument list for a fuzz-matched color replace. Every value is a
    /// separate argument; nothing passes through a shell.
    fn args(job: &RecolorJob) -> Vec<OsString> {
        vec![
            job.source.as_os_str().to_os_string(),
            OsString::from("-fuzz"),
            OsString::from(format!("{}%", job.fuzz_percent)),
            OsString::from("-fill"),
            OsString::from(&job.fill),
            OsString::from("-opaque"),
            OsString::from(&job.opaque),
            job.output.as_os_str().to_os_string(),
        ]
    }
}

#[async_trait]
impl ImageTool for Magick {
    async fn recolor(&self, job: &RecolorJob) -> Result<()> {
        if let Some(parent) = job.output.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let output = Command::new(&self.bin)
            .args(Self::args(job))
            .output()
            .await
            .with_context(|| format!("failed to run {}", self.bin))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "{} exited with {}: {}",
                self.bin,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            );
        }

        Ok(())
    }
}
