use std::path::PathBuf;

use kikitool::consts::{GREY_FILL, default_tile_set};
use kikitool::variants::magick::Magick;
use kikitool::variants::mock::RecordingTool;
use kikitool::variants::{self, BatchConfig, BatchReport, ImageTool, RecolorJob};

fn config(out_dir: &str, start: usize) -> BatchConfig {
    BatchConfig {
        out_dir: PathBuf::from(out_dir),
        prefix: "kiki_".to_string(),
        start,
        fuzz_percent: 50,
        opaque: "red".to_string(),
    }
}

fn fills(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("#0000{:02x}", i)).collect()
}

#[test]
fn single_source_batch_matches_the_palette_size() {
    let sources = vec![PathBuf::from("kiki.png")];
    let jobs = variants::plan(&sources, &fills(100), &config(".", 0));
    assert_eq!(jobs.len(), 100);
}

#[test]
fn multi_source_batch_is_sources_times_colors() {
    let sources = vec![
        PathBuf::from("a.png"),
        PathBuf::from("b.png"),
        PathBuf::from("c.png"),
    ];
    let jobs = variants::plan(&sources, &fills(5), &config(".", 0));
    assert_eq!(jobs.len(), 15);
}

#[test]
fn output_suffixes_increase_strictly_from_the_offset() {
    let sources = vec![PathBuf::from("a.png"), PathBuf::from("b.png")];
    let jobs = variants::plan(&sources, &fills(3), &config("out", 4));

    let names: Vec<String> = jobs
        .iter()
        .map(|j| j.output.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        [
            "kiki_4.png",
            "kiki_5.png",
            "kiki_6.png",
            "kiki_7.png",
            "kiki_8.png",
            "kiki_9.png",
        ]
    );
}

#[tokio::test]
async fn run_invokes_the_tool_once_per_job() {
    let sources = vec![PathBuf::from("kiki.png")];
    let jobs = variants::plan(&sources, &fills(10), &config("out", 0));

    let tool = RecordingTool::new();
    let report = variants::run(&tool, &jobs).await;

    assert_eq!(
        report,
        BatchReport {
            completed: 10,
            failed: 0
        }
    );
    assert_eq!(tool.jobs(), jobs);
}

#[tokio::test]
async fn run_skips_a_failed_job_and_continues() {
    let sources = vec![PathBuf::from("kiki.png")];
    let jobs = variants::plan(&sources, &fills(4), &config("out", 0));

    let tool = RecordingTool::failing_on(&["kiki_1.png"]);
    let report = variants::run(&tool, &jobs).await;

    assert_eq!(
        report,
        BatchReport {
            completed: 3,
            failed: 1
        }
    );
    // The failing job was still attempted, and the later ones still ran.
    assert_eq!(tool.jobs().len(), 4);
}

#[tokio::test]
async fn greyscale_batch_uses_the_fixed_grey_everywhere() {
    let sources = default_tile_set();
    let grey = vec![GREY_FILL.to_string()];
    let jobs = variants::plan(&sources, &grey, &config("processed", 0));

    assert_eq!(jobs.len(), 8);
    assert!(jobs.iter().all(|j| j.fill == "#b7b7b7"));

    let tool = RecordingTool::new();
    let report = variants::run(&tool, &jobs).await;
    assert_eq!(report.completed, 8);
}

#[tokio::test]
async fn magick_missing_binary_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let tool = Magick::new("kikitool-no-such-convert");
    let job = RecolorJob {
        source: PathBuf::from("kiki.png"),
        output: dir.path().join("kiki_0.png"),
        fill: GREY_FILL.to_string(),
        fuzz_percent: 50,
        opaque: "red".to_string(),
    };

    assert!(tool.recolor(&job).await.is_err());
}

#[tokio::test]
async fn magick_reports_a_nonzero_exit() {
    let dir = tempfile::tempdir().unwrap();
    let tool = Magick::new("false");
    let job = RecolorJob {
        source: PathBuf::from("kiki.png"),
        output: dir.path().join("kiki_0.png"),
        fill: GREY_FILL.to_string(),
        fuzz_percent: 50,
        opaque: "red".to_string(),
    };

    let err = tool.recolor(&job).await.unwrap_err();
    assert!(err.to_string().contains("exited with"));
}

#[tokio::test]
async fn magick_creates_the_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let tool = Magick::new("true");
    let job = RecolorJob {
        source: PathBuf::from("kiki.png"),
        output: dir.path().join("processed/kiki_0.png"),
        fill: GREY_FILL.to_string(),
        fuzz_percent: 50,
        opaque: "red".to_string(),
    };

    tool.recolor(&job).await.unwrap();
    assert!(dir.path().join("processed").is_dir());
}
