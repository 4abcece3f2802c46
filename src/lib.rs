use std::path::{Path, PathBuf};

pub mod energy;
pub mod error;
pub mod plot;
pub mod samples;

pub use energy::{energy_report, AnalysisParams, EnergyReport};
pub use error::AnalysisError;
pub use samples::SeriesStats;

/// PNG path for a capture file: same directory and base name, final
/// extension replaced.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("png")
}

fn count_mismatch(actual: usize, expected: usize) -> Option<String> {
    (actual != expected).then(|| format!("expected {expected} samples but got {actual}"))
}

/// Run one full analysis pass: parse the capture, render its trace
/// next to the input and reduce it to energy metrics.
///
/// A sample count that deviates from `params.expected_samples` is
/// logged as a warning and the run continues with the actual count.
/// Parse failures abort before any image is written.
pub fn analyze(path: &Path, params: &AnalysisParams) -> Result<EnergyReport, AnalysisError> {
    let samples = samples::load_samples(path)?;

    if let Some(warning) = count_mismatch(samples.len(), params.expected_samples) {
        log::warn!("{warning}");
    }

    let stats = SeriesStats::from_samples(&samples)?;
    log::info!(
        "parsed {} samples: mean {:.4} A, std dev {:.4} A, peak {:.4} A",
        samples.len(),
        stats.mean,
        stats.std_dev,
        stats.peak
    );

    plot::render_series(&samples, params.sample_interval, &output_path(path))?;

    energy_report(&samples, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "power-analysis-{name}-{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    fn cleanup(path: &Path) {
        let _ = std::fs::remove_file(path);
        let _ = std::fs::remove_file(output_path(path));
    }

    #[test]
    fn derives_png_path_from_final_extension() {
        assert_eq!(
            output_path(Path::new("measurements.csv")),
            PathBuf::from("measurements.png")
        );
        assert_eq!(output_path(Path::new("a.b.csv")), PathBuf::from("a.b.png"));
    }

    #[test]
    fn count_mismatch_reports_both_counts() {
        let warning = count_mismatch(4, 50_000).unwrap();
        assert_eq!(warning, "expected 50000 samples but got 4");
        assert_eq!(count_mismatch(50_000, 50_000), None);
    }

    #[test]
    fn short_capture_warns_but_succeeds() {
        let path = capture_file("short-capture", "0.01,0.02,0.04,0.05");

        let report = analyze(&path, &AnalysisParams::default()).unwrap();
        assert!(output_path(&path).exists());
        assert!((report.idle_current.unwrap() - 0.015).abs() < 1e-12);

        cleanup(&path);
    }

    #[test]
    fn bad_token_aborts_before_plotting() {
        let path = capture_file("bad-token", "0.01,abc,0.05");

        let err = analyze(&path, &AnalysisParams::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::BadToken { .. }));
        assert!(!output_path(&path).exists());

        cleanup(&path);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = Path::new("/nonexistent/power-analysis-capture.csv");
        let err = analyze(path, &AnalysisParams::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::Io { .. }));
    }

    #[test]
    fn repeated_runs_report_identical_metrics() {
        let path = capture_file("repeat", "0.012,0.034,0.056,0.01,0.02,");

        let params = AnalysisParams::default();
        let first = analyze(&path, &params).unwrap();
        let second = analyze(&path, &params).unwrap();
        assert_eq!(first, second);

        cleanup(&path);
    }
}
