use std::path::Path;

use statrs::statistics::Statistics;

use crate::error::AnalysisError;

/// Read a whole capture file and parse it into a sample series.
pub fn load_samples(path: &Path) -> Result<Vec<f64>, AnalysisError> {
    let raw = std::fs::read_to_string(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_samples(&raw)
}

/// Parse a comma-separated line of current readings.
///
/// Empty and whitespace-only tokens are dropped wherever they appear,
/// so trailing commas and stray separators are tolerated. Order is
/// preserved and duplicates are kept.
pub fn parse_samples(raw: &str) -> Result<Vec<f64>, AnalysisError> {
    raw.trim()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token.parse::<f64>().map_err(|_| AnalysisError::BadToken {
                index,
                token: token.to_owned(),
            })
        })
        .collect()
}

/// Elapsed-time axis for a series of `len` samples taken every
/// `sample_interval` seconds. Sized to the actual series length, even
/// when the capture is shorter or longer than expected.
pub fn time_axis(len: usize, sample_interval: f64) -> Vec<f64> {
    (0..len).map(|i| i as f64 * sample_interval).collect()
}

#[derive(Debug, Clone, Copy)]
pub struct SeriesStats {
    pub mean: f64,
    pub std_dev: f64,
    pub peak: f64,
}

impl SeriesStats {
    pub fn from_samples(samples: &[f64]) -> Result<Self, AnalysisError> {
        if samples.is_empty() {
            return Err(AnalysisError::NoSamples);
        }
        Ok(SeriesStats {
            mean: samples.mean(),
            std_dev: samples.std_dev(),
            peak: samples.iter().copied().fold(f64::MIN, f64::max),
        })
    }
}
