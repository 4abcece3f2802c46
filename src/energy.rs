use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::error::AnalysisError;

/// Run parameters for one capture. Defaults mirror the measurement
/// setup: 50 000 samples at 0.6 ms from a 5 V supply, with current
/// above 30 mA attributed to the radio.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AnalysisParams {
    pub expected_samples: usize,
    /// Seconds between consecutive samples.
    pub sample_interval: f64,
    /// Supply voltage in volts.
    pub voltage: f64,
    /// Current threshold in amperes separating idle/CPU draw from
    /// active radio draw.
    pub wifi_threshold: f64,
    /// When set, the idle average is subtracted from every active
    /// sample before summing the wifi energy.
    pub subtract_idle_baseline: bool,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        AnalysisParams {
            expected_samples: 50_000,
            sample_interval: 0.6e-3,
            voltage: 5.0,
            wifi_threshold: 0.03,
            subtract_idle_baseline: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    /// Average idle/CPU current in amperes. `None` when baseline
    /// subtraction is disabled.
    pub idle_current: Option<f64>,
    /// Joules over the whole capture.
    pub total_energy: f64,
    /// Joules attributed to the radio (listen + transmit).
    pub wifi_energy: f64,
}

/// Reduce a sample series to its energy metrics.
///
/// Samples at or below the threshold form the idle subset, samples
/// strictly above it the active subset. With baseline subtraction an
/// empty idle subset is an error rather than a NaN average; without
/// it an empty active subset simply yields zero wifi energy.
pub fn energy_report(
    samples: &[f64],
    params: &AnalysisParams,
) -> Result<EnergyReport, AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::NoSamples);
    }

    let joules_per_amp = params.sample_interval * params.voltage;
    let total_energy = samples.iter().sum::<f64>() * joules_per_amp;

    let (idle, active): (Vec<f64>, Vec<f64>) = samples
        .iter()
        .partition(|&&sample| sample <= params.wifi_threshold);

    if params.subtract_idle_baseline {
        if idle.is_empty() {
            return Err(AnalysisError::NoIdleSamples {
                threshold: params.wifi_threshold,
            });
        }
        let idle_current = idle.as_slice().mean();
        let wifi_energy = active
            .iter()
            .map(|sample| sample - idle_current)
            .sum::<f64>()
            * joules_per_amp;

        Ok(EnergyReport {
            idle_current: Some(idle_current),
            total_energy,
            wifi_energy,
        })
    } else {
        let wifi_energy = active.iter().sum::<f64>() * joules_per_amp;

        Ok(EnergyReport {
            idle_current: None,
            total_energy,
            wifi_energy,
        })
    }
}
