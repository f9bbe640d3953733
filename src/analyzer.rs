use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::{Frame, Sample};

/// Frame measurement.
///
/// Analyzers inspect a frame without mutating it and carry no state between
/// calls, unlike [`Filter`](crate::Filter) implementations.
pub trait Analyzer<T: Sample> {
    type Output;

    fn analyze(&self, frame: &Frame<T>) -> Self::Output;
}

/// Rectification applied before peak detection
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[derive(strum::EnumString, strum::AsRefStr, strum::EnumIter)]
pub enum PeakDetection {
    /// Magnitude of either excursion
    FullWave,
    /// Positive excursions only
    PositiveHalfWave,
    /// Magnitude of negative excursions only
    NegativeHalfWave,
}

/// Largest rectified sample across all channels of a frame.
///
/// The scan accumulates in `f64` and quantizes the result back to the
/// sample type. An empty excursion set (a silent frame, or a half-wave
/// detection with no matching excursions) reports zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakAnalyzer {
    pub detection: PeakDetection,
}

impl PeakAnalyzer {
    pub fn new(detection: PeakDetection) -> Self {
        Self { detection }
    }
}

impl<T: Sample> Analyzer<T> for PeakAnalyzer {
    type Output = T;

    fn analyze(&self, frame: &Frame<T>) -> T {
        let mut peak = 0.0f64;
        for &sample in frame.iter() {
            let x = sample.to_f64();
            let rectified = match self.detection {
                PeakDetection::FullWave => x.abs(),
                PeakDetection::PositiveHalfWave => x.max(0.0),
                PeakDetection::NegativeHalfWave => (-x).max(0.0),
            };
            peak = peak.max(rectified);
        }
        T::from_f64(peak)
    }
}

/// Root-mean-square level of a frame.
///
/// Channels are mixed down to mono by averaging each sample index across
/// channels, then the RMS of the mono signal is reported in `f64`
/// regardless of the sample type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RmsAnalyzer;

impl<T: Sample> Analyzer<T> for RmsAnalyzer {
    type Output = f64;

    fn analyze(&self, frame: &Frame<T>) -> f64 {
        let mono: Frame<f64> = frame.zip_map_scalar(|column| {
            column.iter().map(|x| x.to_f64()).sum::<f64>() / column.len() as f64
        });
        let sum: f64 = mono.channel(0).iter().map(|x| x * x).sum();
        Float::sqrt(sum / mono.samples() as f64)
    }
}
