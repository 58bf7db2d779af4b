//! Statistic capability used by report composition.
//!
//! A [`Statistic`] pairs a human-readable caption with an algorithm that
//! summarizes a sequence of values into a [`StatisticResult`]. Two
//! statistics are provided:
//!
//! - [`MeanAndStd`]: arithmetic mean and sample standard deviation
//! - [`Median`]: middle value (or average of the two middle values)
//!
//! [`StatisticKind`] selects one of them by name, e.g. from configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize, de::IntoDeserializer};

use crate::{descriptive::DescriptiveStats, median::median};

/// Error returned when a statistic cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StatisticError {
    #[display("cannot compute {caption} of an empty sequence")]
    EmptyInput { caption: &'static str },
}

/// Result of a statistic computation.
///
/// The [`Display`](std::fmt::Display) implementation produces the text
/// embedded into reports: a scalar is rendered with Rust's shortest
/// round-trip float formatting, a mean/std pair as `mean±std`.
///
/// ```
/// use weather_stats::statistic::StatisticResult;
///
/// assert_eq!(StatisticResult::Scalar(2.5).to_string(), "2.5");
/// let pair = StatisticResult::MeanAndStd { mean: 4.0, std_dev: 2.0 };
/// assert_eq!(pair.to_string(), "4±2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, derive_more::Display, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum StatisticResult {
    #[display("{_0}")]
    Scalar(f64),
    #[display("{mean}±{std_dev}")]
    MeanAndStd { mean: f64, std_dev: f64 },
}

/// A descriptive statistic over a sequence of values.
///
/// Implementations are stateless and must not modify the input.
pub trait Statistic: Send + Sync {
    /// Caption shown as the report heading.
    fn caption(&self) -> &'static str;

    /// Computes the statistic over `data`.
    ///
    /// Fails with [`StatisticError::EmptyInput`] if `data` is empty.
    fn compute(&self, data: &[f64]) -> Result<StatisticResult, StatisticError>;
}

/// Arithmetic mean and sample standard deviation.
///
/// A single value yields a `NaN` standard deviation.
///
/// ```
/// use weather_stats::statistic::{MeanAndStd, Statistic, StatisticResult};
///
/// let result = MeanAndStd.compute(&[2.0, 4.0, 6.0]).unwrap();
/// assert_eq!(result, StatisticResult::MeanAndStd { mean: 4.0, std_dev: 2.0 });
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MeanAndStd;

impl Statistic for MeanAndStd {
    fn caption(&self) -> &'static str {
        "Mean and Std"
    }

    fn compute(&self, data: &[f64]) -> Result<StatisticResult, StatisticError> {
        let stats = DescriptiveStats::new(data).ok_or(StatisticError::EmptyInput {
            caption: self.caption(),
        })?;
        Ok(StatisticResult::MeanAndStd {
            mean: stats.mean,
            std_dev: stats.std_dev,
        })
    }
}

/// Median of the values.
///
/// ```
/// use weather_stats::statistic::{Median, Statistic, StatisticResult};
///
/// assert_eq!(Median.compute(&[1.0, 2.0, 3.0, 4.0]).unwrap(), StatisticResult::Scalar(2.5));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Median;

impl Statistic for Median {
    fn caption(&self) -> &'static str {
        "Median"
    }

    fn compute(&self, data: &[f64]) -> Result<StatisticResult, StatisticError> {
        let median = median(data).ok_or(StatisticError::EmptyInput {
            caption: self.caption(),
        })?;
        Ok(StatisticResult::Scalar(median))
    }
}

/// Selects one of the available statistics by name.
///
/// Parsed and (de)serialized under the same `snake_case` names
/// (`"mean_and_std"`, `"median"`).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticKind {
    #[default]
    MeanAndStd,
    Median,
}

impl StatisticKind {
    /// All selectable statistics.
    pub const ALL: [Self; 2] = [Self::MeanAndStd, Self::Median];

    /// Returns the shared instance of the selected statistic.
    #[must_use]
    pub fn statistic(self) -> &'static dyn Statistic {
        match self {
            Self::MeanAndStd => &MeanAndStd,
            Self::Median => &Median,
        }
    }
}

impl FromStr for StatisticKind {
    type Err = serde::de::value::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::deserialize(s.into_deserializer())
    }
}
