//! Statistical reports over temperature and humidity measurements.
//!
//! A report pairs one [`ReportFormatter`](formatter::ReportFormatter) (the
//! markup dialect) with one [`Statistic`](statistic::Statistic) (the numeric
//! summary). [`compose`] accepts any pairing; the four functions at the crate
//! root bind the supported combinations.
//!
//! # Examples
//!
//! ```
//! use weather_report::{measurement::Measurement, median_markdown_report};
//!
//! let data = [
//!     Measurement::new(1.0, 10.0),
//!     Measurement::new(2.0, 20.0),
//!     Measurement::new(3.0, 30.0),
//! ];
//! let report = median_markdown_report(data).unwrap();
//! assert_eq!(report, "## Median\n\n * **Temperature**: 2\n\n * **Humidity**: 20\n\n");
//! ```
//!
//! A single measurement has no sample standard deviation:
//!
//! ```
//! use weather_report::{mean_and_std_html_report, measurement::Measurement};
//!
//! let report = mean_and_std_html_report([Measurement::new(10.0, 20.0)]).unwrap();
//! assert_eq!(
//!     report,
//!     "<h1>Mean and Std</h1><ul><li><b>Temperature</b>: 10±NaN<li><b>Humidity</b>: 20±NaN</ul>"
//! );
//! ```

pub use weather_stats::statistic;

pub use self::compose::{ReportError, compose};

use self::{
    formatter::{Html, Markdown},
    measurement::Measurement,
    statistic::{MeanAndStd, Median},
};

mod compose;
pub mod config;
pub mod formatter;
pub mod measurement;

/// HTML report of mean and sample standard deviation.
pub fn mean_and_std_html_report<I>(data: I) -> Result<String, ReportError>
where
    I: IntoIterator<Item = Measurement>,
{
    compose(data, &Html, &MeanAndStd)
}

/// Markdown report of the median.
pub fn median_markdown_report<I>(data: I) -> Result<String, ReportError>
where
    I: IntoIterator<Item = Measurement>,
{
    compose(data, &Markdown, &Median)
}

/// Markdown report of mean and sample standard deviation.
pub fn mean_and_std_markdown_report<I>(data: I) -> Result<String, ReportError>
where
    I: IntoIterator<Item = Measurement>,
{
    compose(data, &Markdown, &MeanAndStd)
}

/// HTML report of the median.
pub fn median_html_report<I>(data: I) -> Result<String, ReportError>
where
    I: IntoIterator<Item = Measurement>,
{
    compose(data, &Html, &Median)
}
