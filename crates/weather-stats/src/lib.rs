//! Statistical summaries used by weather reports.
//!
//! This crate provides the numeric side of report generation:
//!
//! - **Descriptive statistics**: mean and sample standard deviation
//! - **Median**: middle value of an unsorted or pre-sorted dataset
//! - **Statistic capability**: a caption plus an algorithm producing a
//!   renderable [`StatisticResult`](statistic::StatisticResult)
//!
//! # Modules
//!
//! - [`descriptive`]: Mean and sample standard deviation
//! - [`median`]: Median computation
//! - [`statistic`]: The [`Statistic`](statistic::Statistic) trait and its implementations
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use weather_stats::descriptive::DescriptiveStats;
//!
//! let stats = DescriptiveStats::new(&[2.0, 4.0, 6.0]).unwrap();
//! assert_eq!(stats.mean, 4.0);
//! assert_eq!(stats.std_dev, 2.0);
//! ```
//!
//! ## Selecting a statistic by name
//!
//! ```
//! use weather_stats::statistic::StatisticKind;
//!
//! let kind: StatisticKind = "median".parse().unwrap();
//! let result = kind.statistic().compute(&[3.0, 1.0, 2.0]).unwrap();
//! assert_eq!(result.to_string(), "2");
//! ```

pub mod descriptive;
pub mod median;
pub mod statistic;
