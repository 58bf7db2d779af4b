use serde::{Deserialize, Serialize};
use weather_stats::statistic::StatisticKind;

use crate::{
    compose::{ReportError, compose},
    formatter::FormatKind,
    measurement::Measurement,
};

/// Formatter and statistic selection for a report.
///
/// Missing fields fall back to their defaults (HTML, mean and std).
///
/// ```
/// use weather_report::{config::ReportConfig, measurement::Measurement};
///
/// let config: ReportConfig =
///     serde_json::from_str(r#"{"format": "markdown", "statistic": "median"}"#).unwrap();
/// let report = config.render([Measurement::new(5.0, 50.0)]).unwrap();
/// assert_eq!(report, "## Median\n\n * **Temperature**: 5\n\n * **Humidity**: 50\n\n");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: FormatKind,
    pub statistic: StatisticKind,
}

impl ReportConfig {
    #[must_use]
    pub const fn new(format: FormatKind, statistic: StatisticKind) -> Self {
        Self { format, statistic }
    }

    /// Renders a report from `measurements` with the selected formatter and statistic.
    pub fn render<I>(&self, measurements: I) -> Result<String, ReportError>
    where
        I: IntoIterator<Item = Measurement>,
    {
        compose(
            measurements,
            self.format.formatter(),
            self.statistic.statistic(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: ReportConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.format, FormatKind::Html);
        assert_eq!(config.statistic, StatisticKind::MeanAndStd);
    }

    #[test]
    fn test_partial_config() {
        let config: ReportConfig = serde_json::from_str(r#"{"statistic": "median"}"#).unwrap();
        assert_eq!(
            config,
            ReportConfig::new(FormatKind::Html, StatisticKind::Median)
        );
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(serde_json::from_str::<ReportConfig>(r#"{"format": "latex"}"#).is_err());
    }

    #[test]
    fn test_render() {
        let config = ReportConfig::new(FormatKind::Html, StatisticKind::Median);
        let report = config
            .render([Measurement::new(1.0, 10.0), Measurement::new(2.0, 30.0)])
            .unwrap();
        assert_eq!(
            report,
            "<h1>Median</h1><ul><li><b>Temperature</b>: 1.5<li><b>Humidity</b>: 20</ul>"
        );
    }
}
