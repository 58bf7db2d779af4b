use tracing::{debug, trace};
use weather_stats::statistic::{Statistic, StatisticError};

use crate::{
    formatter::ReportFormatter,
    measurement::{Measurement, MeasurementField},
};

/// Error returned when a report cannot be composed.
///
/// ```
/// use weather_report::{ReportError, median_html_report};
///
/// let err = median_html_report(Vec::new()).unwrap_err();
/// assert!(matches!(err, ReportError::Statistic { label: "Temperature", .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ReportError {
    /// The statistic failed for the field labeled `label`.
    #[display("failed to compute statistic for {label}")]
    Statistic {
        label: &'static str,
        source: StatisticError,
    },
}

/// Composes a report from `measurements` with one formatter and one statistic.
///
/// The output is the formatter's caption for the statistic, followed by the
/// list opening, one item per [`MeasurementField`] (Temperature, then
/// Humidity) and the list closing.
///
/// The measurements are collected once, so single-pass iterators are fine.
/// If the statistic fails for any field, no report is produced.
///
/// # Examples
///
/// ```
/// use weather_report::{
///     compose, formatter::Markdown, measurement::Measurement, statistic::Median,
/// };
///
/// let data = [Measurement::new(1.0, 10.0), Measurement::new(3.0, 30.0)];
/// let report = compose(data, &Markdown, &Median).unwrap();
/// assert_eq!(
///     report,
///     "## Median\n\n * **Temperature**: 2\n\n * **Humidity**: 20\n\n"
/// );
/// ```
pub fn compose<I, F, S>(
    measurements: I,
    formatter: &F,
    statistic: &S,
) -> Result<String, ReportError>
where
    I: IntoIterator<Item = Measurement>,
    F: ReportFormatter + ?Sized,
    S: Statistic + ?Sized,
{
    let measurements = measurements.into_iter().collect::<Vec<_>>();
    let caption = statistic.caption();
    debug!(
        caption,
        ?formatter,
        measurements = measurements.len(),
        "composing report"
    );

    let mut report = formatter.make_caption(caption);
    report.push_str(formatter.begin_list());
    for field in MeasurementField::ALL {
        let label = field.label();
        let result = statistic
            .compute(&field.values(&measurements))
            .map_err(|source| ReportError::Statistic { label, source })?;
        trace!(label, %result, "rendered report item");
        report.push_str(&formatter.make_item(label, &result.to_string()));
    }
    report.push_str(formatter.end_list());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use weather_stats::statistic::{MeanAndStd, Median, StatisticKind};

    use super::*;
    use crate::formatter::{FormatKind, Html, Markdown};

    fn sample() -> Vec<Measurement> {
        vec![
            Measurement::new(1.0, 10.0),
            Measurement::new(2.0, 20.0),
            Measurement::new(3.0, 30.0),
        ]
    }

    #[test]
    fn test_html_mean_and_std() {
        let report = compose(sample(), &Html, &MeanAndStd).unwrap();
        assert_eq!(
            report,
            "<h1>Mean and Std</h1><ul><li><b>Temperature</b>: 2±1<li><b>Humidity</b>: 20±10</ul>"
        );
    }

    #[test]
    fn test_markdown_median() {
        let report = compose(sample(), &Markdown, &Median).unwrap();
        assert_eq!(
            report,
            "## Median\n\n * **Temperature**: 2\n\n * **Humidity**: 20\n\n"
        );
    }

    #[test]
    fn test_dyn_capabilities() {
        for format in FormatKind::ALL {
            for kind in StatisticKind::ALL {
                let report = compose(sample(), format.formatter(), kind.statistic()).unwrap();
                let temperature = report.find("Temperature").unwrap();
                let humidity = report.find("Humidity").unwrap();
                assert!(temperature < humidity);
                assert_eq!(report.matches("Temperature").count(), 1);
                assert_eq!(report.matches("Humidity").count(), 1);
            }
        }
    }

    #[test]
    fn test_single_pass_iterator() {
        let source = sample().into_iter().filter(|m| m.temperature > 1.0);
        let report = compose(source, &Markdown, &Median).unwrap();
        assert!(report.contains(" * **Temperature**: 2.5\n\n"));
        assert!(report.contains(" * **Humidity**: 25\n\n"));
    }

    #[test]
    fn test_empty_input_fails() {
        let err = compose(Vec::new(), &Html, &Median).unwrap_err();
        assert_eq!(
            err,
            ReportError::Statistic {
                label: "Temperature",
                source: StatisticError::EmptyInput { caption: "Median" },
            }
        );
        assert_eq!(err.to_string(), "failed to compute statistic for Temperature");
    }
}
