/// Mean and sample standard deviation of a dataset.
///
/// The standard deviation is the *sample* standard deviation, dividing the
/// sum of squared deviations by `count - 1`. A dataset with a single value
/// therefore has a `NaN` standard deviation (`0 / 0`), which is reported
/// as-is rather than treated as an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The sample standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from a slice of values.
    ///
    /// The input is only read; no copy is made.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use weather_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new(&[2.0, 4.0, 6.0]).unwrap();
    /// assert_eq!(stats.count, 3);
    /// assert_eq!(stats.mean, 4.0);
    /// assert_eq!(stats.std_dev, 2.0);
    /// ```
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        let mean = mean(values)?;
        let std_dev = sample_std_dev(values, mean);
        Some(Self {
            count: values.len(),
            mean,
            std_dev,
        })
    }
}

/// Computes the arithmetic mean of `values`.
///
/// Returns `None` if `values` is empty.
///
/// # Examples
///
/// ```
/// # use weather_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
/// assert_eq!(mean(&[]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum = values.iter().copied().sum::<f64>();
    Some(sum / values.len() as f64)
}

/// Computes the sample standard deviation of `values` around `mean`.
///
/// `sqrt(sum((x - mean)^2) / (n - 1))`. For a single value this is `0 / 0`,
/// i.e. `NaN`. Callers should reject empty slices before calling this.
///
/// # Examples
///
/// ```
/// # use weather_stats::descriptive::sample_std_dev;
/// assert_eq!(sample_std_dev(&[2.0, 4.0, 6.0], 4.0), 2.0);
/// assert!(sample_std_dev(&[10.0], 10.0).is_nan());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    let squared_deviations = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    // usize underflow on an empty slice is avoided by going through f64
    let degrees_of_freedom = values.len() as f64 - 1.0;
    (squared_deviations / degrees_of_freedom).sqrt()
}
