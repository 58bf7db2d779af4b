use std::cmp::Ordering;

/// Orders values ascending with every NaN before all numbers, including
/// negative infinity.
///
/// ```
/// use weather_stats::median::nan_first_cmp;
///
/// let mut values = [2.0, f64::NAN, f64::NEG_INFINITY];
/// values.sort_by(nan_first_cmp);
/// assert!(values[0].is_nan());
/// assert_eq!(&values[1..], [f64::NEG_INFINITY, 2.0]);
/// ```
#[must_use]
pub fn nan_first_cmp(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| b.is_nan().cmp(&a.is_nan()))
}

/// Computes the median of unsorted values.
///
/// The values are copied and sorted internally with [`nan_first_cmp`]; the
/// caller's data is never reordered.
///
/// # Returns
///
/// The median, or `None` if `values` is empty.
///
/// # Examples
///
/// ```
/// use weather_stats::median::median;
///
/// assert_eq!(median(&[5.0, 1.0, 3.0, 2.0, 4.0]), Some(3.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// assert_eq!(median(&[]), None);
/// ```
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(nan_first_cmp);
    median_sorted(&sorted)
}

/// Computes the median of pre-sorted values.
///
/// For an odd count this is the element at `len / 2`. For an even count it is
/// the average of the elements at `len / 2 - 1` and `len / 2`, computed as
/// `(a + b) / 2`, so two huge middle values may overflow to infinity.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order as defined by
/// [`nan_first_cmp`].
///
/// # Examples
///
/// ```
/// use weather_stats::median::median_sorted;
///
/// assert_eq!(median_sorted(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(median_sorted(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
/// ```
#[must_use]
pub fn median_sorted(sorted_values: &[f64]) -> Option<f64> {
    assert!(
        sorted_values.is_sorted_by(|a, b| nan_first_cmp(a, b).is_le()),
        "values must be sorted in ascending order"
    );

    let len = sorted_values.len();
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    if len % 2 == 0 {
        Some((sorted_values[mid] + sorted_values[mid - 1]) / 2.0)
    } else {
        Some(sorted_values[mid])
    }
}
