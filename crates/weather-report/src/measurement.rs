use serde::{Deserialize, Serialize};

/// A single environmental reading.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Measurement {
    /// Temperature reading
    pub temperature: f64,
    /// Humidity reading
    pub humidity: f64,
}

impl Measurement {
    #[must_use]
    pub const fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
        }
    }
}

/// A reported field of [`Measurement`].
///
/// [`MeasurementField::ALL`] lists the fields in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementField {
    Temperature,
    Humidity,
}

impl MeasurementField {
    pub const ALL: [Self; 2] = [Self::Temperature, Self::Humidity];

    /// Label used for the report item.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
        }
    }

    /// Reads this field from `measurement`.
    ///
    /// ```
    /// use weather_report::measurement::{Measurement, MeasurementField};
    ///
    /// let measurement = Measurement::new(21.0, 45.0);
    /// assert_eq!(MeasurementField::Humidity.value(&measurement), 45.0);
    /// ```
    #[must_use]
    pub const fn value(self, measurement: &Measurement) -> f64 {
        match self {
            Self::Temperature => measurement.temperature,
            Self::Humidity => measurement.humidity,
        }
    }

    /// Projects this field out of every measurement.
    #[must_use]
    pub fn values(self, measurements: &[Measurement]) -> Vec<f64> {
        measurements.iter().map(|m| self.value(m)).collect()
    }
}
