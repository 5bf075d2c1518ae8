//! Adapter: wrap an interface we can't change behind the one we want.
//!
//! The legacy sensor reports Fahrenheit readings as formatted strings; the
//! rest of the system wants Celsius floats behind a trait.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AdapterError {
    #[error("malformed sensor report: {0:?}")]
    Malformed(String),
    #[error("unparseable reading {value:?}: {reason}")]
    BadReading { value: String, reason: String },
}

/// The interface the application is written against.
pub trait TemperatureSource {
    fn celsius(&self) -> Result<f64, AdapterError>;
}

/// Third-party device driver, not ours to modify. Reports look like
/// `"TEMP=72.5F"`.
pub struct LegacyFahrenheitSensor {
    report: String,
}

impl LegacyFahrenheitSensor {
    pub fn new(report: impl Into<String>) -> Self {
        Self {
            report: report.into(),
        }
    }

    pub fn raw_report(&self) -> &str {
        &self.report
    }
}

/// Owns a legacy sensor and speaks the modern interface for it.
pub struct FahrenheitAdapter {
    inner: LegacyFahrenheitSensor,
}

impl FahrenheitAdapter {
    pub fn new(inner: LegacyFahrenheitSensor) -> Self {
        Self { inner }
    }
}

impl TemperatureSource for FahrenheitAdapter {
    fn celsius(&self) -> Result<f64, AdapterError> {
        let raw = self.inner.raw_report();
        let value = raw
            .strip_prefix("TEMP=")
            .and_then(|rest| rest.strip_suffix('F'))
            .ok_or_else(|| AdapterError::Malformed(raw.to_string()))?;
        let fahrenheit: f64 = value.parse().map_err(|err| AdapterError::BadReading {
            value: value.to_string(),
            reason: format!("{err}"),
        })?;
        Ok((fahrenheit - 32.0) * 5.0 / 9.0)
    }
}

fn report(source: &dyn TemperatureSource) {
    match source.celsius() {
        Ok(celsius) => println!("current temperature: {celsius:.1}°C"),
        Err(err) => println!("sensor error: {err}"),
    }
}

pub fn demo() {
    let good = FahrenheitAdapter::new(LegacyFahrenheitSensor::new("TEMP=72.5F"));
    println!("legacy report {:?} through the adapter:", "TEMP=72.5F");
    report(&good);

    let bad = FahrenheitAdapter::new(LegacyFahrenheitSensor::new("72.5 degrees"));
    println!("and a report the adapter can't translate:");
    report(&bad);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translates_freezing_point() {
        let adapter = FahrenheitAdapter::new(LegacyFahrenheitSensor::new("TEMP=32.0F"));
        assert!(adapter.celsius().unwrap().abs() < 1e-9);
    }

    #[test]
    fn test_translates_body_temperature() {
        let adapter = FahrenheitAdapter::new(LegacyFahrenheitSensor::new("TEMP=98.6F"));
        assert!((adapter.celsius().unwrap() - 37.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_malformed_report() {
        let adapter = FahrenheitAdapter::new(LegacyFahrenheitSensor::new("no idea"));
        assert_eq!(
            adapter.celsius(),
            Err(AdapterError::Malformed("no idea".into()))
        );
    }

    #[test]
    fn test_rejects_unparseable_number() {
        let adapter = FahrenheitAdapter::new(LegacyFahrenheitSensor::new("TEMP=warmF"));
        assert!(matches!(
            adapter.celsius(),
            Err(AdapterError::BadReading { .. })
        ));
    }
}
