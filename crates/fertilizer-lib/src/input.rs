//! Command-line input parsing and range validation
//!
//! Raw arguments are converted into a [`SoilReading`] first, then range
//! checked into a [`FeatureVector`]. Nitrogen, potassium and phosphorus are
//! accepted as any parseable number.

use crate::models::{CropType, FeatureVector, SoilType, NUM_FEATURES};
use std::ops::RangeInclusive;
use std::num::IntErrorKind;
use std::str::FromStr;
use thiserror::Error;

pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.0..=50.0;
pub const HUMIDITY_RANGE: RangeInclusive<f64> = 0.0..=100.0;
pub const MOISTURE_RANGE: RangeInclusive<f64> = 0.0..=100.0;
pub const SOIL_TYPE_RANGE: RangeInclusive<i64> = 0..=4;
pub const CROP_TYPE_RANGE: RangeInclusive<i64> = 0..=16;

/// A value outside its accepted range
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Temperature must be between 0 and 50°C")]
    Temperature(f64),
    #[error("Humidity must be between 0 and 100%")]
    Humidity(f64),
    #[error("Moisture must be between 0 and 100%")]
    Moisture(f64),
    #[error("Soil type must be between 0 and 4")]
    SoilType(i64),
    #[error("Crop type must be between 0 and 16")]
    CropType(i64),
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            Self::Temperature(_) => "temperature",
            Self::Humidity(_) => "humidity",
            Self::Moisture(_) => "moisture",
            Self::SoilType(_) => "soil_type",
            Self::CropType(_) => "crop_type",
        }
    }
}

/// Errors turning raw arguments into a feature vector
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Expected {} parameters", NUM_FEATURES)]
    ArgumentCount { got: usize },

    #[error("invalid {field} value '{value}': {reason}")]
    Parse {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Parsed but not yet range-checked readings
#[derive(Debug, Clone, PartialEq)]
pub struct SoilReading {
    pub temperature: f64,
    pub humidity: f64,
    pub moisture: f64,
    pub soil_type: i64,
    pub crop_type: i64,
    pub nitrogen: f64,
    pub potassium: f64,
    pub phosphorus: f64,
}

impl SoilReading {
    /// Convert exactly eight positional arguments, in column order
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, InputError> {
        let [temperature, humidity, moisture, soil_type, crop_type, nitrogen, potassium, phosphorus] =
            args
        else {
            return Err(InputError::ArgumentCount { got: args.len() });
        };

        Ok(Self {
            temperature: parse_field("temperature", temperature.as_ref())?,
            humidity: parse_field("humidity", humidity.as_ref())?,
            moisture: parse_field("moisture", moisture.as_ref())?,
            soil_type: parse_code("soil_type", soil_type.as_ref())?,
            crop_type: parse_code("crop_type", crop_type.as_ref())?,
            nitrogen: parse_field("nitrogen", nitrogen.as_ref())?,
            potassium: parse_field("potassium", potassium.as_ref())?,
            phosphorus: parse_field("phosphorus", phosphorus.as_ref())?,
        })
    }

    /// Range check in column order; the first violation wins
    pub fn validate(&self) -> Result<FeatureVector, ValidationError> {
        if !TEMPERATURE_RANGE.contains(&self.temperature) {
            return Err(ValidationError::Temperature(self.temperature));
        }
        if !HUMIDITY_RANGE.contains(&self.humidity) {
            return Err(ValidationError::Humidity(self.humidity));
        }
        if !MOISTURE_RANGE.contains(&self.moisture) {
            return Err(ValidationError::Moisture(self.moisture));
        }
        let soil_type = SoilType::from_code(self.soil_type)
            .ok_or(ValidationError::SoilType(self.soil_type))?;
        let crop_type = CropType::from_code(self.crop_type)
            .ok_or(ValidationError::CropType(self.crop_type))?;

        Ok(FeatureVector {
            temperature: self.temperature,
            humidity: self.humidity,
            moisture: self.moisture,
            soil_type,
            crop_type,
            nitrogen: self.nitrogen,
            potassium: self.potassium,
            phosphorus: self.phosphorus,
        })
    }
}

/// Parse and validate positional arguments in one step
pub fn parse_features<S: AsRef<str>>(args: &[S]) -> Result<FeatureVector, InputError> {
    let reading = SoilReading::from_args(args)?;
    Ok(reading.validate()?)
}

fn parse_field<T>(field: &'static str, raw: &str) -> Result<T, InputError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| InputError::Parse {
        field,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Category codes that overflow `i64` saturate, so range validation
/// reports them like any other out-of-range code
fn parse_code(field: &'static str, raw: &str) -> Result<i64, InputError> {
    match raw.trim().parse::<i64>() {
        Ok(code) => Ok(code),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(InputError::Parse {
                field,
                value: raw.to_string(),
                reason: e.to_string(),
            }),
        },
    }
}
