//! Core data models for the fertilizer predictor

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of input features expected by the classifier
pub const NUM_FEATURES: usize = 8;

/// Feature vector for ML inference
///
/// Field order matches the column order the classifier was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub temperature: f64,
    pub humidity: f64,
    pub moisture: f64,
    pub soil_type: SoilType,
    pub crop_type: CropType,
    pub nitrogen: f64,
    pub potassium: f64,
    pub phosphorus: f64,
}

impl FeatureVector {
    /// Values in training column order
    pub fn to_array(&self) -> [f64; NUM_FEATURES] {
        [
            self.temperature,
            self.humidity,
            self.moisture,
            f64::from(self.soil_type.code()),
            f64::from(self.crop_type.code()),
            self.nitrogen,
            self.potassium,
            self.phosphorus,
        ]
    }
}

/// Soil category as encoded in the training data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Black,
    Clayey,
    Loamy,
    Red,
    Sandy,
}

impl SoilType {
    pub const ALL: [SoilType; 5] = [
        SoilType::Black,
        SoilType::Clayey,
        SoilType::Loamy,
        SoilType::Red,
        SoilType::Sandy,
    ];

    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            SoilType::Black => "Black",
            SoilType::Clayey => "Clayey",
            SoilType::Loamy => "Loamy",
            SoilType::Red => "Red",
            SoilType::Sandy => "Sandy",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Crop category as encoded in the training data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropType {
    Barley,
    Cotton,
    GroundNuts,
    Maize,
    Millets,
    OilSeeds,
    Paddy,
    Pulses,
    Sugarcane,
    Tobacco,
    Wheat,
    Coffee,
    KidneyBeans,
    Orange,
    Pomegranate,
    Rice,
    Watermelon,
}

impl CropType {
    pub const ALL: [CropType; 17] = [
        CropType::Barley,
        CropType::Cotton,
        CropType::GroundNuts,
        CropType::Maize,
        CropType::Millets,
        CropType::OilSeeds,
        CropType::Paddy,
        CropType::Pulses,
        CropType::Sugarcane,
        CropType::Tobacco,
        CropType::Wheat,
        CropType::Coffee,
        CropType::KidneyBeans,
        CropType::Orange,
        CropType::Pomegranate,
        CropType::Rice,
        CropType::Watermelon,
    ];

    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Label used by the training data set
    pub fn name(self) -> &'static str {
        match self {
            CropType::Barley => "Barley",
            CropType::Cotton => "Cotton",
            CropType::GroundNuts => "Ground Nuts",
            CropType::Maize => "Maize",
            CropType::Millets => "Millets",
            CropType::OilSeeds => "Oil Seeds",
            CropType::Paddy => "Paddy",
            CropType::Pulses => "Pulses",
            CropType::Sugarcane => "Sugarcane",
            CropType::Tobacco => "Tobacco",
            CropType::Wheat => "Wheat",
            CropType::Coffee => "coffee",
            CropType::KidneyBeans => "kidneybeans",
            CropType::Orange => "orange",
            CropType::Pomegranate => "pomegranate",
            CropType::Rice => "rice",
            CropType::Watermelon => "watermelon",
        }
    }
}

impl fmt::Display for CropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
