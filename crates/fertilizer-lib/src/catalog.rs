//! Reference information for the fertilizers the classifier can recommend

use serde::Serialize;

/// Agronomic notes for a single fertilizer label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FertilizerInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub npk: &'static str,
    pub application: &'static str,
    pub benefits: &'static str,
    pub precautions: &'static str,
}

const CATALOG: &[FertilizerInfo] = &[
    FertilizerInfo {
        name: "Urea",
        description: "High nitrogen content fertilizer (46% N)",
        npk: "46-0-0",
        application: "Apply 2-3 weeks before planting or as top dressing during vegetative growth",
        benefits: "Promotes leaf growth and green color",
        precautions: "Avoid over-application to prevent burning",
    },
    FertilizerInfo {
        name: "DAP",
        description: "Diammonium Phosphate (18% N, 46% P2O5)",
        npk: "18-46-0",
        application: "Apply at planting time or during soil preparation",
        benefits: "Excellent for root development and early plant growth",
        precautions: "Best applied in slightly acidic to neutral soils",
    },
    FertilizerInfo {
        name: "TSP",
        description: "Triple Super Phosphate (46% P2O5)",
        npk: "0-46-0",
        application: "Apply during soil preparation, 2-3 weeks before planting",
        benefits: "Promotes strong root system and flowering",
        precautions: "May reduce availability in alkaline soils",
    },
    FertilizerInfo {
        name: "Superphosphate",
        description: "Single Super Phosphate (16% P2O5, 12% S)",
        npk: "0-16-0",
        application: "Apply during soil preparation or at planting",
        benefits: "Provides phosphorus and sulfur for plant growth",
        precautions: "Less concentrated than other phosphate fertilizers",
    },
    FertilizerInfo {
        name: "Potassium sulfate",
        description: "Sulfate of Potash (50% K2O, 18% S)",
        npk: "0-0-50",
        application: "Apply during fruit development stage",
        benefits: "Improves fruit quality and disease resistance",
        precautions: "Suitable for chloride-sensitive crops",
    },
    FertilizerInfo {
        name: "Potassium chloride",
        description: "Muriate of Potash (60% K2O)",
        npk: "0-0-60",
        application: "Apply 2-4 weeks before planting",
        benefits: "Enhances water regulation and disease resistance",
        precautions: "Avoid for salt-sensitive crops",
    },
    FertilizerInfo {
        name: "28-28",
        description: "Balanced NPK fertilizer (28% N, 28% P2O5)",
        npk: "28-28-0",
        application: "Apply at planting and during active growth periods",
        benefits: "Provides balanced nutrition for overall plant health",
        precautions: "Monitor soil pH for optimal nutrient uptake",
    },
    FertilizerInfo {
        name: "20-20",
        description: "Balanced fertilizer (20% N, 20% P2O5)",
        npk: "20-20-0",
        application: "Apply during planting and early growth stages",
        benefits: "Good starter fertilizer for young plants",
        precautions: "May need supplementation during peak growth",
    },
    FertilizerInfo {
        name: "17-17-17",
        description: "Complete NPK fertilizer (17% each of N, P2O5, K2O)",
        npk: "17-17-17",
        application: "Apply throughout the growing season",
        benefits: "Provides complete nutrition for all growth stages",
        precautions: "Adjust application rate based on soil test results",
    },
    FertilizerInfo {
        name: "15-15-15",
        description: "Balanced NPK fertilizer (15% each of N, P2O5, K2O)",
        npk: "15-15-15",
        application: "Apply at regular intervals during growing season",
        benefits: "Suitable for maintenance feeding of established plants",
        precautions: "Monitor for nutrient deficiencies in heavy feeders",
    },
    FertilizerInfo {
        name: "14-35-14",
        description: "High phosphorus fertilizer (14% N, 35% P2O5, 14% K2O)",
        npk: "14-35-14",
        application: "Apply during flowering and fruit set stages",
        benefits: "Promotes flowering, fruiting, and root development",
        precautions: "Best used when soil phosphorus levels are low",
    },
    FertilizerInfo {
        name: "14-14-14",
        description: "Balanced NPK fertilizer (14% each of N, P2O5, K2O)",
        npk: "14-14-14",
        application: "Apply as general purpose fertilizer throughout season",
        benefits: "Good all-around fertilizer for various crops",
        precautions: "May need supplementation for specific nutrient needs",
    },
    FertilizerInfo {
        name: "10-26-26",
        description: "High P-K fertilizer (10% N, 26% P2O5, 26% K2O)",
        npk: "10-26-26",
        application: "Apply during reproductive growth stages",
        benefits: "Excellent for fruit and seed development",
        precautions: "Use when nitrogen requirements are lower",
    },
    FertilizerInfo {
        name: "10-10-10",
        description: "Balanced NPK fertilizer (10% each of N, P2O5, K2O)",
        npk: "10-10-10",
        application: "Apply as maintenance fertilizer for established crops",
        benefits: "Gentle, balanced nutrition for sensitive plants",
        precautions: "May need higher rates for heavy feeding crops",
    },
];

/// Look up a fertilizer by its exact label
pub fn lookup(name: &str) -> Option<&'static FertilizerInfo> {
    CATALOG.iter().find(|info| info.name == name)
}

/// All known fertilizers
pub fn all() -> &'static [FertilizerInfo] {
    CATALOG
}
