use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::RegionKey;

/// Upper bound (inclusive) of the Low band.
pub const LOW_BAND_MAX: f64 = 1.5;

/// Upper bound (inclusive) of the Moderate band.
pub const MODERATE_BAND_MAX: f64 = 3.5;

/// Qualitative severity derived from an impact score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactBand {
    Low,
    Moderate,
    High,
}

impl ImpactBand {
    /// Fixed cut points: `<= 1.5` Low, `<= 3.5` Moderate, else High.
    pub fn from_score(score: f64) -> Self {
        if score <= LOW_BAND_MAX {
            ImpactBand::Low
        } else if score <= MODERATE_BAND_MAX {
            ImpactBand::Moderate
        } else {
            ImpactBand::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactBand::Low => "low",
            ImpactBand::Moderate => "moderate",
            ImpactBand::High => "high",
        }
    }
}

impl fmt::Display for ImpactBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Impact of the current sugar load on one body region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactAssessment {
    pub region_key: RegionKey,
    pub region_name: String,
    /// Always within [0, 5].
    pub impact_score: f64,
    pub band: ImpactBand,
    pub band_label: String,
    pub descriptive_text: String,
}

/// Per-region assessments in region-table order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Analysis {
    pub total_sugar_grams: f64,
    pub overall_impact_level: f64,
    pub assessments: Vec<ImpactAssessment>,
}

impl Analysis {
    pub fn get(&self, key: &str) -> Option<&ImpactAssessment> {
        self.assessments
            .iter()
            .find(|a| a.region_key.as_str() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImpactAssessment> {
        self.assessments.iter()
    }

    pub fn len(&self) -> usize {
        self.assessments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assessments.is_empty()
    }

    /// Highest band across regions, if any.
    pub fn worst_band(&self) -> Option<ImpactBand> {
        self.assessments
            .iter()
            .map(|a| a.band)
            .max_by_key(|b| match b {
                ImpactBand::Low => 0,
                ImpactBand::Moderate => 1,
                ImpactBand::High => 2,
            })
    }
}
