use crate::analyzer::constants::*;
use crate::i18n::{Message, MessageLookup};
use crate::models::{Analysis, DrinkRecord, ImpactAssessment, ImpactBand, RegionTable};

/// Sum of sugar grams over all drinks.
pub fn total_sugar_grams(drinks: &[DrinkRecord]) -> f64 {
    drinks
        .iter()
        .map(|d| {
            debug_assert!(
                d.sugar_grams >= 0.0,
                "drink {} has negative sugar: {}",
                d.id,
                d.sugar_grams
            );
            d.sugar_grams
        })
        .sum()
}

/// Saturating logarithmic curve shared by every region.
///
/// `min(ln(1 + total / 5) * 1.8, 5)`, or 0 when nothing was consumed.
pub fn overall_impact_level(total_sugar_grams: f64) -> f64 {
    if total_sugar_grams > 0.0 {
        ((total_sugar_grams / SUGAR_SCALE_GRAMS).ln_1p() * IMPACT_CURVE_GAIN).min(MAX_IMPACT)
    } else {
        0.0
    }
}

/// Scale the overall level by a region's sensitivity, clamped to 5.
#[inline]
pub fn region_impact(overall_impact_level: f64, sensitivity: f64) -> f64 {
    (overall_impact_level * sensitivity).min(MAX_IMPACT)
}

/// Assess every region in `regions` for the given drinks.
///
/// Assessments follow the table's insertion order. Callers must only pass
/// validated records; see [`DrinkRecord::validate`].
pub fn analyze(
    drinks: &[DrinkRecord],
    regions: &RegionTable,
    lookup: &impl MessageLookup,
) -> Analysis {
    let total = total_sugar_grams(drinks);
    let overall = overall_impact_level(total);

    let assessments = regions
        .iter()
        .map(|region| {
            let score = region_impact(overall, region.sensitivity());
            let band = ImpactBand::from_score(score);

            ImpactAssessment {
                region_key: region.key().clone(),
                region_name: lookup.text(&Message::RegionName(region.key().clone())),
                impact_score: score,
                band,
                band_label: lookup.text(&Message::BandLabel(band)),
                descriptive_text: lookup
                    .text(&Message::RegionEffect(region.key().clone(), band)),
            }
        })
        .collect();

    Analysis {
        total_sugar_grams: total,
        overall_impact_level: overall,
        assessments,
    }
}
