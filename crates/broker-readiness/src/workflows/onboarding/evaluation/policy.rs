use super::super::domain::{Dimension, SalesAngle, ScoreBreakdown, SuccessBand};
use super::rules::ratio_half_up;
use super::tables::{BAND_FLOORS, COMPOSITE_WEIGHTS, WEAKEST_DIMENSION_ANGLES};

/// Weighted composite of the four dimensions, rounded half-up.
pub fn success_probability(scores: &ScoreBreakdown) -> u8 {
    let weighted: u64 = COMPOSITE_WEIGHTS
        .iter()
        .map(|(dimension, weight)| u64::from(scores.get(*dimension)) * u64::from(*weight))
        .sum();
    let total_weight: u64 = COMPOSITE_WEIGHTS
        .iter()
        .map(|(_, weight)| u64::from(*weight))
        .sum();

    ratio_half_up(weighted, total_weight).min(100) as u8
}

pub fn classify_band(probability: u8) -> SuccessBand {
    BAND_FLOORS
        .iter()
        .find(|(floor, _)| probability >= *floor)
        .map(|(_, band)| *band)
        .unwrap_or(SuccessBand::Low)
}

/// Lowest-scoring dimension; ties go to the dimension listed first in `Dimension::ALL`.
pub fn weakest_dimension(scores: &ScoreBreakdown) -> Dimension {
    Dimension::ALL
        .into_iter()
        .fold(Dimension::Operational, |weakest, candidate| {
            if scores.get(candidate) < scores.get(weakest) {
                candidate
            } else {
                weakest
            }
        })
}

/// Highest-scoring dimension with the same tie-break order as [`weakest_dimension`].
pub fn strongest_dimension(scores: &ScoreBreakdown) -> Dimension {
    Dimension::ALL
        .into_iter()
        .fold(Dimension::Operational, |strongest, candidate| {
            if scores.get(candidate) > scores.get(strongest) {
                candidate
            } else {
                strongest
            }
        })
}

pub fn select_sales_angle(scores: &ScoreBreakdown) -> SalesAngle {
    let first = scores.get(Dimension::Operational);
    if Dimension::ALL
        .iter()
        .all(|dimension| scores.get(*dimension) == first)
    {
        return SalesAngle::BalancedPartnership;
    }

    let weakest = weakest_dimension(scores);
    WEAKEST_DIMENSION_ANGLES
        .iter()
        .find(|(dimension, _)| *dimension == weakest)
        .map(|(_, angle)| *angle)
        .unwrap_or(SalesAngle::BalancedPartnership)
}
