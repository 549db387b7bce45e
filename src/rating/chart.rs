use crate::domain::dates::format_index;
use crate::domain::RatingPoint;

use super::round2;

/// A rating history point with its confidence bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub rating: f64,
    pub upper: f64,
    pub lower: f64,
}

/// Builds the rating series with a `rating ± z·error` band, oldest first.
pub fn confidence_series(points: &[RatingPoint], z: f64) -> Vec<ChartPoint> {
    points
        .iter()
        .map(|point| ChartPoint {
            label: format_index(point.date),
            rating: round2(point.rating),
            upper: round2(point.rating + z * point.error),
            lower: round2(point.rating - z * point.error),
        })
        .collect()
}
