use anyhow::{bail, Result};
use std::fmt;

use crate::domain::{DayIndex, Gender, RatingPoint};

/// A rating with its uncertainty carried forward to a given day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub rating: f64,
    pub error: f64,
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ± {:.2}", self.rating, self.error)
    }
}

pub fn current_estimate(point: &RatingPoint, gender: Gender, today: DayIndex) -> Result<Estimate> {
    if !point.rating.is_finite() {
        bail!("Rating is not a finite number: {}", point.rating);
    }
    let days_since = calculate_days_since(point.date, today);
    let error = extrapolate_error(point.error, gender.w2(), days_since)?;
    Ok(Estimate {
        rating: point.rating,
        error,
    })
}

/// new_error = sqrt(error² + w² × days_since)
pub fn extrapolate_error(error: f64, w2: f64, days_since: i64) -> Result<f64> {
    if !error.is_finite() || !w2.is_finite() {
        bail!("Error and w2 must be finite (error={}, w2={})", error, w2);
    }
    if error < 0.0 || w2 < 0.0 {
        bail!("Error and w2 must not be negative (error={}, w2={})", error, w2);
    }
    let variance = error.powi(2) + w2 * days_since.max(0) as f64;
    Ok(variance.sqrt())
}

fn calculate_days_since(evaluated: DayIndex, today: DayIndex) -> i64 {
    (today - evaluated).max(0)
}
