pub mod chart;
pub mod ranking;
pub mod uncertainty;

pub use chart::{confidence_series, ChartPoint};
pub use ranking::derive_ranking;
pub use uncertainty::{current_estimate, extrapolate_error, Estimate};

/// Rounds to two decimals, the precision ratings and errors are shown with.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn format2(value: f64) -> String {
    format!("{:.2}", value)
}
