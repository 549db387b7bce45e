//! Inline SVG rating chart with a confidence band.
//!
//! Points are spaced evenly along the x axis regardless of the time between
//! evaluations; the page notes this under the chart.

use std::fmt::Write;

use super::escape;
use crate::i18n::Language;
use crate::rating::ChartPoint;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 360.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 40.0;

struct Frame {
    count: usize,
    min: f64,
    max: f64,
}

impl Frame {
    fn new(series: &[ChartPoint]) -> Self {
        let min = series.iter().map(|p| p.lower).fold(f64::INFINITY, f64::min);
        let max = series.iter().map(|p| p.upper).fold(f64::NEG_INFINITY, f64::max);
        let pad = ((max - min) * 0.05).max(1.0);
        Self {
            count: series.len(),
            min: min - pad,
            max: max + pad,
        }
    }

    fn x(&self, index: usize) -> f64 {
        let span = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        if self.count <= 1 {
            return MARGIN_LEFT + span / 2.0;
        }
        MARGIN_LEFT + span * index as f64 / (self.count - 1) as f64
    }

    fn y(&self, value: f64) -> f64 {
        let span = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        MARGIN_TOP + span * (self.max - value) / (self.max - self.min)
    }
}

fn points(frame: &Frame, values: impl Iterator<Item = (usize, f64)>) -> String {
    values
        .map(|(i, v)| format!("{:.1},{:.1}", frame.x(i), frame.y(v)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the chart, or an empty string when there is nothing to plot.
pub fn render_chart(lang: Language, series: &[ChartPoint]) -> String {
    let owned: Vec<ChartPoint> = series
        .iter()
        .filter(|p| p.rating.is_finite() && p.upper.is_finite() && p.lower.is_finite())
        .cloned()
        .collect();
    if owned.is_empty() {
        return String::new();
    }
    let frame = Frame::new(&owned);

    let upper = points(&frame, owned.iter().map(|p| p.upper).enumerate());
    let lower = points(&frame, owned.iter().map(|p| p.lower).enumerate());
    let lower_reversed = points(&frame, owned.iter().map(|p| p.lower).enumerate().rev());
    let rating = points(&frame, owned.iter().map(|p| p.rating).enumerate());

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" role=\"img\">",
        WIDTH, HEIGHT
    );
    let _ = write!(
        svg,
        "<polygon class=\"ci-band\" points=\"{} {}\" fill=\"rgba(0,123,255,0.12)\" stroke=\"none\"/>",
        upper, lower_reversed
    );
    let _ = write!(
        svg,
        "<polyline class=\"ci-upper\" points=\"{}\" fill=\"none\" stroke=\"#9ec5fe\" stroke-dasharray=\"4 3\"/>",
        upper
    );
    let _ = write!(
        svg,
        "<polyline class=\"ci-lower\" points=\"{}\" fill=\"none\" stroke=\"#9ec5fe\" stroke-dasharray=\"4 3\"/>",
        lower
    );
    let _ = write!(
        svg,
        "<polyline class=\"rating-line\" points=\"{}\" fill=\"none\" stroke=\"#007bff\" stroke-width=\"2\"/>",
        rating
    );
    for (i, point) in owned.iter().enumerate() {
        let _ = write!(
            svg,
            "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"3\" fill=\"#007bff\"><title>{}: {:.2} ({:.2} – {:.2})</title></circle>",
            frame.x(i),
            frame.y(point.rating),
            escape(&point.label),
            point.rating,
            point.lower,
            point.upper
        );
    }

    // Axis labels: value range on the left, first and last date below.
    let bottom = HEIGHT - MARGIN_BOTTOM;
    let _ = write!(
        svg,
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"end\">{:.0}</text>\
         <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"end\">{:.0}</text>",
        MARGIN_LEFT - 6.0,
        MARGIN_TOP + 4.0,
        frame.max,
        MARGIN_LEFT - 6.0,
        bottom,
        frame.min
    );
    if let (Some(first), Some(last)) = (owned.first(), owned.last()) {
        let _ = write!(
            svg,
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"start\">{}</text>",
            MARGIN_LEFT,
            bottom + 20.0,
            escape(&first.label)
        );
        if owned.len() > 1 {
            let _ = write!(
                svg,
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"end\">{}</text>",
                WIDTH - MARGIN_RIGHT,
                bottom + 20.0,
                escape(&last.label)
            );
        }
    }

    let _ = write!(
        svg,
        "<text x=\"{:.1}\" y=\"16\" font-size=\"12\" fill=\"#007bff\">{}</text>\
         <text x=\"{:.1}\" y=\"16\" font-size=\"12\" fill=\"#6c9bd2\">{} / {}</text>",
        MARGIN_LEFT,
        escape(lang.t("rating")),
        MARGIN_LEFT + 80.0,
        escape(lang.t("ci-upper")),
        escape(lang.t("ci-lower"))
    );
    svg.push_str("</svg>");

    format!(
        "<div class=\"chart\">{}<p class=\"chart-note\">{}</p></div>",
        svg,
        escape(lang.t("date-intervals"))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, rating: f64, error: f64) -> ChartPoint {
        ChartPoint {
            label: label.to_string(),
            rating,
            upper: rating + 1.96 * error,
            lower: rating - 1.96 * error,
        }
    }

    #[test]
    fn test_empty_series_renders_nothing() {
        assert!(render_chart(Language::En, &[]).is_empty());
    }

    #[test]
    fn test_band_encloses_rating_line() {
        let series = [point("2018-11-13", 2800.0, 40.0), point("2020-03-27", 2850.0, 35.0)];
        let html = render_chart(Language::En, &series);

        assert!(html.contains("class=\"ci-band\""));
        assert!(html.contains("class=\"rating-line\""));
        assert_eq!(html.matches("<circle").count(), 2);
        assert!(html.contains(">2018-11-13</text>"));
        assert!(html.contains(">2020-03-27</text>"));
        assert!(html.contains("date intervals not to scale"));
    }

    #[test]
    fn test_points_are_evenly_spaced() {
        let series = [point("a", 1.0, 1.0), point("b", 2.0, 1.0), point("c", 3.0, 1.0)];
        let frame = Frame::new(&series);

        let step = frame.x(1) - frame.x(0);
        assert!((frame.x(2) - frame.x(1) - step).abs() < 1e-9);
        assert!(frame.y(3.0) < frame.y(1.0));
    }

    #[test]
    fn test_single_point_is_centered() {
        let series = [point("only", 2500.0, 50.0)];
        let frame = Frame::new(&series);
        assert_eq!(frame.x(0), MARGIN_LEFT + (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / 2.0);
    }
}
