//! SVG geometry for the breakdown bars and distribution doughnut.

use std::f64::consts::PI;

use crate::report::{DistributionSlice, KpiRow};

pub const BAR_CHART_WIDTH: f64 = 700.0;
pub const BAR_CHART_HEIGHT: f64 = 320.0;
/// Left gutter for the y-axis labels.
pub const BAR_AXIS_GUTTER: f64 = 48.0;
/// Bottom band for the rotated KPI labels.
pub const BAR_LABEL_BAND: f64 = 90.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label_x: f64,
}

/// Bars laid out left to right on a 0..100% axis.
pub fn bar_layout(rows: &[KpiRow]) -> Vec<BarGeometry> {
    if rows.is_empty() {
        return Vec::new();
    }
    let plot_width = BAR_CHART_WIDTH - BAR_AXIS_GUTTER;
    let plot_height = BAR_CHART_HEIGHT - BAR_LABEL_BAND;
    let slot = plot_width / rows.len() as f64;
    let width = slot * 0.6;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let height = plot_height * crate::scoring::bar_fill(row.percentage) / 100.0;
            let x = BAR_AXIS_GUTTER + slot * i as f64 + (slot - width) / 2.0;
            BarGeometry {
                x,
                y: plot_height - height,
                width,
                height,
                label_x: x + width / 2.0,
            }
        })
        .collect()
}

/// Y coordinate of an axis tick for `pct`.
pub fn axis_y(pct: f64) -> f64 {
    let plot_height = BAR_CHART_HEIGHT - BAR_LABEL_BAND;
    plot_height - plot_height * pct / 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    pub slice: DistributionSlice,
    /// SVG path `d` attribute.
    pub path: String,
    pub fraction: f64,
}

/// Doughnut segments centred at (`cx`, `cy`). Empty buckets are skipped.
pub fn doughnut_segments(
    slices: &[DistributionSlice],
    cx: f64,
    cy: f64,
    inner: f64,
    outer: f64,
) -> Vec<ArcSegment> {
    let total: u64 = slices.iter().map(|s| s.count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = -PI / 2.0;
    slices
        .iter()
        .filter(|s| s.count > 0)
        .map(|slice| {
            let fraction = slice.count as f64 / total as f64;
            // A full circle cannot be drawn as one arc; stop just short.
            let sweep = (fraction * 2.0 * PI).min(2.0 * PI - 1e-4);
            let end = start + sweep;
            let path = annular_sector(cx, cy, inner, outer, start, end);
            start = end;
            ArcSegment {
                slice: *slice,
                path,
                fraction,
            }
        })
        .collect()
}

fn annular_sector(cx: f64, cy: f64, inner: f64, outer: f64, start: f64, end: f64) -> String {
    let large = if end - start > PI { 1 } else { 0 };
    let point = |r: f64, a: f64| (cx + r * a.cos(), cy + r * a.sin());
    let (ox1, oy1) = point(outer, start);
    let (ox2, oy2) = point(outer, end);
    let (ix2, iy2) = point(inner, end);
    let (ix1, iy1) = point(inner, start);
    format!(
        "M {:.3} {:.3} A {} {} 0 {} 1 {:.3} {:.3} L {:.3} {:.3} A {} {} 0 {} 0 {:.3} {:.3} Z",
        ox1, oy1, outer, outer, large, ox2, oy2, ix2, iy2, inner, inner, large, ix1, iy1
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Kpi;
    use crate::report::Bucket;

    #[test]
    fn test_bar_heights_follow_percentage() {
        let rows: Vec<KpiRow> = Kpi::ALL
            .iter()
            .map(|&kpi| KpiRow::new(kpi, kpi.max_score() / 2.0))
            .collect();
        let bars = bar_layout(&rows);
        let plot_height = BAR_CHART_HEIGHT - BAR_LABEL_BAND;

        assert_eq!(bars.len(), 7);
        for bar in &bars {
            assert!((bar.height - plot_height / 2.0).abs() < 1e-9);
            assert!((bar.y + bar.height - plot_height).abs() < 1e-9);
        }
        assert!(bars.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn test_zero_bar_has_no_height() {
        let bars = bar_layout(&[KpiRow::new(Kpi::TimeRespect, 0.0)]);
        assert_eq!(bars[0].height, 0.0);
    }

    #[test]
    fn test_axis_extremes() {
        assert_eq!(axis_y(100.0), 0.0);
        assert_eq!(axis_y(0.0), BAR_CHART_HEIGHT - BAR_LABEL_BAND);
    }

    #[test]
    fn test_doughnut_fractions_sum_to_one() {
        let slices = [
            DistributionSlice { bucket: Bucket::Excellent, count: 12 },
            DistributionSlice { bucket: Bucket::Good, count: 5 },
            DistributionSlice { bucket: Bucket::Average, count: 2 },
            DistributionSlice { bucket: Bucket::Poor, count: 1 },
        ];
        let segments = doughnut_segments(&slices, 100.0, 100.0, 60.0, 100.0);
        assert_eq!(segments.len(), 4);
        let total: f64 = segments.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(segments[0].path.starts_with("M 100.000 0.000"));
    }

    #[test]
    fn test_doughnut_empty_and_single() {
        let none = [DistributionSlice { bucket: Bucket::Poor, count: 0 }];
        assert!(doughnut_segments(&none, 0.0, 0.0, 1.0, 2.0).is_empty());

        let single = [
            DistributionSlice { bucket: Bucket::Good, count: 3 },
            DistributionSlice { bucket: Bucket::Poor, count: 0 },
        ];
        let segments = doughnut_segments(&single, 0.0, 0.0, 1.0, 2.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].fraction, 1.0);
        assert!(segments[0].path.contains(" 0 1 1 "));
    }
}
