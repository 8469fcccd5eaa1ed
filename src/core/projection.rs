use serde::{Deserialize, Serialize};

use crate::core::{CategoryScale, ValueScale, Viewport};
use crate::error::{DashboardError, DashboardResult};

/// Fraction of a category band occupied by the bar group.
pub const CATEGORY_PERCENTAGE: f64 = 0.8;
/// Fraction of the bar group occupied by one bar.
pub const BAR_PERCENTAGE: f64 = 0.9;

/// Vertex in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartVertex {
    pub x: f64,
    pub y: f64,
}

impl ChartVertex {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cubic bezier segment between two adjacent data points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    pub start: ChartVertex,
    pub control1: ChartVertex,
    pub control2: ChartVertex,
    pub end: ChartVertex,
}

/// Options controlling line-chart projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineProjectionOptions {
    pub tension: f64,
    pub fill: bool,
    pub begin_at_zero: bool,
}

/// Deterministic geometry for a line chart.
///
/// `curve` is empty when tension is zero; the line is then the straight
/// polyline through `points`. `fill_polygon` is empty when fill is disabled
/// and otherwise closed against `baseline_y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartGeometry {
    pub points: Vec<ChartVertex>,
    pub curve: Vec<BezierSegment>,
    pub fill_polygon: Vec<ChartVertex>,
    pub baseline_y: f64,
}

/// Deterministic rectangle for one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x_left: f64,
    pub x_right: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

impl BarRect {
    #[must_use]
    pub fn width(self) -> f64 {
        self.x_right - self.x_left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y_bottom - self.y_top
    }
}

/// Projects line-chart values into pixel geometry.
pub fn project_line_chart(
    values: &[f64],
    options: LineProjectionOptions,
    viewport: Viewport,
) -> DashboardResult<LineChartGeometry> {
    if !options.tension.is_finite() || !(0.0..=1.0).contains(&options.tension) {
        return Err(DashboardError::InvalidData(
            "line tension must be finite and in [0, 1]".to_owned(),
        ));
    }

    let value_scale = ValueScale::fit(values, options.begin_at_zero)?;
    let category_scale = CategoryScale::new(values.len(), false);
    let baseline_y = value_scale.value_to_pixel(value_scale.baseline(), viewport)?;

    let mut points = Vec::with_capacity(values.len());
    for (index, &value) in values.iter().enumerate() {
        points.push(ChartVertex::new(
            category_scale.index_to_pixel(index, viewport)?,
            value_scale.value_to_pixel(value, viewport)?,
        ));
    }

    let curve = if options.tension > 0.0 && points.len() > 1 {
        spline_segments(&points, options.tension, viewport)
    } else {
        Vec::new()
    };

    let fill_polygon = if options.fill && !points.is_empty() {
        let mut polygon = Vec::with_capacity(points.len() + 3);
        polygon.push(ChartVertex::new(points[0].x, baseline_y));
        polygon.extend_from_slice(&points);
        polygon.push(ChartVertex::new(points[points.len() - 1].x, baseline_y));
        polygon.push(ChartVertex::new(points[0].x, baseline_y));
        polygon
    } else {
        Vec::new()
    };

    Ok(LineChartGeometry {
        points,
        curve,
        fill_polygon,
        baseline_y,
    })
}

/// Projects bar-chart values into one rectangle per category.
///
/// Bars grow from the scale baseline towards the value, so negative values
/// hang below it.
pub fn project_bar_chart(
    values: &[f64],
    begin_at_zero: bool,
    viewport: Viewport,
) -> DashboardResult<Vec<BarRect>> {
    let value_scale = ValueScale::fit(values, begin_at_zero)?;
    let category_scale = CategoryScale::new(values.len(), true);
    let baseline_y = value_scale.value_to_pixel(value_scale.baseline(), viewport)?;
    let half_width = category_scale.band_width(viewport)? * CATEGORY_PERCENTAGE * BAR_PERCENTAGE
        / 2.0;

    let mut bars = Vec::with_capacity(values.len());
    for (index, &value) in values.iter().enumerate() {
        let x_center = category_scale.index_to_pixel(index, viewport)?;
        let y_value = value_scale.value_to_pixel(value, viewport)?;
        bars.push(BarRect {
            x_left: x_center - half_width,
            x_right: x_center + half_width,
            y_top: y_value.min(baseline_y),
            y_bottom: y_value.max(baseline_y),
        });
    }
    Ok(bars)
}

/// Cardinal-spline control points, capped to the surface bounds.
fn spline_segments(points: &[ChartVertex], tension: f64, viewport: Viewport) -> Vec<BezierSegment> {
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let cap = |v: ChartVertex| ChartVertex::new(v.x.clamp(0.0, width), v.y.clamp(0.0, height));

    let controls: Vec<(ChartVertex, ChartVertex)> = (0..points.len())
        .map(|i| {
            let prev = points[i.saturating_sub(1)];
            let current = points[i];
            let next = points[(i + 1).min(points.len() - 1)];
            let (before, after) = control_points(prev, current, next, tension);
            (cap(before), cap(after))
        })
        .collect();

    points
        .windows(2)
        .enumerate()
        .map(|(i, pair)| BezierSegment {
            start: pair[0],
            control1: controls[i].1,
            control2: controls[i + 1].0,
            end: pair[1],
        })
        .collect()
}

fn control_points(
    prev: ChartVertex,
    current: ChartVertex,
    next: ChartVertex,
    tension: f64,
) -> (ChartVertex, ChartVertex) {
    let d01 = (current.x - prev.x).hypot(current.y - prev.y);
    let d12 = (next.x - current.x).hypot(next.y - current.y);
    let total = d01 + d12;

    let (s01, s12) = if total > 0.0 {
        (d01 / total, d12 / total)
    } else {
        (0.0, 0.0)
    };
    let fa = tension * s01;
    let fb = tension * s12;
    let dx = next.x - prev.x;
    let dy = next.y - prev.y;

    (
        ChartVertex::new(current.x - fa * dx, current.y - fa * dy),
        ChartVertex::new(current.x + fb * dx, current.y + fb * dy),
    )
}
