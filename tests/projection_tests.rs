use approx::assert_abs_diff_eq;
use dashboard_charts::api::{ChartGeometry, DashboardRenderer};
use dashboard_charts::core::{
    ChartSeries, LineProjectionOptions, Viewport, project_bar_chart, project_line_chart,
};
use dashboard_charts::render::NullBackend;

#[test]
fn activity_line_projects_onto_zero_based_scale() {
    let geometry = project_line_chart(
        &[10.0, 25.0, 17.0],
        LineProjectionOptions {
            tension: 0.4,
            fill: true,
            begin_at_zero: true,
        },
        Viewport::new(300, 150),
    )
    .expect("projection");

    let xs: Vec<f64> = geometry.points.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 150.0, 300.0]);
    assert_abs_diff_eq!(geometry.points[0].y, 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.points[1].y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.points[2].y, 48.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.baseline_y, 150.0, epsilon = 1e-9);

    assert_eq!(geometry.curve.len(), 2);
    assert_eq!(geometry.curve[0].start, geometry.points[0]);
    assert_eq!(geometry.curve[1].end, geometry.points[2]);
    assert_abs_diff_eq!(geometry.curve[0].control1.x, 60.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.curve[0].control1.y, 54.0, epsilon = 1e-9);

    assert_eq!(geometry.fill_polygon.len(), 6);
    assert_eq!(geometry.fill_polygon.first(), geometry.fill_polygon.last());
}

#[test]
fn zero_tension_line_has_no_curve_and_no_fill_when_disabled() {
    let geometry = project_line_chart(
        &[1.0, 2.0],
        LineProjectionOptions {
            tension: 0.0,
            fill: false,
            begin_at_zero: false,
        },
        Viewport::new(100, 100),
    )
    .expect("projection");

    assert!(geometry.curve.is_empty());
    assert!(geometry.fill_polygon.is_empty());
    assert_abs_diff_eq!(geometry.points[0].y, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.points[1].y, 0.0, epsilon = 1e-9);
}

#[test]
fn bezier_controls_stay_inside_surface() {
    let viewport = Viewport::new(200, 100);
    let geometry = project_line_chart(
        &[0.0, 100.0, 0.0, 100.0, 0.0],
        LineProjectionOptions {
            tension: 1.0,
            fill: false,
            begin_at_zero: true,
        },
        viewport,
    )
    .expect("projection");

    for segment in &geometry.curve {
        for control in [segment.control1, segment.control2] {
            assert!((0.0..=200.0).contains(&control.x));
            assert!((0.0..=100.0).contains(&control.y));
        }
    }
}

#[test]
fn course_bars_grow_from_zero() {
    let bars = project_bar_chart(&[40.0, 12.0], true, Viewport::new(200, 100)).expect("bars");

    assert_eq!(bars.len(), 2);
    assert_abs_diff_eq!(bars[0].x_left, 14.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[0].x_right, 86.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[0].y_top, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[0].y_bottom, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[1].y_top, 70.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[1].height(), 30.0, epsilon = 1e-9);
}

#[test]
fn negative_bars_hang_below_baseline() {
    let bars = project_bar_chart(&[-5.0, 10.0], true, Viewport::new(100, 150)).expect("bars");

    assert_abs_diff_eq!(bars[0].y_top, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[0].y_bottom, 150.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[1].y_top, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[1].y_bottom, 100.0, epsilon = 1e-9);
}

#[test]
fn non_finite_values_fail_projection() {
    let options = LineProjectionOptions {
        tension: 0.4,
        fill: true,
        begin_at_zero: true,
    };
    assert!(project_line_chart(&[1.0, f64::NAN], options, Viewport::new(10, 10)).is_err());
    assert!(project_bar_chart(&[f64::INFINITY], true, Viewport::new(10, 10)).is_err());
}

#[test]
fn overflowing_value_span_fails_projection() {
    let renderer = DashboardRenderer::new(NullBackend::default());
    let series = ChartSeries::new(["a", "b"], vec![-f64::MAX, f64::MAX]);
    let viewport = Viewport::new(100, 100);

    assert!(renderer.user_activity_config(&series).project(viewport).is_err());
    assert!(renderer.popular_courses_config(&series).project(viewport).is_err());
}

#[test]
fn empty_series_projects_to_empty_geometry() {
    let renderer = DashboardRenderer::new(NullBackend::default());
    let config = renderer.user_activity_config(&ChartSeries::default());

    match config.project(Viewport::new(300, 150)).expect("projection") {
        ChartGeometry::Line(geometry) => {
            assert!(geometry.points.is_empty());
            assert!(geometry.curve.is_empty());
            assert!(geometry.fill_polygon.is_empty());
        }
        ChartGeometry::Bar(_) => panic!("activity chart must project as a line"),
    }
}
