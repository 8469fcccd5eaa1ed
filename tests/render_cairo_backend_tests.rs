#![cfg(feature = "cairo-backend")]

use dashboard_charts::api::DashboardRenderer;
use dashboard_charts::core::{ChartSeries, DashboardPageState, Viewport};
use dashboard_charts::render::CairoBackend;
use dashboard_charts::surface::{Surface, SurfaceRegistry};

#[test]
fn cairo_backend_rasterizes_both_dashboard_charts() {
    let surfaces = SurfaceRegistry::new()
        .with_surface(Surface::new("userActivityChart", Viewport::new(320, 160)))
        .with_surface(Surface::new("popularCoursesChart", Viewport::new(240, 120)));
    let state = DashboardPageState::new(
        ChartSeries::new(["Jan", "Feb", "Mar"], vec![10.0, 25.0, 17.0]),
        ChartSeries::new(["Math", "Physics"], vec![40.0, 12.0]),
    );

    let mut renderer = DashboardRenderer::new(CairoBackend::new());
    let report = renderer
        .on_content_loaded(&surfaces, &state)
        .expect("render");
    assert!(report.all_drawn());

    let backend = renderer.into_backend();
    assert_eq!(backend.last_stats().bars_drawn, 2);

    let activity = backend.image("userActivityChart").expect("activity image");
    assert_eq!(activity.width(), 320);
    assert_eq!(activity.height(), 160);

    let mut png = Vec::new();
    backend
        .write_png("popularCoursesChart", &mut png)
        .expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
    assert!(backend.write_png("missing", &mut Vec::new()).is_err());
}
