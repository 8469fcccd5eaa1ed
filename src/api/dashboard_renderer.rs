use tracing::{debug, trace, warn};

use crate::core::{ChartSeries, DashboardPageState};
use crate::error::{DashboardError, DashboardResult};
use crate::render::ChartBackend;
use crate::surface::SurfaceLookup;

use super::{ChartConfig, ChartKind, Dataset, DashboardStyle};

/// Result of one chart render attempt.
#[derive(Debug)]
pub enum ChartOutcome {
    Drawn { surface_id: String },
    SkippedMissingSurface { surface_id: String },
    Failed { surface_id: String, error: DashboardError },
}

impl ChartOutcome {
    #[must_use]
    pub fn is_drawn(&self) -> bool {
        matches!(self, Self::Drawn { .. })
    }

    #[must_use]
    pub fn surface_id(&self) -> &str {
        match self {
            Self::Drawn { surface_id }
            | Self::SkippedMissingSurface { surface_id }
            | Self::Failed { surface_id, .. } => surface_id,
        }
    }
}

/// Outcomes of the page-load render pass.
#[derive(Debug)]
pub struct DashboardReport {
    pub user_activity: ChartOutcome,
    pub popular_courses: ChartOutcome,
}

impl DashboardReport {
    #[must_use]
    pub fn all_drawn(&self) -> bool {
        self.user_activity.is_drawn() && self.popular_courses.is_drawn()
    }
}

/// Draws the admin dashboard's user-activity and course-popularity charts.
///
/// The renderer builds both configurations from explicit inputs and hands
/// them to the injected backend. A surface missing from the page skips only
/// its own chart.
pub struct DashboardRenderer<B: ChartBackend> {
    backend: B,
    style: DashboardStyle,
    rendered: bool,
}

impl<B: ChartBackend> DashboardRenderer<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            style: DashboardStyle::default(),
            rendered: false,
        }
    }

    pub fn with_style(backend: B, style: DashboardStyle) -> DashboardResult<Self> {
        style.validate()?;
        Ok(Self {
            backend,
            style,
            rendered: false,
        })
    }

    #[must_use]
    pub fn style(&self) -> &DashboardStyle {
        &self.style
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }

    #[must_use]
    pub fn has_rendered(&self) -> bool {
        self.rendered
    }

    /// Line chart: accent stroke, translucent fill, smoothed, no legend, y from zero.
    #[must_use]
    pub fn user_activity_config(&self, series: &ChartSeries) -> ChartConfig {
        trace!(points = series.values.len(), "build user activity config");
        let dataset = Dataset::new(&self.style.user_activity_label, series.values.clone())
            .with_border_color(self.style.activity_accent)
            .with_background_color(self.style.activity_fill)
            .with_fill(true)
            .with_tension(self.style.activity_tension);
        ChartConfig::new(ChartKind::Line, series.labels.clone(), dataset)
            .with_legend(false)
            .with_y_begin_at_zero(true)
    }

    #[must_use]
    pub fn popular_courses_config(&self, series: &ChartSeries) -> ChartConfig {
        trace!(bars = series.values.len(), "build popular courses config");
        let dataset = Dataset::new(&self.style.popular_courses_label, series.values.clone())
            .with_background_color(self.style.course_bar_fill);
        ChartConfig::new(ChartKind::Bar, series.labels.clone(), dataset).with_legend(false)
    }

    pub fn render_user_activity<S: SurfaceLookup + ?Sized>(
        &mut self,
        surfaces: &S,
        series: &ChartSeries,
    ) -> ChartOutcome {
        let config = self.user_activity_config(series);
        let surface_id = self.style.user_activity_surface_id.clone();
        self.draw(surfaces, surface_id, &config)
    }

    pub fn render_popular_courses<S: SurfaceLookup + ?Sized>(
        &mut self,
        surfaces: &S,
        series: &ChartSeries,
    ) -> ChartOutcome {
        let config = self.popular_courses_config(series);
        let surface_id = self.style.popular_courses_surface_id.clone();
        self.draw(surfaces, surface_id, &config)
    }

    /// Page load-complete handler. Runs once per renderer.
    ///
    /// Both charts are attempted regardless of what happens to the other.
    /// A repeated call returns `AlreadyRendered` without touching the backend.
    pub fn on_content_loaded<S: SurfaceLookup + ?Sized>(
        &mut self,
        surfaces: &S,
        page_state: &DashboardPageState,
    ) -> DashboardResult<DashboardReport> {
        if self.rendered {
            return Err(DashboardError::AlreadyRendered);
        }
        self.rendered = true;

        let user_activity =
            self.render_user_activity(surfaces, &page_state.user_activity_series());
        let popular_courses =
            self.render_popular_courses(surfaces, &page_state.course_counts_series());
        debug!(
            user_activity_drawn = user_activity.is_drawn(),
            popular_courses_drawn = popular_courses.is_drawn(),
            "dashboard charts rendered"
        );

        Ok(DashboardReport {
            user_activity,
            popular_courses,
        })
    }

    fn draw<S: SurfaceLookup + ?Sized>(
        &mut self,
        surfaces: &S,
        surface_id: String,
        config: &ChartConfig,
    ) -> ChartOutcome {
        let Some(surface) = surfaces.surface_by_id(&surface_id) else {
            warn!(surface_id = %surface_id, "drawing surface missing, skipping chart");
            return ChartOutcome::SkippedMissingSurface { surface_id };
        };

        let result = surface.context_2d().and_then(|context| match config.kind {
            ChartKind::Line => self.backend.draw_line(&context, config),
            ChartKind::Bar => self.backend.draw_bar(&context, config),
        });

        match result {
            Ok(()) => {
                debug!(
                    surface_id = %surface_id,
                    kind = ?config.kind,
                    points = config.point_count(),
                    "chart drawn"
                );
                ChartOutcome::Drawn { surface_id }
            }
            Err(error) => {
                warn!(surface_id = %surface_id, error = %error, "chart draw failed");
                ChartOutcome::Failed { surface_id, error }
            }
        }
    }
}
