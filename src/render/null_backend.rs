use crate::api::{ChartConfig, ChartGeometry, ChartKind};
use crate::error::{DashboardError, DashboardResult};
use crate::render::ChartBackend;
use crate::surface::DrawingContext;

/// Headless backend used by tests and server-side usage.
///
/// It still validates and projects every configuration so invalid series are
/// caught the same way a drawing backend would catch them.
#[derive(Debug, Default)]
pub struct NullBackend {
    pub lines_drawn: usize,
    pub bars_drawn: usize,
    pub last_point_count: usize,
    pub last_bar_count: usize,
}

impl NullBackend {
    fn check_kind(config: &ChartConfig, expected: ChartKind) -> DashboardResult<()> {
        if config.kind != expected {
            return Err(DashboardError::Backend(format!(
                "expected a {expected:?} chart config, got {:?}",
                config.kind
            )));
        }
        Ok(())
    }
}

impl ChartBackend for NullBackend {
    fn draw_line(&mut self, context: &DrawingContext, config: &ChartConfig) -> DashboardResult<()> {
        Self::check_kind(config, ChartKind::Line)?;
        if let ChartGeometry::Line(geometry) = config.project(context.viewport())? {
            self.last_point_count = geometry.points.len();
        }
        self.lines_drawn += 1;
        Ok(())
    }

    fn draw_bar(&mut self, context: &DrawingContext, config: &ChartConfig) -> DashboardResult<()> {
        Self::check_kind(config, ChartKind::Bar)?;
        if let ChartGeometry::Bar(bars) = config.project(context.viewport())? {
            self.last_bar_count = bars.len();
        }
        self.bars_drawn += 1;
        Ok(())
    }
}
