use std::collections::HashSet;

use crate::api::{ChartConfig, ChartKind};
use crate::error::{DashboardError, DashboardResult};
use crate::render::ChartBackend;
use crate::surface::DrawingContext;

/// One draw request received by a `RecordingBackend`.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub surface_id: String,
    pub kind: ChartKind,
    pub config: ChartConfig,
}

/// Substitute backend that records draw requests instead of drawing.
///
/// Surfaces registered with `fail_on` make the backend reject draws into
/// them, standing in for a charting library that throws.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Vec<DrawCall>,
    failing_surfaces: HashSet<String>,
}

impl RecordingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fail_on(mut self, surface_id: impl Into<String>) -> Self {
        self.failing_surfaces.insert(surface_id.into());
        self
    }

    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn calls_of(&self, kind: ChartKind) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(move |call| call.kind == kind)
    }

    fn record(
        &mut self,
        context: &DrawingContext,
        kind: ChartKind,
        config: &ChartConfig,
    ) -> DashboardResult<()> {
        if self.failing_surfaces.contains(context.surface_id()) {
            return Err(DashboardError::Backend(format!(
                "refusing to draw into `{}`",
                context.surface_id()
            )));
        }
        self.calls.push(DrawCall {
            surface_id: context.surface_id().to_owned(),
            kind,
            config: config.clone(),
        });
        Ok(())
    }
}

impl ChartBackend for RecordingBackend {
    fn draw_line(&mut self, context: &DrawingContext, config: &ChartConfig) -> DashboardResult<()> {
        self.record(context, ChartKind::Line, config)
    }

    fn draw_bar(&mut self, context: &DrawingContext, config: &ChartConfig) -> DashboardResult<()> {
        self.record(context, ChartKind::Bar, config)
    }
}
