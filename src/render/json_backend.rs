use crate::api::{ChartConfig, DashboardChartsJsonContractV1, RenderedChart};
use crate::error::DashboardResult;
use crate::render::ChartBackend;
use crate::surface::DrawingContext;

/// Backend that collects validated configurations for export to a browser
/// charting library.
#[derive(Debug, Default)]
pub struct JsonContractBackend {
    charts: Vec<RenderedChart>,
}

impl JsonContractBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn charts(&self) -> &[RenderedChart] {
        &self.charts
    }

    #[must_use]
    pub fn into_contract(self) -> DashboardChartsJsonContractV1 {
        DashboardChartsJsonContractV1::new(self.charts)
    }

    fn push(&mut self, context: &DrawingContext, config: &ChartConfig) -> DashboardResult<()> {
        config.validate()?;
        self.charts.push(RenderedChart {
            surface_id: context.surface_id().to_owned(),
            width: context.viewport().width,
            height: context.viewport().height,
            config: config.clone(),
        });
        Ok(())
    }
}

impl ChartBackend for JsonContractBackend {
    fn draw_line(&mut self, context: &DrawingContext, config: &ChartConfig) -> DashboardResult<()> {
        self.push(context, config)
    }

    fn draw_bar(&mut self, context: &DrawingContext, config: &ChartConfig) -> DashboardResult<()> {
        self.push(context, config)
    }
}
