mod json_backend;
mod null_backend;
mod recording_backend;

pub use json_backend::JsonContractBackend;
pub use null_backend::NullBackend;
pub use recording_backend::{DrawCall, RecordingBackend};

use crate::api::ChartConfig;
use crate::error::DashboardResult;
use crate::surface::DrawingContext;

/// Contract implemented by any charting backend.
///
/// Backends own everything past configuration: validation of series data,
/// layout and pixels. The dashboard renderer only hands them a context and a
/// fully built `ChartConfig`.
pub trait ChartBackend {
    fn draw_line(&mut self, context: &DrawingContext, config: &ChartConfig) -> DashboardResult<()>;

    fn draw_bar(&mut self, context: &DrawingContext, config: &ChartConfig) -> DashboardResult<()>;
}

impl<B: ChartBackend + ?Sized> ChartBackend for &mut B {
    fn draw_line(&mut self, context: &DrawingContext, config: &ChartConfig) -> DashboardResult<()> {
        (**self).draw_line(context, config)
    }

    fn draw_bar(&mut self, context: &DrawingContext, config: &ChartConfig) -> DashboardResult<()> {
        (**self).draw_bar(context, config)
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoBackend, CairoDrawStats};
