use std::io::Write;

use cairo::{Context, Format, ImageSurface};
use indexmap::IndexMap;

use crate::api::{ChartConfig, ChartGeometry};
use crate::core::{BarRect, Color, LineChartGeometry};
use crate::error::{DashboardError, DashboardResult};
use crate::render::ChartBackend;
use crate::surface::DrawingContext;

const LINE_WIDTH_PX: f64 = 3.0;
const FALLBACK_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoDrawStats {
    pub lines_drawn: usize,
    pub fills_drawn: usize,
    pub bars_drawn: usize,
}

/// Cairo raster backend.
///
/// Each drawing surface gets its own offscreen ARGB image, replaced on every
/// draw into that surface.
#[derive(Debug)]
pub struct CairoBackend {
    images: IndexMap<String, ImageSurface>,
    clear_color: Color,
    last_stats: CairoDrawStats,
}

impl Default for CairoBackend {
    fn default() -> Self {
        Self {
            images: IndexMap::new(),
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoDrawStats::default(),
        }
    }
}

impl CairoBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo"
    }

    pub fn set_clear_color(&mut self, color: Color) -> DashboardResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn image(&self, surface_id: &str) -> Option<&ImageSurface> {
        self.images.get(surface_id)
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoDrawStats {
        self.last_stats
    }

    /// Encodes the image drawn into `surface_id` as PNG.
    pub fn write_png<W: Write>(&self, surface_id: &str, writer: &mut W) -> DashboardResult<()> {
        let image = self
            .images
            .get(surface_id)
            .ok_or_else(|| DashboardError::MissingSurface {
                id: surface_id.to_owned(),
            })?;
        image
            .write_to_png(writer)
            .map_err(|err| DashboardError::Backend(format!("failed to encode png: {err}")))
    }

    fn draw(&mut self, context: &DrawingContext, config: &ChartConfig) -> DashboardResult<()> {
        let geometry = config.project(context.viewport())?;
        let viewport = context.viewport();
        let width = i32::try_from(viewport.width).map_err(|_| DashboardError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })?;
        let height =
            i32::try_from(viewport.height).map_err(|_| DashboardError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            })?;

        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let cr = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;

        apply_color(&cr, self.clear_color);
        cr.paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let dataset = config.primary_dataset();
        let border = dataset.and_then(|d| d.border_color).unwrap_or(FALLBACK_COLOR);
        let background = dataset
            .and_then(|d| d.background_color)
            .unwrap_or(FALLBACK_COLOR);

        let mut stats = CairoDrawStats::default();
        match geometry {
            ChartGeometry::Line(line) => {
                if !line.fill_polygon.is_empty() {
                    append_line_path(&cr, &line);
                    let last_x = line.points[line.points.len() - 1].x;
                    cr.line_to(last_x, line.baseline_y);
                    cr.line_to(line.points[0].x, line.baseline_y);
                    cr.close_path();
                    apply_color(&cr, background);
                    cr.fill()
                        .map_err(|err| map_backend_error("failed to fill area", err))?;
                    stats.fills_drawn += 1;
                }
                if !line.points.is_empty() {
                    append_line_path(&cr, &line);
                    apply_color(&cr, border);
                    cr.set_line_width(LINE_WIDTH_PX);
                    cr.stroke()
                        .map_err(|err| map_backend_error("failed to stroke line", err))?;
                    stats.lines_drawn += 1;
                }
            }
            ChartGeometry::Bar(bars) => {
                apply_color(&cr, background);
                for bar in bars {
                    append_bar_path(&cr, bar);
                    cr.fill()
                        .map_err(|err| map_backend_error("failed to fill bar", err))?;
                    stats.bars_drawn += 1;
                }
            }
        }

        drop(cr);
        image.flush();
        self.images.insert(context.surface_id().to_owned(), image);
        self.last_stats = stats;
        Ok(())
    }
}

impl ChartBackend for CairoBackend {
    fn draw_line(&mut self, context: &DrawingContext, config: &ChartConfig) -> DashboardResult<()> {
        self.draw(context, config)
    }

    fn draw_bar(&mut self, context: &DrawingContext, config: &ChartConfig) -> DashboardResult<()> {
        self.draw(context, config)
    }
}

fn append_line_path(cr: &Context, line: &LineChartGeometry) {
    let first = line.points[0];
    cr.move_to(first.x, first.y);
    if line.curve.is_empty() {
        for point in &line.points[1..] {
            cr.line_to(point.x, point.y);
        }
        return;
    }
    for segment in &line.curve {
        cr.curve_to(
            segment.control1.x,
            segment.control1.y,
            segment.control2.x,
            segment.control2.y,
            segment.end.x,
            segment.end.y,
        );
    }
}

fn append_bar_path(cr: &Context, bar: BarRect) {
    cr.rectangle(bar.x_left, bar.y_top, bar.width(), bar.height());
}

fn apply_color(cr: &Context, color: Color) {
    cr.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> DashboardError {
    DashboardError::Backend(format!("{prefix}: {err}"))
}
