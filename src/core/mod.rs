pub mod color;
pub mod page_state;
pub mod projection;
pub mod scale;
pub mod series;
pub mod types;

pub use color::Color;
pub use page_state::DashboardPageState;
pub use projection::{
    BarRect, BezierSegment, ChartVertex, LineChartGeometry, LineProjectionOptions,
    project_bar_chart, project_line_chart,
};
pub use scale::{CategoryScale, ValueScale};
pub use series::ChartSeries;
pub use types::Viewport;
