mod chart_config;
mod dashboard_renderer;
mod dashboard_style;
mod json_contract;

pub use chart_config::{
    AxisOptions, ChartConfig, ChartData, ChartGeometry, ChartKind, ChartOptions, Dataset,
    LegendOptions, PluginOptions, ScaleOptions,
};
pub use dashboard_renderer::{ChartOutcome, DashboardRenderer, DashboardReport};
pub use dashboard_style::{DashboardStyle, POPULAR_COURSES_SURFACE_ID, USER_ACTIVITY_SURFACE_ID};
pub use json_contract::{DASHBOARD_CHARTS_JSON_SCHEMA_V1, DashboardChartsJsonContractV1, RenderedChart};
