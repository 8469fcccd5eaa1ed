//! dashboard-charts: admin dashboard chart rendering.
//!
//! Builds the user-activity line chart and the course-popularity bar chart
//! from explicit page state and hands them to a pluggable charting backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod surface;
pub mod telemetry;

pub use api::{DashboardRenderer, DashboardStyle};
pub use error::{DashboardError, DashboardResult};
