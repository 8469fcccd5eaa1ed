use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("drawing surface `{id}` is not present on the page")]
    MissingSurface { id: String },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("charting backend failure: {0}")]
    Backend(String),

    #[error("dashboard charts were already rendered for this page load")]
    AlreadyRendered,
}
