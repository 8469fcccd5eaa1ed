use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

use super::ChartConfig;

pub const DASHBOARD_CHARTS_JSON_SCHEMA_V1: u32 = 1;

/// One chart bound to the surface it was drawn into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedChart {
    pub surface_id: String,
    pub width: u32,
    pub height: u32,
    pub config: ChartConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardChartsJsonContractV1 {
    pub schema_version: u32,
    pub charts: Vec<RenderedChart>,
}

impl DashboardChartsJsonContractV1 {
    #[must_use]
    pub fn new(charts: Vec<RenderedChart>) -> Self {
        Self {
            schema_version: DASHBOARD_CHARTS_JSON_SCHEMA_V1,
            charts,
        }
    }

    pub fn to_json_contract_v1_pretty(&self) -> DashboardResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::InvalidData(format!("failed to serialize charts contract v1: {e}"))
        })
    }

    /// Accepts either a bare chart list or the versioned envelope.
    pub fn from_json_compat_str(input: &str) -> DashboardResult<Self> {
        if let Ok(charts) = serde_json::from_str::<Vec<RenderedChart>>(input) {
            return Ok(Self::new(charts));
        }
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            DashboardError::InvalidData(format!("failed to parse charts json payload: {e}"))
        })?;
        if payload.schema_version != DASHBOARD_CHARTS_JSON_SCHEMA_V1 {
            return Err(DashboardError::InvalidData(format!(
                "unsupported charts schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }
}

impl ChartConfig {
    pub fn to_json_pretty(&self) -> DashboardResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| DashboardError::InvalidData(format!("failed to parse chart config: {e}")))
    }
}
