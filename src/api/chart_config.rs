use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    BarRect, Color, LineChartGeometry, LineProjectionOptions, Viewport, project_bar_chart,
    project_line_chart,
};
use crate::error::{DashboardError, DashboardResult};

/// Chart type understood by the charting backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// One dataset drawn by a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            border_color: None,
            background_color: None,
            fill: None,
            tension: None,
        }
    }

    #[must_use]
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = Some(tension);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: SmallVec<[Dataset; 1]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendOptions {
    #[serde(default = "default_legend_display")]
    pub display: bool,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            display: default_legend_display(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PluginOptions {
    #[serde(default)]
    pub legend: LegendOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleOptions {
    pub y: AxisOptions,
}

/// Chart-wide options. Omitted keys fall back to the library defaults, which
/// show the legend and leave the value axis unforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default)]
    pub plugins: PluginOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scales: Option<ScaleOptions>,
}

fn default_legend_display() -> bool {
    true
}

/// Complete description handed to a charting backend.
///
/// The JSON shape mirrors what browser charting libraries accept
/// (`type`, `data.labels`, `data.datasets`, `options`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    #[serde(default)]
    pub options: ChartOptions,
}

/// Pixel geometry produced from a configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartGeometry {
    Line(LineChartGeometry),
    Bar(Vec<BarRect>),
}

impl ChartConfig {
    #[must_use]
    pub fn new(kind: ChartKind, labels: Vec<String>, dataset: Dataset) -> Self {
        let mut datasets = SmallVec::new();
        datasets.push(dataset);
        Self {
            kind,
            data: ChartData { labels, datasets },
            options: ChartOptions::default(),
        }
    }

    #[must_use]
    pub fn with_legend(mut self, display: bool) -> Self {
        self.options.plugins.legend.display = display;
        self
    }

    #[must_use]
    pub fn with_y_begin_at_zero(mut self, begin_at_zero: bool) -> Self {
        self.options.scales = Some(ScaleOptions {
            y: AxisOptions { begin_at_zero },
        });
        self
    }

    #[must_use]
    pub fn primary_dataset(&self) -> Option<&Dataset> {
        self.data.datasets.first()
    }

    /// Number of data points in the primary dataset.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.primary_dataset().map_or(0, |dataset| dataset.data.len())
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        self.primary_dataset()
            .map(|dataset| dataset.data.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn legend_displayed(&self) -> bool {
        self.options.plugins.legend.display
    }

    #[must_use]
    pub fn y_begins_at_zero(&self) -> bool {
        self.options.scales.is_some_and(|scales| scales.y.begin_at_zero)
    }

    /// Checks what a backend needs before drawing.
    ///
    /// The dashboard renderer never calls this; data problems are the
    /// backend's to report.
    pub fn validate(&self) -> DashboardResult<()> {
        if self.data.datasets.is_empty() {
            return Err(DashboardError::InvalidData(
                "chart config must carry at least one dataset".to_owned(),
            ));
        }

        for dataset in &self.data.datasets {
            if dataset.data.len() != self.data.labels.len() {
                return Err(DashboardError::InvalidData(format!(
                    "dataset `{}` has {} values for {} labels",
                    dataset.label,
                    dataset.data.len(),
                    self.data.labels.len()
                )));
            }
            if dataset.data.iter().any(|value| !value.is_finite()) {
                return Err(DashboardError::InvalidData(format!(
                    "dataset `{}` contains non-finite values",
                    dataset.label
                )));
            }
            for color in [dataset.border_color, dataset.background_color]
                .into_iter()
                .flatten()
            {
                color.validate()?;
            }
            if let Some(tension) = dataset.tension {
                if !tension.is_finite() || !(0.0..=1.0).contains(&tension) {
                    return Err(DashboardError::InvalidData(format!(
                        "dataset `{}` tension must be in [0, 1]",
                        dataset.label
                    )));
                }
            }
        }
        Ok(())
    }

    /// Validates and projects the primary dataset onto `viewport`.
    ///
    /// Bar charts always grow from zero, matching the bar defaults of browser
    /// charting libraries.
    pub fn project(&self, viewport: Viewport) -> DashboardResult<ChartGeometry> {
        self.validate()?;
        let dataset = self.primary_dataset().ok_or_else(|| {
            DashboardError::InvalidData("chart config has no primary dataset".to_owned())
        })?;

        match self.kind {
            ChartKind::Line => {
                let options = LineProjectionOptions {
                    tension: dataset.tension.unwrap_or(0.0),
                    fill: dataset.fill.unwrap_or(false),
                    begin_at_zero: self.y_begins_at_zero(),
                };
                project_line_chart(&dataset.data, options, viewport).map(ChartGeometry::Line)
            }
            ChartKind::Bar => project_bar_chart(&dataset.data, true, viewport).map(ChartGeometry::Bar),
        }
    }
}
