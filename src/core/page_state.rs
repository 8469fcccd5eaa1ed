use serde::{Deserialize, Serialize};

use crate::core::ChartSeries;
use crate::error::{DashboardError, DashboardResult};

/// Values the admin dashboard page hands to the chart renderer.
///
/// Field names match the keys the host template emits, so the payload can be
/// deserialized straight from the page's JSON blob. Everything is computed
/// upstream; this type only carries it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardPageState {
    pub months: Vec<String>,
    pub activity_data: Vec<f64>,
    pub course_names: Vec<String>,
    pub course_counts: Vec<f64>,
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_courses: u64,
    #[serde(default)]
    pub active_students: u64,
    #[serde(default)]
    pub completed_courses: u64,
}

impl DashboardPageState {
    #[must_use]
    pub fn new(user_activity: ChartSeries, course_counts: ChartSeries) -> Self {
        Self {
            months: user_activity.labels,
            activity_data: user_activity.values,
            course_names: course_counts.labels,
            course_counts: course_counts.values,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_summary(
        mut self,
        total_users: u64,
        total_courses: u64,
        active_students: u64,
        completed_courses: u64,
    ) -> Self {
        self.total_users = total_users;
        self.total_courses = total_courses;
        self.active_students = active_students;
        self.completed_courses = completed_courses;
        self
    }

    #[must_use]
    pub fn user_activity_series(&self) -> ChartSeries {
        ChartSeries::new(self.months.iter().cloned(), self.activity_data.clone())
    }

    #[must_use]
    pub fn course_counts_series(&self) -> ChartSeries {
        ChartSeries::new(self.course_names.iter().cloned(), self.course_counts.clone())
    }

    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            DashboardError::InvalidData(format!("failed to parse dashboard page state: {e}"))
        })
    }
}
