use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::error::{DashboardError, DashboardResult};

pub const USER_ACTIVITY_SURFACE_ID: &str = "userActivityChart";
pub const POPULAR_COURSES_SURFACE_ID: &str = "popularCoursesChart";

/// Literal styling and surface wiring for the two dashboard charts.
///
/// Serializable so a host can override individual fields from JSON; every
/// field falls back to the stock dashboard look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStyle {
    #[serde(default = "default_user_activity_surface_id")]
    pub user_activity_surface_id: String,
    #[serde(default = "default_popular_courses_surface_id")]
    pub popular_courses_surface_id: String,
    #[serde(default = "default_user_activity_label")]
    pub user_activity_label: String,
    #[serde(default = "default_popular_courses_label")]
    pub popular_courses_label: String,
    #[serde(default = "default_activity_accent")]
    pub activity_accent: Color,
    #[serde(default = "default_activity_fill")]
    pub activity_fill: Color,
    #[serde(default = "default_activity_tension")]
    pub activity_tension: f64,
    #[serde(default = "default_course_bar_fill")]
    pub course_bar_fill: Color,
}

impl Default for DashboardStyle {
    fn default() -> Self {
        Self {
            user_activity_surface_id: default_user_activity_surface_id(),
            popular_courses_surface_id: default_popular_courses_surface_id(),
            user_activity_label: default_user_activity_label(),
            popular_courses_label: default_popular_courses_label(),
            activity_accent: default_activity_accent(),
            activity_fill: default_activity_fill(),
            activity_tension: default_activity_tension(),
            course_bar_fill: default_course_bar_fill(),
        }
    }
}

impl DashboardStyle {
    pub fn validate(&self) -> DashboardResult<()> {
        for (name, id) in [
            ("user activity", &self.user_activity_surface_id),
            ("popular courses", &self.popular_courses_surface_id),
        ] {
            if id.trim().is_empty() {
                return Err(DashboardError::InvalidData(format!(
                    "{name} surface id must not be empty"
                )));
            }
        }
        if self.user_activity_surface_id == self.popular_courses_surface_id {
            return Err(DashboardError::InvalidData(format!(
                "both charts target the same surface `{}`",
                self.user_activity_surface_id
            )));
        }

        self.activity_accent.validate()?;
        self.activity_fill.validate()?;
        self.course_bar_fill.validate()?;

        if !self.activity_tension.is_finite() || !(0.0..=1.0).contains(&self.activity_tension) {
            return Err(DashboardError::InvalidData(
                "activity tension must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }

    /// Parses a (possibly partial) style override and validates it.
    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        let style: Self = serde_json::from_str(input).map_err(|e| {
            DashboardError::InvalidData(format!("failed to parse dashboard style: {e}"))
        })?;
        style.validate()?;
        Ok(style)
    }
}

fn default_user_activity_surface_id() -> String {
    USER_ACTIVITY_SURFACE_ID.to_owned()
}

fn default_popular_courses_surface_id() -> String {
    POPULAR_COURSES_SURFACE_ID.to_owned()
}

fn default_user_activity_label() -> String {
    "Активные пользователи".to_owned()
}

fn default_popular_courses_label() -> String {
    "Записей".to_owned()
}

fn default_activity_accent() -> Color {
    Color::rgba8(0x8b, 0x5c, 0xf6, 1.0)
}

fn default_activity_fill() -> Color {
    Color::rgba8(139, 92, 246, 0.3)
}

fn default_activity_tension() -> f64 {
    0.4
}

fn default_course_bar_fill() -> Color {
    Color::rgba8(0x7c, 0x3a, 0xed, 1.0)
}

#[cfg(test)]
mod tests {
    use super::DashboardStyle;
    use crate::core::Color;

    #[test]
    fn default_style_is_valid_and_uses_stock_colors() {
        let style = DashboardStyle::default();
        style.validate().expect("default style");
        assert_eq!(style.activity_accent.to_css(), "#8b5cf6");
        assert_eq!(style.activity_fill.to_css(), "rgba(139,92,246,0.3)");
        assert_eq!(style.course_bar_fill.to_css(), "#7c3aed");
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let style = DashboardStyle::from_json_str(r##"{"course_bar_fill":"#000000"}"##)
            .expect("override");
        assert_eq!(style.course_bar_fill.to_css(), "#000000");
        assert_eq!(style.user_activity_surface_id, "userActivityChart");
        assert_eq!(style.activity_tension, 0.4);
    }

    #[test]
    fn shared_surface_id_is_rejected() {
        let err = DashboardStyle::from_json_str(
            r#"{"user_activity_surface_id":"x","popular_courses_surface_id":"x"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn blank_surface_ids_are_rejected() {
        for id in ["", "   "] {
            let style = DashboardStyle {
                popular_courses_surface_id: id.to_owned(),
                ..DashboardStyle::default()
            };
            assert!(style.validate().is_err(), "{id:?} should be rejected");
        }
    }

    #[test]
    fn out_of_range_colors_are_rejected() {
        let style = DashboardStyle {
            activity_fill: Color::rgba(0.5, 0.5, 0.5, 1.5),
            ..DashboardStyle::default()
        };
        assert!(style.validate().is_err());

        let parsed = DashboardStyle::from_json_str(r#"{"course_bar_fill":"rgb(256,0,0)"}"#);
        assert!(parsed.is_err());
    }
}
