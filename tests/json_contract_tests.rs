use dashboard_charts::api::{
    ChartConfig, DashboardChartsJsonContractV1, DashboardRenderer, RenderedChart,
};
use dashboard_charts::core::{ChartSeries, DashboardPageState, Viewport};
use dashboard_charts::render::JsonContractBackend;
use dashboard_charts::surface::{Surface, SurfaceRegistry};
use serde_json::{Value, json};

fn rendered_contract() -> DashboardChartsJsonContractV1 {
    let surfaces = SurfaceRegistry::new()
        .with_surface(Surface::new("userActivityChart", Viewport::new(640, 320)))
        .with_surface(Surface::new("popularCoursesChart", Viewport::new(640, 320)));
    let state = DashboardPageState::new(
        ChartSeries::new(["Jan", "Feb", "Mar"], vec![10.0, 25.0, 17.0]),
        ChartSeries::new(["Math", "Physics"], vec![40.0, 12.0]),
    );

    let mut renderer = DashboardRenderer::new(JsonContractBackend::new());
    renderer
        .on_content_loaded(&surfaces, &state)
        .expect("render");
    renderer.into_backend().into_contract()
}

#[test]
fn line_config_serializes_in_browser_chart_shape() {
    let contract = rendered_contract();
    let line = serde_json::to_value(&contract.charts[0].config).expect("to value");

    assert_eq!(
        line,
        json!({
            "type": "line",
            "data": {
                "labels": ["Jan", "Feb", "Mar"],
                "datasets": [{
                    "label": "Активные пользователи",
                    "data": [10.0, 25.0, 17.0],
                    "borderColor": "#8b5cf6",
                    "backgroundColor": "rgba(139,92,246,0.3)",
                    "fill": true,
                    "tension": 0.4
                }]
            },
            "options": {
                "plugins": { "legend": { "display": false } },
                "scales": { "y": { "beginAtZero": true } }
            }
        })
    );
}

#[test]
fn bar_config_omits_scale_overrides() {
    let contract = rendered_contract();
    let bar = serde_json::to_value(&contract.charts[1].config).expect("to value");

    assert_eq!(bar["type"], "bar");
    assert_eq!(bar["data"]["datasets"][0]["label"], "Записей");
    assert_eq!(bar["data"]["datasets"][0]["backgroundColor"], "#7c3aed");
    assert_eq!(bar["options"]["plugins"]["legend"]["display"], false);
    assert_eq!(bar["options"].get("scales"), None);
    assert_eq!(bar["data"]["datasets"][0].get("borderColor"), None);
}

#[test]
fn contract_keeps_surface_binding_and_version() {
    let contract = rendered_contract();
    let raw = contract.to_json_contract_v1_pretty().expect("serialize");
    let value: Value = serde_json::from_str(&raw).expect("json");

    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["charts"][0]["surface_id"], "userActivityChart");
    assert_eq!(value["charts"][1]["surface_id"], "popularCoursesChart");
    assert_eq!(value["charts"][1]["width"], 640);

    let parsed = DashboardChartsJsonContractV1::from_json_compat_str(&raw).expect("parse");
    assert_eq!(parsed, contract);
}

#[test]
fn compat_parser_accepts_bare_chart_list() {
    let contract = rendered_contract();
    let raw = serde_json::to_string(&contract.charts).expect("serialize list");

    let parsed = DashboardChartsJsonContractV1::from_json_compat_str(&raw).expect("parse");
    let charts: Vec<RenderedChart> = parsed.charts;
    assert_eq!(charts, contract.charts);
}

#[test]
fn compat_parser_rejects_unknown_schema_version() {
    let raw = r#"{"schema_version": 7, "charts": []}"#;
    assert!(DashboardChartsJsonContractV1::from_json_compat_str(raw).is_err());
}

#[test]
fn chart_config_parses_browser_json() {
    let raw = r##"{
        "type": "bar",
        "data": {
            "labels": ["Python"],
            "datasets": [{ "label": "Записей", "data": [64], "backgroundColor": "#7c3aed" }]
        },
        "options": { "plugins": { "legend": { "display": false } } }
    }"##;

    let config = ChartConfig::from_json_str(raw).expect("parse");
    assert_eq!(config.point_count(), 1);
    assert_eq!(config.values(), &[64.0]);
    assert!(!config.y_begins_at_zero());
    config.validate().expect("valid");
}

#[test]
fn json_backend_rejects_mismatched_series() {
    let surfaces = SurfaceRegistry::new()
        .with_surface(Surface::new("userActivityChart", Viewport::new(100, 100)))
        .with_surface(Surface::new("popularCoursesChart", Viewport::new(100, 100)));
    let state = DashboardPageState::new(
        ChartSeries::new(["Jan"], vec![1.0, 2.0]),
        ChartSeries::new(["Math"], vec![3.0]),
    );

    let mut renderer = DashboardRenderer::new(JsonContractBackend::new());
    let report = renderer.on_content_loaded(&surfaces, &state).expect("render");

    assert!(!report.user_activity.is_drawn());
    assert!(report.popular_courses.is_drawn());
    assert_eq!(renderer.backend().charts().len(), 1);
}

#[test]
fn chart_config_without_plugins_keeps_default_legend() {
    let raw = r#"{
        "type": "line",
        "data": {
            "labels": ["Jan", "Feb"],
            "datasets": [{ "label": "users", "data": [3, 5] }]
        },
        "options": { "scales": { "y": { "beginAtZero": true } } }
    }"#;

    let config = ChartConfig::from_json_str(raw).expect("parse");
    assert!(config.legend_displayed());
    assert!(config.y_begins_at_zero());

    let empty_legend = r#"{
        "type": "bar",
        "data": { "labels": [], "datasets": [{ "label": "x", "data": [] }] },
        "options": { "plugins": { "legend": {} } }
    }"#;
    let config = ChartConfig::from_json_str(empty_legend).expect("parse");
    assert!(config.legend_displayed());
}
