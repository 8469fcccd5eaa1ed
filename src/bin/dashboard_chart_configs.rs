use dashboard_charts::api::{ChartOutcome, DashboardRenderer, DashboardStyle};
use dashboard_charts::core::{DashboardPageState, Viewport};
use dashboard_charts::render::JsonContractBackend;
use dashboard_charts::surface::{Surface, SurfaceRegistry};
use dashboard_charts::telemetry::init_default_tracing;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: dashboard_chart_configs --input <page_state.json> [--output <path>] [--style <style.json>] [--width <px>] [--height <px>] [--omit-surface <id>]...";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    style: Option<PathBuf>,
    viewport: Viewport,
    omitted_surfaces: Vec<String>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let page_state = DashboardPageState::from_json_str(&raw).map_err(|err| err.to_string())?;

    let style = match &args.style {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            DashboardStyle::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => DashboardStyle::default(),
    };

    let surfaces: SurfaceRegistry = [
        style.user_activity_surface_id.clone(),
        style.popular_courses_surface_id.clone(),
    ]
    .into_iter()
    .filter(|id| !args.omitted_surfaces.contains(id))
    .map(|id| Surface::new(id, args.viewport))
    .collect();

    let mut renderer = DashboardRenderer::with_style(JsonContractBackend::new(), style)
        .map_err(|err| err.to_string())?;
    let report = renderer
        .on_content_loaded(&surfaces, &page_state)
        .map_err(|err| err.to_string())?;

    for outcome in [&report.user_activity, &report.popular_courses] {
        match outcome {
            ChartOutcome::Drawn { .. } => {}
            ChartOutcome::SkippedMissingSurface { surface_id } => {
                eprintln!("skipped `{surface_id}`: surface not present");
            }
            ChartOutcome::Failed { surface_id, error } => {
                eprintln!("failed `{surface_id}`: {error}");
            }
        }
    }

    let json = renderer
        .into_backend()
        .into_contract()
        .to_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;

    match &args.output {
        Some(path) => fs::write(path, format!("{json}\n"))
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut style = None::<PathBuf>;
    let mut viewport = Viewport::default();
    let mut omitted_surfaces = Vec::new();

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--style" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --style".to_owned())?;
                style = Some(PathBuf::from(value));
            }
            "--width" => viewport.width = parse_px(args.next(), "--width")?,
            "--height" => viewport.height = parse_px(args.next(), "--height")?,
            "--omit-surface" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --omit-surface".to_owned())?;
                omitted_surfaces.push(value);
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| format!("missing --input\n{USAGE}"))?,
        output,
        style,
        viewport,
        omitted_surfaces,
    })
}

fn parse_px(value: Option<String>, flag: &str) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse::<u32>()
        .map_err(|err| format!("invalid value for {flag}: {err}"))
}
