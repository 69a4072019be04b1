use anyhow::{bail, Context, Result};
use log::{info, warn};
use precinctmap::{BoundarySource, CsvFile, Dashboard, GeoJsonFile, GeoJsonUrl, MapType};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::RenderArgs) -> Result<()> {
    let config = super::load_config(&args.config)?;
    let out_path = args.output.clone().unwrap_or("./map.svg".into());

    let results = CsvFile(args.results.clone());
    let boundaries: Option<Box<dyn BoundarySource>> = match (&args.boundaries, &args.boundaries_url) {
        (Some(path), _) => Some(Box::new(GeoJsonFile(path.clone()))),
        (None, Some(url)) => Some(Box::new(GeoJsonUrl(url.clone()))),
        (None, None) => None,
    };

    let mut dashboard = Dashboard::load(&results, boundaries.as_deref(), config);
    let outcome = dashboard.outcome();
    if let Some(err) = &outcome.results_fallback {
        warn!("[render] {err}; rendering sample data instead");
    }
    if let Some(err) = &outcome.boundary_error {
        warn!("[render] {err}; rendering grid layout");
    }
    for warning in &outcome.ingest.warnings {
        info!("[render] {warning}");
    }

    if let Some(seat) = &args.race {
        if !dashboard.select_race(seat) {
            let seats: Vec<_> = dashboard.election().seats().collect();
            bail!("[render] no race {seat:?}; available: {}", seats.join(", "));
        }
    }
    if args.grid { dashboard.set_map_type(MapType::Grid); }

    let controller = dashboard.controller_mut();
    controller.set_mode(args.mode);
    controller.set_zoom(args.zoom);
    controller.set_pan(args.pan_x, args.pan_y);
    if args.select.is_some() && !dashboard.select_precinct(args.select) {
        warn!("[render] precinct {:?} has no result in this race, nothing selected", args.select);
    }

    let (scene, report) = dashboard.scene().context("[render] cannot draw map")?;
    if let Some(report) = &report {
        if !report.missing_geometry.is_empty() {
            info!("[render] precincts without boundaries: {:?}", report.missing_geometry);
        }
    }

    scene.to_svg(&out_path)?;
    if cli.verbose > 0 {
        eprintln!("[render] {} ({:?}, {} shapes) -> {}",
            dashboard.race().map_or("", |r| r.seat.as_str()), scene.kind, scene.shapes.len(), out_path.display());
    }

    Ok(())
}
