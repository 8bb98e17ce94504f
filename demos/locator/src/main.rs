//! locator: generate a random city, find the nearest hospital, print the
//! route and the distance to every hospital.
//!
//! ```text
//! locator --complexity complex --hospitals 5 --seed 42 --output output/locator
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::{Level, info, warn};

use hl_core::config::{DEFAULT_HOSPITAL_COUNT, HOSPITAL_COUNT_RANGE};
use hl_core::{MapComplexity, MapSettings};
use hl_output::{
    CsvWriter, ExportObserver, RouteStepKind, display_label, format_km, hospital_rows,
    route_steps,
};
use hl_session::{LocatorSession, NoopObserver, SessionBuilder, SessionObserver};
use hl_spatial::{CityGraph, DijkstraRouter, MapNode, NearestHospital, Road};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map size: simple, medium or complex.
    #[arg(short, long, default_value_t = MapComplexity::default())]
    complexity: MapComplexity,

    /// Number of hospitals to place.
    #[arg(long, default_value_t = DEFAULT_HOSPITAL_COUNT)]
    hospitals: usize,

    /// Seed for reproducible maps (random when omitted).
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory to write nodes.csv, roads.csv, route.csv and
    /// hospital_distances.csv into.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the map and result as JSON.
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

// ── JSON view ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct MapJson<'a> {
    complexity: MapComplexity,
    nodes:      Vec<MapNode<'a>>,
    roads:      Vec<Road>,
    nearest:    Option<&'a NearestHospital>,
}

/// Render a map and its routing result as one pretty-printed JSON document.
fn map_json(
    graph:      &CityGraph,
    complexity: MapComplexity,
    nearest:    Option<&NearestHospital>,
) -> serde_json::Result<String> {
    let view = MapJson {
        complexity,
        nodes: graph.nodes().collect(),
        roads: graph.roads().collect(),
        nearest,
    };
    serde_json::to_string_pretty(&view)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    // Logs go to stderr so stdout carries only the report or the JSON document.
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    if !HOSPITAL_COUNT_RANGE.contains(&args.hospitals) {
        warn!(
            hospitals = args.hospitals,
            "hospital count outside the usual {}..={} range",
            HOSPITAL_COUNT_RANGE.start(),
            HOSPITAL_COUNT_RANGE.end()
        );
    }

    let settings = MapSettings::new(args.complexity, args.hospitals);
    let mut builder = SessionBuilder::new(DijkstraRouter).settings(settings);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let mut session = builder.build()?;

    match &args.output {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let mut obs = ExportObserver::new(CsvWriter::new(dir)?);
            run(&mut session, settings, &mut obs)?;
            obs.finish();
            if let Some(e) = obs.take_error() {
                eprintln!("output error: {e}");
            } else {
                info!(dir = %dir.display(), "csv export written");
            }
        }
        None => run(&mut session, settings, &mut NoopObserver)?,
    }

    let Some(graph) = session.graph() else {
        return Ok(());
    };
    if args.json {
        println!("{}", map_json(graph, settings.complexity, session.result())?);
    } else {
        print_map(graph, settings);
        print_route(graph, session.result());
        print_hospitals(graph, session.result());
    }

    Ok(())
}

/// Generate a map and route it.
fn run<O: SessionObserver>(
    session:  &mut LocatorSession<DijkstraRouter>,
    settings: MapSettings,
    obs:      &mut O,
) -> Result<()> {
    session.generate(settings, obs)?;
    session.route(obs)?;
    Ok(())
}

fn print_map(graph: &CityGraph, settings: MapSettings) {
    println!("=== locator: nearest hospital ===");
    println!(
        "Map ({}): {} locations, {} roads, {} hospitals",
        settings.complexity,
        graph.node_count(),
        graph.road_count(),
        graph.hospitals().len(),
    );
    println!();

    println!("{:<4} {:<20} {:<10} {:>6}", "Id", "Location", "Role", "Roads");
    println!("{}", "-".repeat(43));
    for node in graph.nodes() {
        println!(
            "{:<4} {:<20} {:<10} {:>6}",
            node.id.0,
            display_label(node.name),
            node.role.as_str(),
            graph.degree(node.id),
        );
    }
    println!();
}

fn print_route(graph: &CityGraph, result: Option<&NearestHospital>) {
    let Some(result) = result else {
        println!("No hospital can be reached from {}.", hl_core::config::PERSON_NAME);
        println!();
        return;
    };

    println!("Nearest hospital: {} ({})", result.name, format_km(result.distance_km()));
    for step in route_steps(graph, &result.route) {
        let label = match step.kind {
            RouteStepKind::Start       => "Start",
            RouteStepKind::Via         => "Via",
            RouteStepKind::Destination => "Destination",
        };
        println!("  {:>2}. {:<12} {}", step.step + 1, label, step.name);
    }
    println!();
}

fn print_hospitals(graph: &CityGraph, result: Option<&NearestHospital>) {
    println!("{:<26} {:>12}", "Hospital", "Distance");
    println!("{}", "-".repeat(48));
    for row in hospital_rows(graph, result) {
        let distance = row.distance_km.map(format_km).unwrap_or_else(|| "unreachable".into());
        let marker = if row.nearest { "  NEAREST" } else { "" };
        println!("{:<26} {:>12}{marker}", row.name, distance);
    }
}

#[cfg(test)]
mod tests;
