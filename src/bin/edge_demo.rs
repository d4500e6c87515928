use buffer_transforms::config::edge::load_config;
use buffer_transforms::diagnostics::TimingBreakdown;
use buffer_transforms::image::io::{load_bgr_array, save_array_image, write_json_file};
use buffer_transforms::ops::{self, ArrayDescription};
use serde::Serialize;
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let input = load_bgr_array(&config.input)?;
    let view = input.as_view();
    ops::describe_array(&view);

    let mut timing = TimingBreakdown::default();
    if let Some(path) = &config.output.inverted_image {
        let start = Instant::now();
        let inverted = ops::invert_channels(&view).map_err(|e| e.to_string())?;
        timing.push("invert", start.elapsed().as_secs_f64() * 1000.0);
        save_array_image(&inverted.as_view(), path)?;
        println!("Saved inverted image to {}", path.display());
    }

    let detection = ops::detect_edges_with(&view, &config.edge).map_err(|e| e.to_string())?;
    for stage in &detection.timing.stages {
        timing.push(stage.label.clone(), stage.elapsed_ms);
    }
    save_array_image(&detection.edges.as_view(), &config.output.edges_image)?;

    let edge_pixels = detection
        .edges
        .as_bytes()
        .iter()
        .filter(|&&v| v == 255)
        .count();
    let (low_threshold, high_threshold) = config.edge.canny.ordered_thresholds();
    let report = EdgeDemoReport {
        input: ArrayDescription::of(&view),
        output: ArrayDescription::of(&detection.edges.as_view()),
        low_threshold,
        high_threshold,
        strong_count: detection.strong_count,
        weak_count: detection.weak_count,
        edge_pixels,
        timing,
    };
    write_json_file(&config.output.report_json, &report)?;

    println!(
        "Saved {} edge pixels to {}",
        edge_pixels,
        config.output.edges_image.display()
    );
    println!("Report written to {}", config.output.report_json.display());

    Ok(())
}

fn usage() -> String {
    "Usage: edge_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EdgeDemoReport {
    input: ArrayDescription,
    output: ArrayDescription,
    low_threshold: f32,
    high_threshold: f32,
    strong_count: usize,
    weak_count: usize,
    edge_pixels: usize,
    timing: TimingBreakdown,
}
