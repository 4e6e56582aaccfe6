//! Animation statistics command

use anyhow::{Context, Result};
use heartbeat_particles::{FrameStats, HeartAnimation};
use serde::Serialize;

#[derive(Serialize)]
struct InfoReport<'a> {
    seed: Option<u64>,
    canvas: [u32; 2],
    outline_points: usize,
    edge_diffusion_points: usize,
    center_diffusion_points: usize,
    frames: &'a [FrameStats],
}

pub fn run(config_path: Option<&str>, seed: Option<u64>, format: &str) -> Result<()> {
    let config = super::load_config(config_path, seed)?;
    let animation = HeartAnimation::new(config).context("Failed to build animation")?;

    let config = animation.config();
    let shape = animation.shape();
    let report = InfoReport {
        seed: config.seed,
        canvas: [config.canvas.width, config.canvas.height],
        outline_points: shape.outline().len(),
        edge_diffusion_points: shape.edge_diffusion().len(),
        center_diffusion_points: shape.center_diffusion().len(),
        frames: animation.stats(),
    };

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
            println!("{}", json);
        }
        _ => print_text(&report),
    }

    Ok(())
}

fn print_text(report: &InfoReport) {
    match report.seed {
        Some(seed) => println!("Seed: {}", seed),
        None => println!("Seed: (random)"),
    }
    println!("Canvas: {}x{}", report.canvas[0], report.canvas[1]);
    println!("Outline points: {}", report.outline_points);
    println!("Edge diffusion points: {} (not drawn)", report.edge_diffusion_points);
    println!("Center diffusion points: {}", report.center_diffusion_points);
    println!();
    println!(
        "{:>5}  {:>8}  {:>6}  {:>10}  {:>9}  {:>7}",
        "frame", "ratio", "radius", "halo(req)", "halo", "total"
    );
    for s in report.frames {
        println!(
            "{:>5}  {:>8.3}  {:>6}  {:>10}  {:>9}  {:>7}",
            s.frame, s.ratio, s.halo_radius, s.halo_requested, s.halo_kept, s.total_points
        );
    }
}
