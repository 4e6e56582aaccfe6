//! Heartbeat CLI - Build and export the pulsing heart animation

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{info, init, render};

#[derive(Parser)]
#[command(name = "heartbeat")]
#[command(about = "Procedural pulsing heart made of particles", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default heartbeat.toml
    Init {
        /// Config file to create
        #[arg(default_value = "heartbeat.toml")]
        path: String,
    },

    /// Build the animation and print point-set and per-frame statistics
    Info {
        /// Path to config file (defaults to ./heartbeat.toml if present)
        #[arg(long)]
        config: Option<String>,

        /// Random seed, overriding config and environment
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: String,
    },

    /// Render frames to PNG files or a looping GIF (headless)
    Render {
        /// Path to config file (defaults to ./heartbeat.toml if present)
        #[arg(long)]
        config: Option<String>,

        /// Random seed, overriding config and environment
        #[arg(long)]
        seed: Option<u64>,

        /// Output directory for PNG frames, or file path with --gif
        #[arg(short, long, default_value = "frames")]
        output: String,

        /// Number of frames to render (default: one full cycle)
        #[arg(long)]
        frames: Option<u64>,

        /// Encode a single animated GIF instead of PNG frames
        #[arg(long)]
        gif: bool,

        /// Pace rendering at the configured frame interval
        #[arg(long)]
        realtime: bool,
    },
}

fn parse_format(s: &str) -> Result<String, String> {
    match s {
        "text" | "json" => Ok(s.to_string()),
        _ => Err(format!("unknown format '{}'; valid values: text, json", s)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path } => init::run(&path),
        Commands::Info {
            config,
            seed,
            format,
        } => info::run(config.as_deref(), seed, &format),
        Commands::Render {
            config,
            seed,
            output,
            frames,
            gif,
            realtime,
        } => render::run(render::RenderArgs {
            config,
            seed,
            output,
            frames,
            gif,
            realtime,
        }),
    }
}
