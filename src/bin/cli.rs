// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyshape CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polyshape::cli::{summarize_scene, Reporter};
use polyshape::io::{self, StepOptions};
use polyshape::{ExportConfig, ExportFormat};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::Level;

#[derive(Parser)]
#[command(name = "polyshape")]
#[command(about = "Polyshape modeling kernel - tessellate scenes and export STEP or STL", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Tessellate a scene description and export it
    Export {
        /// Input scene description (.json)
        input: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Output format; guessed from the output extension when omitted
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        /// Product name written into the document
        #[arg(long)]
        name: Option<String>,

        /// Segments for curved primitives
        #[arg(long)]
        segments: Option<u32>,

        /// Tessellate items in parallel
        #[arg(long)]
        parallel: bool,

        /// Config file (defaults to ./polyshape.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print per-item kind, mesh counts and bounding box
    Describe {
        /// Input scene description (.json)
        input: PathBuf,

        /// Segments for curved primitives
        #[arg(long)]
        segments: Option<u32>,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli.command) {
        Reporter::report_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Export {
            input,
            output,
            format,
            name,
            segments,
            parallel,
            config,
        } => {
            let mut config = match config {
                Some(path) => ExportConfig::from_file(path)?.with_env_overrides()?,
                None => ExportConfig::load()?,
            };
            if let Some(name) = name {
                config.name = name;
            }
            if let Some(segments) = segments {
                config.segments = segments;
            }
            if let Some(format) = format.or_else(|| ExportFormat::from_path(&output)) {
                config.format = format;
            }
            config.parallel |= parallel;

            export_command(&input, &output, &config)
        }
        Commands::Describe { input, segments } => {
            let segments = match segments {
                Some(segments) => segments,
                None => ExportConfig::load()?.segments,
            };
            let scene = io::import_scene_file(&input)?;
            Reporter::report_scene(&input, &summarize_scene(&scene, segments));
            Ok(())
        }
        Commands::Version => {
            println!("Polyshape v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn export_command(input: &Path, output: &Path, config: &ExportConfig) -> Result<()> {
    tracing::debug!(?config, input = %input.display(), "exporting scene");

    let start = Instant::now();
    let scene = io::import_scene_file(input)?;
    let meshes = if config.parallel {
        scene.to_meshes_parallel_with(config.segments)
    } else {
        scene.to_meshes_with(config.segments)
    }
    .with_context(|| format!("Cannot tessellate {}", input.display()))?;

    match config.format {
        ExportFormat::Step => {
            io::export_step(&meshes, output, &StepOptions::new(config.name.clone()))?
        }
        ExportFormat::Stl => io::export_stl(&meshes, output)?,
    }

    Reporter::report_export(output, meshes.len(), config.format.extension(), start.elapsed());
    Ok(())
}
