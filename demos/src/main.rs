// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Render schematic figures to PNG.

use clap::{Parser, ValueEnum};
use log::{error, info};
use schematic_core::geometry::{LatticeParams, ZigzagParams};
use schematic_core::loader::json;
use schematic_core::types::{Color, StrokeStyle, Vec2};
use schematic_core::{Figure, Item};
use std::f32::consts::FRAC_PI_2;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Demo {
    /// Connector from (0, 0) to (1, 0) with the inner half zig-zagged
    Zigzag,
    /// Quarter sector of a lattice heat exchanger
    Lattice,
}

#[derive(Debug, Parser)]
#[command(name = "render_figure", about = "Render a schematic figure description to PNG")]
struct Cli {
    /// Figure description (JSON)
    #[arg(short, long, conflicts_with = "demo", required_unless_present = "demo")]
    input: Option<PathBuf>,

    /// Render a built-in figure instead of a file
    #[arg(short, long, value_enum)]
    demo: Option<Demo>,

    /// Output PNG path
    #[arg(short, long)]
    output: PathBuf,

    /// Override the raster width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Override the raster height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Print the figure JSON before rendering
    #[arg(long)]
    dump: bool,
}

fn demo_figure(demo: Demo) -> Figure {
    match demo {
        Demo::Zigzag => {
            let mut fig = Figure::new(600, 200);
            fig.push(Item::zigzag(
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                ZigzagParams {
                    pitch: 0.01,
                    fraction_zigzag: 0.5,
                    amplitude: 0.05,
                },
            ));
            fig
        }
        Demo::Lattice => {
            let mut fig = Figure::new(500, 500);
            let section = LatticeParams::annulus(0.05, 0.09, 0.008, 0.01).sector(0.0, FRAC_PI_2);
            let housing = LatticeParams::annulus(0.09, 0.1, 0.01, 0.1).sector(0.0, FRAC_PI_2);
            fig.push(Item::lattice(section))
                .push(Item::lattice(housing).with_stroke(
                    StrokeStyle::new(
                        Color {
                            r: 90,
                            g: 90,
                            b: 90,
                            a: 255,
                        },
                        2.0,
                    )
                    .with_opacity(0.8),
                ));
            fig
        }
    }
}

fn run(cli: Cli) -> schematic_core::Result<()> {
    // clap guarantees exactly one of --input and --demo
    let mut figure = match &cli.input {
        Some(path) => json::from_path(path)?,
        None => demo_figure(cli.demo.unwrap_or(Demo::Zigzag)),
    };
    if let Some(w) = cli.width {
        figure.width = w;
    }
    if let Some(h) = cli.height {
        figure.height = h;
    }
    if cli.dump {
        println!("{}", json::to_string(&figure)?);
    }
    figure.save_png(&cli.output)?;
    info!(
        "wrote {}x{} figure to {}",
        figure.width,
        figure.height,
        cli.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("render_figure: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn demo_figures_build() {
        for demo in [Demo::Zigzag, Demo::Lattice] {
            let rec = demo_figure(demo).record().unwrap();
            assert!(!rec.strokes.is_empty());
        }
    }

    #[test]
    fn demo_requires_no_input() {
        let cli = Cli::try_parse_from(["render_figure", "--demo", "lattice", "-o", "x.png"]).unwrap();
        assert!(cli.input.is_none());
        assert!(Cli::try_parse_from(["render_figure", "-o", "x.png"]).is_err());
    }
}
