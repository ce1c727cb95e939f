//! creepage — compute creepage distance over an ASCII board layout.
//!
//! Reads a board painted in the layout character set (`.` substrate,
//! `#` copper trace, `~` slot, `S` source pad, `T` target pad), finds the
//! shortest surface path between the pads, and prints the board with the
//! path overlaid plus the distance scaled to millimetres.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use creepage_core::layout::{parse_layout, render_layout};
use creepage_paths::find_path;

/// Compute the shortest creepage path across a painted board layout.
#[derive(Parser)]
#[command(name = "creepage", version, about)]
struct Args {
    /// Board layout file (`-` reads standard input).
    layout: PathBuf,

    /// Physical size of one grid cell, in millimetres.
    #[arg(long, default_value_t = 1.0)]
    cell_size_mm: f64,

    /// Print only the result line, without the board rendering.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = if args.layout.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading standard input")?;
        buf
    } else {
        fs::read_to_string(&args.layout)
            .with_context(|| format!("reading {}", args.layout.display()))?
    };

    let layout = parse_layout(&text)?;
    let Some(source) = layout.source else {
        bail!("layout has no source pad (S)");
    };
    let Some(target) = layout.target else {
        bail!("layout has no target pad (T)");
    };
    log::debug!(
        "board {}x{}, source {source}, target {target}",
        layout.board.width(),
        layout.board.height()
    );

    match find_path(&layout.board, source, target)? {
        Some(path) => {
            if !args.quiet {
                println!("{}", render_layout(&layout.board, &path.points));
                println!();
            }
            println!(
                "creepage distance: {:.4} mm ({} steps)",
                path.distance * args.cell_size_mm,
                path.points.len() - 1
            );
        }
        None => {
            if !args.quiet {
                println!("{}", render_layout(&layout.board, &[]));
                println!();
            }
            println!("no creepage path exists");
        }
    }
    Ok(())
}
