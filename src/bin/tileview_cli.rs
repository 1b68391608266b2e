//! CLI tool for tileview - computes a viewport layout and outputs JSON
//!
//! Usage:
//!   tileview_cli <width> <height> <tile_size> <max_tiles>              # Frame plan to stdout
//!   tileview_cli <width> <height> <tile_size> <max_tiles> -n 1234     # Navigate first
//!   tileview_cli <width> <height> <tile_size> <max_tiles> -o out.json # Output to file

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use serde::Serialize;
use tileview::{FramePlan, GridConfig, GridGeometry, NormalizedSelection, TileGridViewport};

#[derive(Serialize)]
struct Snapshot<'a> {
    geometry: &'a GridGeometry,
    scroll_offset: u32,
    frame: FramePlan,
    selection: NormalizedSelection,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 5 {
        eprintln!("Usage: tileview_cli <width> <height> <tile_size> <max_tiles> [-n tile] [-o output.json]");
        std::process::exit(1);
    }

    let mut dims = [0u32; 4];
    for (slot, arg) in dims.iter_mut().zip(&args[1..5]) {
        *slot = match arg.parse() {
            Ok(v) => v,
            Err(e) => {
                eprintln!("Error parsing '{}': {}", arg, e);
                std::process::exit(1);
            }
        };
    }
    let [width, height, tile_size, max_tiles] = dims;

    let mut navigate: Option<i64> = None;
    let mut output_path: Option<&String> = None;
    let mut rest = args[5..].iter();
    while let Some(flag) = rest.next() {
        match (flag.as_str(), rest.next()) {
            ("-n", Some(value)) => navigate = value.parse().ok(),
            ("-o", Some(path)) => output_path = Some(path),
            _ => {
                eprintln!("Unknown argument: {}", flag);
                std::process::exit(1);
            }
        }
    }

    let config = GridConfig {
        tile_size,
        show_grid: false,
    };
    let mut viewport = match TileGridViewport::new(width, height, config, &max_tiles) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(tile) = navigate {
        if let Err(e) = viewport.navigate_to_tile(tile) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let snapshot = Snapshot {
        geometry: viewport.geometry(),
        scroll_offset: viewport.scroll_offset(),
        frame: FramePlan::build(&viewport),
        selection: viewport.normalized_selection(),
    };

    let json = match serde_json::to_string_pretty(&snapshot) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", json).expect("Failed to write to stdout");
        }
    }
}
