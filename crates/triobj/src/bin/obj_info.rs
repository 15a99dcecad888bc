//! Load an OBJ file and print a summary of its draw stream.
//!
//! Run:
//! ```text
//! cargo run -p triobj --features test-tools --bin obj_info -- \
//!     <file.obj> [max_positions max_normals max_corners]
//! ```
//!
//! Capacities default to generous ceilings when omitted. Set `RUST_LOG` to
//! `debug` to see record counts from the scan.

use std::env;
use std::process;

use tracing_subscriber::EnvFilter;
use triobj::{Limits, Loader};

const DEFAULT_LIMITS: Limits = Limits::new(1 << 22, 1 << 22, 1 << 24);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("usage: obj_info <file.obj> [max_positions max_normals max_corners]");
        process::exit(2);
    };

    let limits = match parse_limits(&args[2..]) {
        Ok(limits) => limits,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    let stream = match Loader::new(limits).load(path) {
        Ok(stream) => stream,
        Err(e) => {
            eprintln!("Failed to load {path}: {e}");
            process::exit(1);
        }
    };

    println!("File: {path}");
    println!(
        "Limits: {} positions, {} normals, {} corners",
        limits.max_positions, limits.max_normals, limits.max_corners
    );
    println!("Faces: {}", stream.face_count());
    println!("Corners: {}", stream.corner_count());
    println!(
        "Scalars: {} position, {} texture coordinate, {} normal",
        stream.positions.len(),
        stream.tex_coords.len(),
        stream.normals.len()
    );
    if let Some((min, max)) = stream.bounds() {
        println!("Bounds: min={min} max={max} size={}", max - min);
    }
}

fn parse_limits(args: &[String]) -> Result<Limits, String> {
    match args {
        [] => Ok(DEFAULT_LIMITS),
        [positions, normals, corners] => Ok(Limits::new(
            parse_count("max_positions", positions)?,
            parse_count("max_normals", normals)?,
            parse_count("max_corners", corners)?,
        )),
        _ => Err("expected either no capacities or all three".to_string()),
    }
}

fn parse_count(name: &str, value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|e| format!("invalid {name} {value:?}: {e}"))
}
