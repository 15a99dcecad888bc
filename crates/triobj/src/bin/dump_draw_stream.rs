//! Dump a decoded draw stream as JSON, optionally checking it against a
//! reference dump produced by another loader.
//!
//! Run:
//! ```text
//! cargo run -p triobj --features test-tools --bin dump_draw_stream -- \
//!     <file.obj> <out.json> [reference.json]
//! ```
//!
//! The JSON layout is `{ "corner_count", "positions", "tex_coords", "normals" }`
//! with flat scalar arrays in draw order.

use std::env;
use std::fs;
use std::path::Path;
use std::process;

use serde_json::{Value, json};
use triobj::{DrawStream, Limits, Loader};

const DEFAULT_LIMITS: Limits = Limits::new(1 << 22, 1 << 22, 1 << 24);

/// Largest per-scalar difference accepted when comparing against a reference.
const TOLERANCE: f64 = 1e-6;

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = env::args().collect();
    let (Some(input), Some(output)) = (args.get(1), args.get(2)) else {
        eprintln!("usage: dump_draw_stream <file.obj> <out.json> [reference.json]");
        process::exit(2);
    };

    let stream = match Loader::new(DEFAULT_LIMITS).load(input) {
        Ok(stream) => stream,
        Err(e) => {
            eprintln!("Failed to load {input}: {e}");
            process::exit(1);
        }
    };

    let dump = to_json(&stream);
    if let Err(e) = write_json(Path::new(output), &dump) {
        eprintln!("Failed to write {output}: {e}");
        process::exit(1);
    }
    println!("Wrote {} corners to {output}", stream.corner_count());

    if let Some(reference) = args.get(3) {
        println!("--- Comparing against {reference} ---");
        match compare_with_reference(&dump, Path::new(reference)) {
            Ok(()) => println!("PASSED"),
            Err(e) => {
                println!("FAILED: {e}");
                process::exit(1);
            }
        }
    }
}

fn to_json(stream: &DrawStream) -> Value {
    json!({
        "corner_count": stream.corner_count(),
        "positions": stream.positions,
        "tex_coords": stream.tex_coords,
        "normals": stream.normals,
    })
}

fn write_json(path: &Path, value: &Value) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    fs::write(path, text).map_err(|e| e.to_string())
}

fn read_json(path: &Path) -> Result<Value, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("failed to parse {}: {e}", path.display()))
}

fn compare_with_reference(dump: &Value, reference_path: &Path) -> Result<(), String> {
    let reference = read_json(reference_path)?;

    let ours = dump["corner_count"].as_u64().ok_or("missing corner_count")?;
    let theirs = reference["corner_count"]
        .as_u64()
        .ok_or("missing reference corner_count")?;
    if ours != theirs {
        return Err(format!("corner_count mismatch: ours={ours}, reference={theirs}"));
    }

    for field in ["positions", "tex_coords", "normals"] {
        let ours = dump[field].as_array().ok_or(format!("missing {field}"))?;
        let theirs = reference[field]
            .as_array()
            .ok_or(format!("missing reference {field}"))?;
        compare_f64_array(field, ours, theirs)?;
    }

    Ok(())
}

fn compare_f64_array(name: &str, ours: &[Value], theirs: &[Value]) -> Result<(), String> {
    if ours.len() != theirs.len() {
        return Err(format!(
            "{name}: length mismatch: ours={}, reference={}",
            ours.len(),
            theirs.len()
        ));
    }

    for (i, (a, b)) in ours.iter().zip(theirs).enumerate() {
        let a = a.as_f64().ok_or(format!("{name}[{i}]: not a number"))?;
        let b = b
            .as_f64()
            .ok_or(format!("{name}[{i}]: reference is not a number"))?;
        if (a - b).abs() > TOLERANCE {
            return Err(format!("{name}[{i}] mismatch: ours={a}, reference={b}"));
        }
    }

    Ok(())
}
