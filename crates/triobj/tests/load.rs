//! Integration tests: load OBJ files from disk.

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;
use triobj::{
    DecodeError, DecodeOptions, Error, IndexSlot, Limits, Loader, Pool, RecordKind, Vec2, Vec3,
    load,
};

const TRIANGLE: &str = "v 0.0 1.0 2.0\nvt 0.5 0.5\nvn 0.0 0.0 1.0\nf 1/1/1 1/1/1 1/1/1\n";

const BLENDER_CUBE_FACE: &str = "\
# Blender 3.6.0
# www.blender.org
mtllib cube.mtl
o Cube
v 1.000000 1.000000 -1.000000
v 1.000000 -1.000000 -1.000000
v 1.000000 1.000000 1.000000
v 1.000000 -1.000000 1.000000
vn -0.0000 1.0000 -0.0000
vn -0.0000 -0.0000 1.0000
vt 0.625000 0.500000
vt 0.875000 0.500000
vt 0.875000 0.750000
vt 0.625000 0.750000
s 0
usemtl Material
f 1/1/1 3/2/1 4/3/2
f 1/1/1 4/3/2 2/4/2
";

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn write_obj(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn decode_error(result: triobj::Result<triobj::DrawStream>) -> DecodeError {
    match result {
        Err(Error::Decode(e)) => e,
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[test]
fn loads_single_triangle() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = write_obj(&dir, "triangle.obj", TRIANGLE);

    let stream = load(&path, 1, 1, 3).unwrap();

    assert_eq!(stream.corner_count(), 3);
    assert_eq!(stream.positions.len(), 9);
    assert_eq!(stream.tex_coords.len(), 6);
    assert_eq!(stream.normals.len(), 9);
    for corner in stream.corners() {
        assert_eq!(corner.position, Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(corner.tex_coord, Vec2::new(0.5, 0.5));
        assert_eq!(corner.normal, Vec3::new(0.0, 0.0, 1.0));
    }
}

#[test]
fn loads_exported_mesh_with_directives() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = write_obj(&dir, "cube.obj", BLENDER_CUBE_FACE);

    let stream = load(&path, 4, 2, 6).unwrap();

    assert_eq!(stream.face_count(), 2);
    // Corner 4 is `4/3/2` of the second face.
    assert_eq!(stream.position(4), Some(Vec3::new(1.0, -1.0, 1.0)));
    assert_eq!(stream.tex_coord(4), Some(Vec2::new(0.875, 0.75)));
    assert_eq!(stream.normal(4), Some(Vec3::new(0.0, 0.0, 1.0)));
    // Shared vertices are duplicated, not welded.
    assert_eq!(stream.position(0), stream.position(3));
    assert_eq!(
        stream.bounds(),
        Some((Vec3::new(1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0)))
    );
}

#[test]
fn quad_face_is_rejected_as_non_triangulated() {
    let dir = TempDir::new().unwrap();
    let text = TRIANGLE.replace("f 1/1/1 1/1/1 1/1/1", "f 1/1/1 1/1/1 1/1/1 1/1/1");
    let path = write_obj(&dir, "quad.obj", &text);

    assert_eq!(
        decode_error(load(&path, 1, 1, 3)),
        DecodeError::NonTriangulated { groups: 4, line: 4 }
    );
}

#[test]
fn dangling_face_index_is_rejected() {
    let dir = TempDir::new().unwrap();
    let text = TRIANGLE.replace("f 1/1/1", "f 2/1/1");
    let path = write_obj(&dir, "dangling.obj", &text);

    assert_eq!(
        decode_error(load(&path, 1, 1, 3)),
        DecodeError::DanglingIndex {
            corner: 0,
            slot: IndexSlot::Position,
            index: 2,
            available: 1,
        }
    );
}

#[test]
fn two_component_groups_are_rejected() {
    let dir = TempDir::new().unwrap();
    let text = TRIANGLE.replace("f 1/1/1 1/1/1 1/1/1", "f 1/1 1/1 1/1");
    let path = write_obj(&dir, "no_normals.obj", &text);

    assert_eq!(
        decode_error(load(&path, 1, 1, 3)),
        DecodeError::MissingIndex {
            slot: IndexSlot::Normal,
            line: 4,
        }
    );
}

#[test]
fn exceeding_position_capacity_fails() {
    let dir = TempDir::new().unwrap();
    let text = format!("v 9 9 9\n{TRIANGLE}");
    let path = write_obj(&dir, "extra.obj", &text);

    assert_eq!(
        decode_error(load(&path, 1, 1, 3)),
        DecodeError::CapacityExceeded {
            pool: Pool::Positions,
            limit: 1,
            line: 2,
        }
    );
}

#[test]
fn truncated_file_is_distinct_from_malformed() {
    let dir = TempDir::new().unwrap();
    let text = TRIANGLE.trim_end();
    let path = write_obj(&dir, "truncated.obj", text);

    assert_eq!(
        decode_error(load(&path, 1, 1, 3)),
        DecodeError::Truncated {
            kind: RecordKind::Face,
            line: 4,
        }
    );
}

#[test]
fn missing_file_is_an_io_error() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.obj");

    let err = load(&path, 1, 1, 3).unwrap_err();
    match &err {
        Error::Io { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
    assert!(err.as_decode().is_none());
    assert!(err.to_string().contains("missing.obj"));
}

#[test]
fn loader_reuses_limits_and_options() {
    let dir = TempDir::new().unwrap();
    let first = write_obj(&dir, "a.obj", TRIANGLE);
    let second = write_obj(&dir, "b.obj", BLENDER_CUBE_FACE);

    let loader = Loader::new(Limits::new(4, 2, 6)).with_options(DecodeOptions::legacy());
    assert_eq!(loader.load(&first).unwrap().corner_count(), 3);
    assert_eq!(loader.load(&second).unwrap().corner_count(), 6);
    assert_eq!(loader.options().token_budget, Some(10));
}
