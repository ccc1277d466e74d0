// Host-side tests for GLB flattening.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod catalog {
    include!("../src/core/catalog.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod model {
    include!("../src/core/model.rs");
}

use glam::Vec3;
use model::*;

const JSON_CHUNK: u32 = 0x4E4F_534A;
const BIN_CHUNK: u32 = 0x004E_4942;

fn push_chunk(out: &mut Vec<u8>, kind: u32, mut data: Vec<u8>, pad: u8) {
    while data.len() % 4 != 0 {
        data.push(pad);
    }
    out.extend_from_slice(&(data.len() as u32).to_le_bytes());
    out.extend_from_slice(&kind.to_le_bytes());
    out.extend_from_slice(&data);
}

const FALLBACK: [f32; 3] = [0.3, 0.35, 0.4];

/// Minimal GLB: one node holding one triangle, with an optional index buffer
/// and an optional material carrying `base_color`.
fn triangle_glb(translation: [f32; 3], indexed: bool, base_color: Option<[f32; 4]>) -> Vec<u8> {
    let positions: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    let mut bin: Vec<u8> = positions
        .iter()
        .flatten()
        .flat_map(|f| f.to_le_bytes())
        .collect();
    let (indices_json, views_json, accessors_extra) = if indexed {
        for i in [0u16, 1, 2, 0] {
            // last entry is padding to keep the buffer 4-byte aligned
            bin.extend_from_slice(&i.to_le_bytes());
        }
        (
            r#","indices":1"#,
            r#",{"buffer":0,"byteOffset":36,"byteLength":6}"#,
            r#",{"bufferView":1,"componentType":5123,"count":3,"type":"SCALAR"}"#,
        )
    } else {
        ("", "", "")
    };
    let (material_ref, materials_json) = match base_color {
        Some([r, g, b, a]) => (
            r#","material":0"#.to_string(),
            format!(
                r#","materials":[{{"pbrMetallicRoughness":{{"baseColorFactor":[{},{},{},{}]}}}}]"#,
                r, g, b, a
            ),
        ),
        None => (String::new(), String::new()),
    };
    let json = format!(
        r#"{{"asset":{{"version":"2.0"}},"scene":0,"scenes":[{{"nodes":[0]}}],"nodes":[{{"mesh":0,"translation":[{},{},{}]}}],"meshes":[{{"primitives":[{{"attributes":{{"POSITION":0}}{}{}}}]}}],"accessors":[{{"bufferView":0,"componentType":5126,"count":3,"type":"VEC3","min":[0,0,0],"max":[1,1,0]}}{}],"bufferViews":[{{"buffer":0,"byteOffset":0,"byteLength":36}}{}],"buffers":[{{"byteLength":{}}}]{}}}"#,
        translation[0],
        translation[1],
        translation[2],
        indices_json,
        material_ref,
        accessors_extra,
        views_json,
        bin.len(),
        materials_json
    );

    let mut body = Vec::new();
    push_chunk(&mut body, JSON_CHUNK, json.into_bytes(), b' ');
    push_chunk(&mut body, BIN_CHUNK, bin, 0);

    let mut glb = Vec::new();
    glb.extend_from_slice(b"glTF");
    glb.extend_from_slice(&2u32.to_le_bytes());
    glb.extend_from_slice(&((12 + body.len()) as u32).to_le_bytes());
    glb.extend_from_slice(&body);
    glb
}

fn single_triangle_glb(translation: [f32; 3], indexed: bool) -> Vec<u8> {
    triangle_glb(translation, indexed, None)
}

#[test]
fn triangle_is_baked_into_world_space() {
    let mesh = parse_glb(&single_triangle_glb([1.0, 2.0, 3.0], false), FALLBACK).unwrap();
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.vertices.len(), 3);
    assert_eq!(mesh.vertices[0].position, [1.0, 2.0, 3.0]);
    assert_eq!(mesh.vertices[1].position, [2.0, 2.0, 3.0]);
    assert!((mesh.bounds_min - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
    assert!((mesh.bounds_max - Vec3::new(2.0, 3.0, 3.0)).length() < 1e-6);
}

#[test]
fn missing_normals_fall_back_to_face_normal() {
    let mesh = parse_glb(&single_triangle_glb([0.0, 0.0, 0.0], false), FALLBACK).unwrap();
    for v in &mesh.vertices {
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
    }
}

#[test]
fn indexed_primitive_is_expanded() {
    let mesh = parse_glb(&single_triangle_glb([0.0, 0.0, 0.0], true), FALLBACK).unwrap();
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.vertices[2].position, [0.0, 1.0, 0.0]);
}

#[test]
fn garbage_is_a_parse_error() {
    let err = parse_glb(b"definitely not a model", FALLBACK).unwrap_err();
    assert!(matches!(err, ModelError::Parse(_)), "{err:?}");
}

#[test]
fn scene_without_meshes_is_empty() {
    let json = br#"{"asset":{"version":"2.0"},"scenes":[{"nodes":[0]}],"nodes":[{}]}"#;
    let err = parse_glb(json, FALLBACK).unwrap_err();
    assert!(matches!(err, ModelError::Empty), "{err:?}");
}

#[test]
fn material_base_color_reaches_vertices() {
    let glb = triangle_glb([0.0, 0.0, 0.0], false, Some([0.5, 0.25, 1.0, 1.0]));
    let mesh = parse_glb(&glb, FALLBACK).unwrap();
    for v in &mesh.vertices {
        assert_eq!(v.color, [0.5, 0.25, 1.0]);
    }
}

#[test]
fn primitive_without_material_uses_fallback_color() {
    let mesh = parse_glb(&single_triangle_glb([0.0, 0.0, 0.0], true), FALLBACK).unwrap();
    for v in &mesh.vertices {
        assert_eq!(v.color, FALLBACK);
    }
}
