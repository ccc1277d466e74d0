// Flattening of a binary glTF (GLB) asset into one world-space triangle list.
//
// Node transforms of the default scene are baked into the vertices so the
// renderer only needs the placement matrix of the whole model.

use super::geometry::MeshVertex;
use glam::{Mat3, Mat4, Vec3};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid glTF: {0}")]
    Parse(#[from] gltf::Error),
    #[error("glTF has no scene")]
    NoScene,
    #[error("glTF contains no triangles")]
    Empty,
}

/// Non-indexed triangle list plus its bounds in model space.
#[derive(Debug, Clone)]
pub struct ModelMesh {
    pub vertices: Vec<MeshVertex>,
    pub bounds_min: Vec3,
    pub bounds_max: Vec3,
}

impl ModelMesh {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

/// Parse a GLB and bake it into one triangle list.
///
/// Vertex colours come from each primitive's base colour factor times its
/// `COLOR_0` attribute; primitives without a material use `fallback_color`.
pub fn parse_glb(bytes: &[u8], fallback_color: [f32; 3]) -> Result<ModelMesh, ModelError> {
    let gltf = gltf::Gltf::from_slice(bytes)?;
    let blob = gltf.blob.as_deref();
    let scene = gltf
        .default_scene()
        .or_else(|| gltf.scenes().next())
        .ok_or(ModelError::NoScene)?;

    let mut vertices = Vec::new();
    let mut stack: Vec<(gltf::Node, Mat4)> =
        scene.nodes().map(|n| (n, Mat4::IDENTITY)).collect();
    while let Some((node, parent)) = stack.pop() {
        let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
        if let Some(mesh) = node.mesh() {
            for primitive in mesh.primitives() {
                if primitive.mode() != gltf::mesh::Mode::Triangles {
                    continue;
                }
                append_primitive(&primitive, blob, world, fallback_color, &mut vertices);
            }
        }
        for child in node.children() {
            stack.push((child, world));
        }
    }

    if vertices.is_empty() {
        return Err(ModelError::Empty);
    }
    let (bounds_min, bounds_max) = vertices.iter().fold(
        (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
        |(lo, hi), v| {
            let p = Vec3::from_array(v.position);
            (lo.min(p), hi.max(p))
        },
    );
    Ok(ModelMesh {
        vertices,
        bounds_min,
        bounds_max,
    })
}

fn append_primitive(
    primitive: &gltf::Primitive,
    blob: Option<&[u8]>,
    world: Mat4,
    fallback_color: [f32; 3],
    out: &mut Vec<MeshVertex>,
) {
    let material = primitive.material();
    let base = match material.index() {
        Some(_) => {
            let [r, g, b, _] = material.pbr_metallic_roughness().base_color_factor();
            Vec3::new(r, g, b)
        }
        None => Vec3::from_array(fallback_color),
    };
    // only the embedded BIN chunk is available; external buffers are skipped
    let reader = primitive.reader(|buffer| match buffer.source() {
        gltf::buffer::Source::Bin => blob,
        gltf::buffer::Source::Uri(_) => None,
    });
    let positions: Vec<Vec3> = match reader.read_positions() {
        Some(iter) => iter.map(|p| world.transform_point3(Vec3::from_array(p))).collect(),
        None => return,
    };
    let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
    let normals: Option<Vec<Vec3>> = reader.read_normals().map(|iter| {
        iter.map(|n| (normal_matrix * Vec3::from_array(n)).normalize_or_zero())
            .collect()
    });
    let colors: Option<Vec<Vec3>> = reader
        .read_colors(0)
        .map(|iter| iter.into_rgb_f32().map(Vec3::from_array).collect());
    let indices: Vec<usize> = match reader.read_indices() {
        Some(idx) => idx.into_u32().map(|i| i as usize).collect(),
        None => (0..positions.len()).collect(),
    };

    for tri in indices.chunks_exact(3) {
        if tri.iter().any(|&i| i >= positions.len()) {
            continue;
        }
        let [a, b, c] = [positions[tri[0]], positions[tri[1]], positions[tri[2]]];
        let face = (b - a).cross(c - a).normalize_or_zero();
        for &i in tri {
            let n = normals
                .as_ref()
                .and_then(|ns| ns.get(i).copied())
                .unwrap_or(face);
            let tint = colors
                .as_ref()
                .and_then(|cs| cs.get(i).copied())
                .unwrap_or(Vec3::ONE);
            out.push(MeshVertex::tinted(
                positions[i].to_array(),
                n.to_array(),
                (base * tint).to_array(),
            ));
        }
    }
}
