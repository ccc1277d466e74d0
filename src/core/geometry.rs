// Cargo box geometry derived from catalog dimensions.

use super::catalog::Dimensions;
use super::constants::{TRUCK_SCALE, TRUCK_Y, TRUCK_YAW, TRUCK_Z_OFFSET, WORLD_SCALE};
use glam::{Mat4, Quat, Vec3};

/// Vertex layout shared by every mesh pass (box, edges, truck).
///
/// `color` is linear RGB and multiplies the per-object colour in the shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

impl MeshVertex {
    pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

    #[inline]
    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self::tinted(position, normal, Self::WHITE)
    }

    #[inline]
    pub const fn tinted(position: [f32; 3], normal: [f32; 3], color: [f32; 3]) -> Self {
        Self {
            position,
            normal,
            color,
        }
    }
}

/// Half-extents of the box in world units, centred on its own origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldBox {
    pub half_width: f32,
    pub half_height: f32,
    pub half_length: f32,
}

impl WorldBox {
    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.half_width, self.half_height, self.half_length)
    }
}

pub fn to_world_box(dimensions: Dimensions, scale: f32) -> WorldBox {
    WorldBox {
        half_width: dimensions.width * scale / 2.0,
        half_height: dimensions.height * scale / 2.0,
        half_length: dimensions.length * scale / 2.0,
    }
}

/// Where the truck model sits relative to the cargo box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TruckPlacement {
    pub position: Vec3,
    pub yaw: f32,
    pub scale: f32,
}

impl TruckPlacement {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.yaw),
            self.position,
        )
    }
}

/// The cab is pushed forward by half the trailer length so it stays in front of the box.
pub fn truck_placement(dimensions: Dimensions) -> TruckPlacement {
    let trailer_length_world = dimensions.length * WORLD_SCALE;
    TruckPlacement {
        position: Vec3::new(0.0, TRUCK_Y, trailer_length_world / 2.0 + TRUCK_Z_OFFSET),
        yaw: TRUCK_YAW,
        scale: TRUCK_SCALE,
    }
}

// Face normal followed by its four corners (counter-clockwise seen from outside),
// expressed as signs of the half-extents.
const FACES: [([f32; 3], [[f32; 3]; 4]); 6] = [
    (
        [1.0, 0.0, 0.0],
        [[1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]],
    ),
    (
        [-1.0, 0.0, 0.0],
        [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
    ),
    (
        [0.0, 1.0, 0.0],
        [[-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]],
    ),
    (
        [0.0, -1.0, 0.0],
        [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
    ),
    (
        [0.0, 0.0, 1.0],
        [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
    ),
    (
        [0.0, 0.0, -1.0],
        [[1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0]],
    ),
];

/// Triangle mesh of the box: 4 vertices per face so each face keeps a flat normal.
pub fn box_mesh(b: &WorldBox) -> (Vec<MeshVertex>, Vec<u16>) {
    let h = b.half_extents();
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, corners) in FACES.iter() {
        let base = vertices.len() as u16;
        for c in corners {
            let p = Vec3::from_array(*c) * h;
            vertices.push(MeshVertex::new(p.to_array(), *normal));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    (vertices, indices)
}

/// The 12 box edges as a line list (pairs of vertices).
pub fn box_edges(b: &WorldBox) -> Vec<MeshVertex> {
    let h = b.half_extents();
    let corner = |x: f32, y: f32, z: f32| MeshVertex::new((Vec3::new(x, y, z) * h).to_array(), [0.0; 3]);
    let mut lines = Vec::with_capacity(24);
    for &y in &[-1.0, 1.0] {
        // rectangle at bottom and top
        lines.extend_from_slice(&[
            corner(-1.0, y, -1.0),
            corner(1.0, y, -1.0),
            corner(1.0, y, -1.0),
            corner(1.0, y, 1.0),
            corner(1.0, y, 1.0),
            corner(-1.0, y, 1.0),
            corner(-1.0, y, 1.0),
            corner(-1.0, y, -1.0),
        ]);
    }
    for &(x, z) in &[(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
        lines.push(corner(x, -1.0, z));
        lines.push(corner(x, 1.0, z));
    }
    lines
}
