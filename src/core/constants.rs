// Scene layout constants shared by the geometry mapper, the renderer and the overlay.

// World units per catalog centimetre; every consumer goes through this one value.
pub const WORLD_SCALE: f32 = 0.006;

// Box group is lifted so its centre sits above the ground grid
pub const BOX_CENTER_Y: f32 = 1.0;

// Truck model placement
pub const TRUCK_SCALE: f32 = 0.7;
pub const TRUCK_Y: f32 = -0.9;
pub const TRUCK_Z_OFFSET: f32 = -0.9; // added to half the trailer length
pub const TRUCK_YAW: f32 = std::f32::consts::PI;

// Scale bar: on-screen length (px) that the readable value is derived from
pub const SCALE_BAR_TARGET_PX: f64 = 100.0;
