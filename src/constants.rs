/// Viewer tuning constants: camera, lighting, grid, bloom and overlay.
///
/// Scene layout and the world scale live in `core::constants`; these only
/// shape how the scene looks and responds to input.
// Camera
pub const CAMERA_START: [f32; 3] = [10.0, 8.0, 15.0];
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const ORBIT_MIN_DISTANCE: f32 = 6.0;
pub const ORBIT_MAX_DISTANCE: f32 = 25.0;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::FRAC_PI_2; // never look from below the ground
pub const ORBIT_DAMPING: f32 = 0.05; // share of the remaining drag applied per frame

// Background and fog (sRGB hex)
pub const BACKGROUND_HEX: u32 = 0x292828;
pub const FOG_HEX: u32 = 0x111111;
pub const FOG_DENSITY: f32 = 0.04;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.3;
pub const DIRECTIONAL_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_POSITION: [f32; 3] = [10.0, 20.0, 10.0];

// Cargo box material
pub const BOX_OPACITY: f32 = 0.35;
pub const BOX_HUE_DEG_PER_SEC: f32 = 5.0;
pub const EDGE_EMISSIVE: f32 = 0.6; // edges glow a little so bloom picks them up

// Truck primitives that carry no glTF material
pub const TRUCK_COLOR_HEX: u32 = 0x9aa3ad;

// Ground grid
pub const GRID_CELL_SIZE: f32 = 0.5;
pub const GRID_SECTION_SIZE: f32 = 1.0;
pub const GRID_CELL_THICKNESS: f32 = 0.5;
pub const GRID_SECTION_THICKNESS: f32 = 1.0;
pub const GRID_CELL_HEX: u32 = 0x222222;
pub const GRID_SECTION_HEX: u32 = 0x444444;
pub const GRID_FADE_DISTANCE: f32 = 40.0;
pub const GRID_SPIN_PER_FRAME: f32 = 0.00025; // radians

// Post-processing
pub const BLOOM_STRENGTH: f32 = 1.2;
pub const BLOOM_THRESHOLD: f32 = 0.1;
pub const BLOOM_SMOOTHING: f32 = 0.9;

// Asset and credits
pub const TRUCK_MODEL_PATH: &str = "/models/volvo_fh460.glb";
pub const CREDITS_MODEL_NAME: &str = "Volvo FH 460 – Rick Modding";
pub const CREDITS_MODEL_URL: &str =
    "https://sketchfab.com/3d-models/volvo-fh-460-rick-modding-dcd13ab86e1e469d9daa83d4cbca669e";
pub const CREDITS_LICENSE: &str = "| CC BY 4.0";
