pub mod catalog;
pub mod color;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod locale;
pub mod model;
pub mod orbit;
pub mod scale;
pub mod settings;
pub mod slot;
pub mod theme;

pub use catalog::*;
pub use constants::*;
pub use geometry::*;
pub use scale::*;
pub use settings::*;

// Shaders bundled as string constants
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static GRID_WGSL: &str = include_str!("../../shaders/grid.wgsl");
