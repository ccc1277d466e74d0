// Orbit camera around a fixed target, without panning.
//
// Angles follow the usual spherical convention: `polar` is measured from +Y,
// `azimuth` around +Y starting at +Z.

use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitLimits {
    pub min_distance: f32,
    pub max_distance: f32,
    pub max_polar: f32,
}

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub azimuth: f32,
    pub polar: f32,
    pub fov_y_deg: f32,
    pub znear: f32,
    pub zfar: f32,
    pub limits: OrbitLimits,
    /// Fraction of the pending rotation applied per [`OrbitCamera::update`];
    /// 0 applies drags immediately.
    pub damping: f32,
    // (azimuth, polar) still to be applied
    pending: (f32, f32),
}

// keeps the camera off the pole where look_at degenerates
const POLAR_EPS: f32 = 1e-4;
// per wheel notch, as in the usual orbit controls
const DOLLY_STEP: f32 = 0.95;
// below this the remaining rotation is dropped
const SETTLE_EPS: f32 = 1e-6;

impl OrbitCamera {
    pub fn new(eye: Vec3, target: Vec3, fov_y_deg: f32, limits: OrbitLimits) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(f32::EPSILON);
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);
        let mut cam = Self {
            target,
            radius,
            azimuth,
            polar,
            fov_y_deg,
            znear: 0.1,
            zfar: 1000.0,
            limits,
            damping: 0.0,
            pending: (0.0, 0.0),
        };
        cam.clamp();
        cam
    }

    pub fn with_damping(mut self, factor: f32) -> Self {
        self.damping = factor.clamp(0.0, 1.0);
        self
    }

    fn clamp(&mut self) {
        self.radius = self
            .radius
            .clamp(self.limits.min_distance, self.limits.max_distance);
        self.polar = self.polar.clamp(POLAR_EPS, self.limits.max_polar);
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        self.target + Vec3::new(sp * sa, cp, sp * ca) * self.radius
    }

    /// Distance of the eye from the world origin.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.eye().length()
    }

    /// Dragging by a full viewport height turns the camera by one revolution.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let k = std::f32::consts::TAU / viewport_height;
        self.pending.0 -= dx * k;
        self.pending.1 -= dy * k;
        if self.damping <= 0.0 {
            self.apply_pending(1.0);
        }
    }

    /// Advance damped rotation by one frame. Returns whether the camera moved.
    pub fn update(&mut self) -> bool {
        if self.damping <= 0.0 {
            return false;
        }
        let (da, dp) = self.pending;
        if da.abs() < SETTLE_EPS && dp.abs() < SETTLE_EPS {
            self.pending = (0.0, 0.0);
            return false;
        }
        self.apply_pending(self.damping);
        true
    }

    fn apply_pending(&mut self, fraction: f32) {
        self.azimuth += self.pending.0 * fraction;
        self.polar += self.pending.1 * fraction;
        self.pending.0 *= 1.0 - fraction;
        self.pending.1 *= 1.0 - fraction;
        self.clamp();
    }

    /// Wheel zoom: positive `delta_y` moves away from the target.
    pub fn zoom(&mut self, delta_y: f32) {
        if delta_y > 0.0 {
            self.radius /= DOLLY_STEP;
        } else if delta_y < 0.0 {
            self.radius *= DOLLY_STEP;
        }
        self.clamp();
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(
            self.fov_y_deg.to_radians(),
            aspect.max(1e-3),
            self.znear,
            self.zfar,
        );
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        proj * view
    }
}
