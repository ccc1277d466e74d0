// On-screen scale bar estimation.
//
// Converts the camera state into a world-metres-per-pixel ratio and snaps a
// fixed on-screen length to a readable 1/2/5 x 10^n value.

use super::constants::SCALE_BAR_TARGET_PX;

/// Camera projection as seen by the scale estimator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    Perspective { vertical_fov_deg: f64 },
    Orthographic { top: f64, bottom: f64 },
}

/// Snapped scale bar length and its current width on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleReading {
    pub meters: f64,
    pub pixels: f64,
}

impl Default for ScaleReading {
    fn default() -> Self {
        Self {
            meters: 1.0,
            pixels: 50.0,
        }
    }
}

impl ScaleReading {
    /// Text shown under the bar, e.g. `"2 m"` or `"0.05 m"`.
    pub fn label(&self) -> String {
        if !self.meters.is_finite() || self.meters <= 0.0 {
            return format!("{} m", self.meters);
        }
        let exponent = (self.meters.log10() + 1e-9).floor();
        let decimals = (-exponent).max(0.0) as usize;
        format!("{:.*} m", decimals, self.meters)
    }
}

#[inline]
fn pow10(exponent: i32) -> f64 {
    10f64.powi(exponent.abs())
}

/// `mantissa * 10^exponent`, exact for the small integer mantissas used here.
#[inline]
fn scaled(mantissa: f64, exponent: i32) -> f64 {
    if exponent >= 0 {
        mantissa * pow10(exponent)
    } else {
        mantissa / pow10(exponent)
    }
}

/// Snap a positive length to the closest-below value of the form {1, 2, 5} x 10^n.
///
/// A ratio of exactly 2 or 5 against the decade base selects the upper bucket.
/// Non-finite or non-positive input is returned unchanged.
pub fn nice_length(target: f64) -> f64 {
    if !target.is_finite() || target <= 0.0 {
        return target;
    }
    let mut exponent = target.log10().floor() as i32;
    // log10 can land one ulp on the wrong side of an exact decade
    if target / scaled(1.0, exponent) >= 10.0 {
        exponent += 1;
    } else if target / scaled(1.0, exponent) < 1.0 {
        exponent -= 1;
    }
    let ratio = target / scaled(1.0, exponent);
    let mantissa = if ratio < 2.0 {
        1.0
    } else if ratio < 5.0 {
        2.0
    } else {
        5.0
    };
    scaled(mantissa, exponent)
}

/// World metres covered by one vertical pixel of the viewport.
pub fn meters_per_pixel(distance: f64, projection: Projection, viewport_height_px: f64) -> f64 {
    let visible_height = match projection {
        Projection::Perspective { vertical_fov_deg } => {
            let fov = vertical_fov_deg.to_radians();
            2.0 * (fov / 2.0).tan() * distance
        }
        Projection::Orthographic { top, bottom } => top - bottom,
    };
    visible_height / viewport_height_px
}

/// Estimate the scale bar for the current camera.
///
/// A zero viewport height yields non-finite values; callers skip the update
/// in that case.
pub fn estimate_scale(
    distance: f64,
    projection: Projection,
    viewport_height_px: f64,
) -> ScaleReading {
    let mpp = meters_per_pixel(distance, projection, viewport_height_px);
    let target = mpp * SCALE_BAR_TARGET_PX;
    let meters = nice_length(target);
    ScaleReading {
        meters,
        pixels: meters / mpp,
    }
}
