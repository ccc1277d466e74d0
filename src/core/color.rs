// Colour helpers. Shaders work in linear space; the swapchain is sRGB.

#[inline]
fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// HSL (all components in 0..1, hue wraps) to RGB in 0..1.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return [l, l, l];
    }
    let q = if l <= 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;
    [
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    ]
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c < 0.04045 {
        c * 0.0773993808
    } else {
        ((c * 0.9478672986) + 0.0521327014).powf(2.4)
    }
}

/// `0xRRGGBB` to linear RGB.
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)]
}

/// Fully saturated colour whose hue advances `degrees_per_sec` and wraps at 360.
pub fn cycling_hue_rgb(elapsed_sec: f32, degrees_per_sec: f32) -> [f32; 3] {
    let hue_deg = (elapsed_sec * degrees_per_sec).rem_euclid(360.0);
    hsl_to_rgb(hue_deg / 360.0, 1.0, 0.5)
}
