//! Color space conversion
//!
//! Provides conversion between sRGB, CIE XYZ (D65), CIE L*a*b* and
//! grayscale, at both the pixel and image level.
//!
//! Lab values travel through an 8-bit staging representation: L* is
//! scaled from [0, 100] to [0, 255] and a*/b* are offset by 128 into
//! unsigned range, then quantized. The inverse direction clips to the
//! valid 8-bit range *before* inverting, so out-of-gamut Lab colors
//! (synthetic or extrapolated ones) are clamped rather than rejected.
//! Round-trip fidelity is therefore guaranteed only for colors that
//! originated from valid 8-bit RGB, within the quantization error of
//! the two rescale-and-clip steps.

use crate::ColorResult;
use huepick_core::{Lab, LabImage, RgbImage, ScalarField};

/// D65 standard illuminant reference white point
const D65_X: f32 = 0.95047;
const D65_Y: f32 = 1.00000;
const D65_Z: f32 = 1.08883;

/// sRGB to XYZ matrix (D65)
const SRGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// XYZ to sRGB matrix (D65)
const XYZ_TO_SRGB: [[f32; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// Decode an 8-bit sRGB component to linear light
#[inline]
fn srgb_decode(c: u8) -> f32 {
    let s = c as f32 / 255.0;
    if s <= 0.04045 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode linear light to an 8-bit sRGB component, clamping to gamut
#[inline]
fn srgb_encode(lin: f32) -> u8 {
    let lin = lin.clamp(0.0, 1.0);
    let s = if lin <= 0.003_130_8 {
        lin * 12.92
    } else {
        1.055 * lin.powf(1.0 / 2.4) - 0.055
    };
    (s * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Lab f(t) function
#[inline]
fn lab_f(t: f32) -> f32 {
    const DELTA: f32 = 6.0 / 29.0;
    const DELTA_CUBED: f32 = DELTA * DELTA * DELTA;

    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Lab f^-1(t) inverse function
#[inline]
fn lab_f_inv(t: f32) -> f32 {
    const DELTA: f32 = 6.0 / 29.0;

    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// Stage a Lab sample through the 8-bit encoding
///
/// L* is rescaled from [0, 100] to [0, 255]; a* and b* are shifted into
/// unsigned range. Values are clipped to [0, 255] and rounded, which is
/// the deliberate lossy step of the inverse conversion.
#[inline]
fn lab_to_lab8(lab: Lab) -> (u8, u8, u8) {
    let l8 = (lab.l * 255.0 / 100.0).round().clamp(0.0, 255.0) as u8;
    let a8 = (lab.a + 128.0).round().clamp(0.0, 255.0) as u8;
    let b8 = (lab.b + 128.0).round().clamp(0.0, 255.0) as u8;
    (l8, a8, b8)
}

/// Recover standard-range Lab values from the 8-bit encoding
#[inline]
fn lab8_to_lab(l8: u8, a8: u8, b8: u8) -> Lab {
    Lab::new(
        l8 as f32 * 100.0 / 255.0,
        a8 as f32 - 128.0,
        b8 as f32 - 128.0,
    )
}

/// Convert an 8-bit RGB pixel to CIE L*a*b* (D65)
///
/// Output ranges: L* in [0, 100], a* and b* in [-128, 127]. The result
/// is quantized through the 8-bit Lab staging representation.
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> Lab {
    let lr = srgb_decode(r);
    let lg = srgb_decode(g);
    let lb = srgb_decode(b);

    let x = SRGB_TO_XYZ[0][0] * lr + SRGB_TO_XYZ[0][1] * lg + SRGB_TO_XYZ[0][2] * lb;
    let y = SRGB_TO_XYZ[1][0] * lr + SRGB_TO_XYZ[1][1] * lg + SRGB_TO_XYZ[1][2] * lb;
    let z = SRGB_TO_XYZ[2][0] * lr + SRGB_TO_XYZ[2][1] * lg + SRGB_TO_XYZ[2][2] * lb;

    let fx = lab_f(x / D65_X);
    let fy = lab_f(y / D65_Y);
    let fz = lab_f(z / D65_Z);

    let lab = Lab::new(
        116.0 * fy - 16.0,
        500.0 * (fx - fy),
        200.0 * (fy - fz),
    );

    let (l8, a8, b8) = lab_to_lab8(lab);
    lab8_to_lab(l8, a8, b8)
}

/// Convert a CIE L*a*b* sample back to 8-bit RGB (D65)
///
/// All channels are clipped to the valid 8-bit Lab range before the
/// inverse transform, so out-of-gamut inputs are clamped, not rejected.
pub fn lab_to_rgb(lab: Lab) -> (u8, u8, u8) {
    let (l8, a8, b8) = lab_to_lab8(lab);
    let lab = lab8_to_lab(l8, a8, b8);

    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    let x = D65_X * lab_f_inv(fx);
    let y = D65_Y * lab_f_inv(fy);
    let z = D65_Z * lab_f_inv(fz);

    let lr = XYZ_TO_SRGB[0][0] * x + XYZ_TO_SRGB[0][1] * y + XYZ_TO_SRGB[0][2] * z;
    let lg = XYZ_TO_SRGB[1][0] * x + XYZ_TO_SRGB[1][1] * y + XYZ_TO_SRGB[1][2] * z;
    let lb = XYZ_TO_SRGB[2][0] * x + XYZ_TO_SRGB[2][1] * y + XYZ_TO_SRGB[2][2] * z;

    (srgb_encode(lr), srgb_encode(lg), srgb_encode(lb))
}

/// Convert an RGB pixel to grayscale using ITU-R BT.601 coefficients
///
/// Formula: gray = 0.299*R + 0.587*G + 0.114*B, in [0, 255]
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

/// Convert an RGB image to a Lab image of the same dimensions
pub fn to_lab(image: &RgbImage) -> ColorResult<LabImage> {
    let (w, h) = image.dimensions();
    let mut data = Vec::with_capacity(image.pixel_count() * 3);
    for (r, g, b) in image.pixels() {
        let lab = rgb_to_lab(r, g, b);
        data.push(lab.l);
        data.push(lab.a);
        data.push(lab.b);
    }
    Ok(LabImage::from_data(w, h, data)?)
}

/// Convert a Lab image back to an RGB image of the same dimensions
///
/// Out-of-gamut samples are clipped per [`lab_to_rgb`].
pub fn to_rgb(image: &LabImage) -> ColorResult<RgbImage> {
    let (w, h) = image.dimensions();
    let mut data = Vec::with_capacity(image.pixel_count() * 3);
    for lab in image.pixels() {
        let (r, g, b) = lab_to_rgb(lab);
        data.push(r);
        data.push(g);
        data.push(b);
    }
    Ok(RgbImage::from_data(w, h, data)?)
}

/// Convert an RGB image to a grayscale field (BT.601, values in [0, 255])
pub fn to_gray(image: &RgbImage) -> ColorResult<ScalarField> {
    let (w, h) = image.dimensions();
    let data = image
        .pixels()
        .map(|(r, g, b)| rgb_to_gray(r, g, b))
        .collect();
    Ok(ScalarField::from_data(w, h, data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_lab_black() {
        let lab = rgb_to_lab(0, 0, 0);
        assert!(lab.l < 1.0);
        assert!(lab.a.abs() < 1.0);
        assert!(lab.b.abs() < 1.0);
    }

    #[test]
    fn test_rgb_to_lab_white() {
        let lab = rgb_to_lab(255, 255, 255);
        assert!(lab.l > 99.0);
        assert!(lab.a.abs() < 1.0);
        assert!(lab.b.abs() < 1.0);
    }

    #[test]
    fn test_rgb_to_lab_gray_is_neutral() {
        let lab = rgb_to_lab(128, 128, 128);
        assert!(lab.a.abs() < 1.0);
        assert!(lab.b.abs() < 1.0);
    }

    #[test]
    fn test_rgb_to_lab_red() {
        let lab = rgb_to_lab(255, 0, 0);
        // Red sits around L*=53, a*=80, b*=67
        assert!((lab.l - 53.0).abs() < 2.0);
        assert!(lab.a > 70.0);
        assert!(lab.b > 55.0);
    }

    #[test]
    fn test_primaries_roundtrip() {
        for (r, g, b) in [
            (255u8, 0u8, 0u8),
            (0, 255, 0),
            (0, 0, 255),
            (255, 255, 255),
            (0, 0, 0),
            (128, 128, 128),
        ] {
            let (r2, g2, b2) = lab_to_rgb(rgb_to_lab(r, g, b));
            assert!(
                (r as i32 - r2 as i32).abs() <= 2
                    && (g as i32 - g2 as i32).abs() <= 2
                    && (b as i32 - b2 as i32).abs() <= 2,
                "roundtrip failed for ({r},{g},{b}): got ({r2},{g2},{b2})"
            );
        }
    }

    #[test]
    fn test_out_of_gamut_lab_is_clipped() {
        // Extreme synthetic Lab values must clamp, not panic or wrap
        let (r, g, b) = lab_to_rgb(Lab::new(150.0, 300.0, -300.0));
        let _ = (r, g, b);
        let (r, g, b) = lab_to_rgb(Lab::new(-50.0, 0.0, 0.0));
        assert_eq!((r, g, b), lab_to_rgb(Lab::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_rgb_to_gray_weights() {
        assert!((rgb_to_gray(255, 255, 255) - 255.0).abs() < 0.1);
        assert!((rgb_to_gray(255, 0, 0) - 76.245).abs() < 0.01);
        assert!((rgb_to_gray(0, 255, 0) - 149.685).abs() < 0.01);
        assert!((rgb_to_gray(0, 0, 255) - 29.07).abs() < 0.01);
    }

    #[test]
    fn test_to_lab_dimensions_preserved() {
        let img = RgbImage::from_fn(7, 5, |x, y| ((x * 30) as u8, (y * 40) as u8, 0)).unwrap();
        let lab = to_lab(&img).unwrap();
        assert_eq!(lab.dimensions(), (7, 5));
    }

    #[test]
    fn test_image_roundtrip() {
        let img = RgbImage::from_fn(16, 16, |x, y| {
            (((x * 16) as u8), ((y * 16) as u8), ((x + y) * 8) as u8)
        })
        .unwrap();
        let back = to_rgb(&to_lab(&img).unwrap()).unwrap();
        for ((r, g, b), (r2, g2, b2)) in img.pixels().zip(back.pixels()) {
            assert!((r as i32 - r2 as i32).abs() <= 3);
            assert!((g as i32 - g2 as i32).abs() <= 3);
            assert!((b as i32 - b2 as i32).abs() <= 3);
        }
    }
}
