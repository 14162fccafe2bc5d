//! Huepick Color - Color space conversion and perceptual distance
//!
//! This crate provides the color machinery of the extraction pipeline:
//!
//! - **Color space conversion** ([`colorspace`]): sRGB <-> CIE L*a*b*
//!   (staged through an 8-bit Lab encoding with gamut clipping),
//!   plus BT.601 grayscale
//! - **Perceptual distance** ([`distance`]): saliency-weighted Lab
//!   distance used by the palette selector

pub mod colorspace;
pub mod distance;
pub mod error;

// Re-export core types
pub use huepick_core;

pub use error::{ColorError, ColorResult};

pub use colorspace::{lab_to_rgb, rgb_to_gray, rgb_to_lab, to_gray, to_lab, to_rgb};
pub use distance::{LIGHTNESS_WEIGHT, weighted_distance};
