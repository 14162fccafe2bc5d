//! Huepick - Saliency-weighted color palette extraction
//!
//! Huepick extracts a small palette of diverse, visually prominent
//! colors from an image. Instead of clustering all pixels equally, it
//! first estimates how salient each pixel is and then picks colors
//! that are both prominent and far apart in perceptual (CIE L*a*b*)
//! space.
//!
//! # Overview
//!
//! The pipeline has two stages:
//!
//! - **Saliency estimation** ([`saliency`]): blends a frequency-tuned
//!   color-rarity cue with an edge-contrast cue into a per-pixel map
//!   in [0, 1]
//! - **Palette extraction** ([`palette`]): samples candidate pixels
//!   from a mid-saliency percentile band and greedily selects colors
//!   by maximal weighted Lab distance
//!
//! # Example
//!
//! ```
//! use huepick::palette::{ExtractOptions, extract_palette};
//! use huepick::saliency::{SaliencyOptions, combined_saliency};
//! use huepick::RgbImage;
//!
//! let img = RgbImage::from_fn(64, 64, |x, y| {
//!     if x < 32 { (220, 40, 40) } else { ((y * 4) as u8, 80, 200) }
//! }).unwrap();
//!
//! let map = combined_saliency(&img, &SaliencyOptions::default()).unwrap();
//! let options = ExtractOptions { seed: Some(0), ..Default::default() };
//! let palette = extract_palette(&img, &map, &options).unwrap();
//! assert_eq!(palette.requested, 5);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use huepick_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use huepick_color as color;
pub use huepick_io as io;
pub use huepick_palette as palette;
pub use huepick_saliency as saliency;
