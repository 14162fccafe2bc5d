//! Huepick Core - Basic data structures for palette extraction
//!
//! This crate provides the containers shared by the huepick pipeline:
//!
//! - [`RgbImage`] - 8-bit RGB input image
//! - [`LabImage`] / [`Lab`] - floating-point CIE L*a*b* image and sample
//! - [`ScalarField`] - 2D `f32` field, used for saliency maps
//! - [`FieldStats`] / [`rank_value`] - distribution statistics and
//!   percentile lookups
//!
//! All entities are transient: they are derived per invocation of the
//! pipeline and hold no process-wide state.

pub mod error;
pub mod field;
pub mod lab;
pub mod rgb;
pub mod stats;

pub use error::{Error, Result};
pub use field::ScalarField;
pub use lab::{Lab, LabImage};
pub use rgb::RgbImage;
pub use stats::{FieldStats, rank_value};
