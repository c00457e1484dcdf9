//! Page layout computation for packing images into multi-page documents.
//!
//! Pure geometry — no image decoding, no rendering, no allocations in the
//! core, `no_std` compatible. Given an image's pixel dimensions and a
//! page-sizing policy, the engine deterministically computes the page
//! dimensions in millimetres and the placement rectangle where the image
//! should be drawn, and turns an ordered image list into an ordered plan
//! of page-construction instructions for a downstream renderer.
//!
//! # Modules
//!
//! - [`geometry`] — sizing policies, margins, per-image page geometry
//! - [`plan`] — document plan construction, one instruction per image
//! - [`settings`] — string-valued settings resolution (feature `settings`)
//!
//! # Example
//!
//! ```
//! use pagefit::{Margin, PageSize, PixelSize, SizingPolicy};
//!
//! let policy = SizingPolicy::fixed(PageSize::A4, Margin::Small);
//! let geo = policy.compute(PixelSize::new(800, 600)).unwrap();
//!
//! // A4 page, image scaled into the usable area and centered.
//! assert_eq!(geo.page.width, 210.0);
//! assert_eq!(geo.page.height, 297.0);
//! assert_eq!(geo.placement.width, 190.0);
//! assert_eq!(geo.placement.x, 10.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod geometry;
#[cfg(feature = "alloc")]
pub mod plan;
#[cfg(feature = "settings")]
pub mod settings;

// Re-exports: core types from geometry module
pub use geometry::{
    LayoutError, Margin, MmRect, MmSize, PX_TO_MM, PageGeometry, PageSize, PixelSize, SizingPolicy,
};
#[cfg(feature = "alloc")]
pub use plan::{DocumentPlan, PageInstruction};
