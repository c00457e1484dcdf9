//! Page geometry computation for image placement.
//!
//! Computes page dimensions and placement rectangles from a sizing policy
//! and an image's pixel dimensions. Pure geometry — no pixel operations,
//! no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use pagefit::{Margin, PageSize, PixelSize, SizingPolicy};
//!
//! let geo = SizingPolicy::fixed(PageSize::A4, Margin::Medium)
//!     .compute(PixelSize::new(4000, 1000))
//!     .unwrap();
//!
//! // Wide image: width constrains inside the 170×257mm usable area.
//! assert_eq!(geo.placement.width, 170.0);
//! assert_eq!(geo.placement.height, 42.5);
//! assert_eq!(geo.placement.x, 20.0);
//! ```

#[cfg(not(feature = "std"))]
use num_traits::Float;

/// Millimetres per pixel at 96 DPI (25.4mm / 96px).
///
/// Used by [`SizingPolicy::FitToImage`] to derive page dimensions directly
/// from pixel dimensions.
pub const PX_TO_MM: f64 = 0.264583;

/// Width × height of a decoded image, in pixels.
///
/// Source of truth for the image's aspect ratio. Construction does not
/// validate — zero dimensions are rejected by [`SizingPolicy::compute`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelSize {
    /// Create a new pixel size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width / height as a ratio. Meaningless when either dimension is zero.
    pub fn ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Width × height in millimetres.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MmSize {
    /// Width in millimetres.
    pub width: f64,
    /// Height in millimetres.
    pub height: f64,
}

impl MmSize {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in millimetre page coordinates. Origin is the
/// page's top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MmRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl MmRect {
    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether `other` lies entirely within this rect, allowing `epsilon`
    /// of overhang per edge for floating-point rounding.
    pub fn contains(&self, other: &MmRect, epsilon: f64) -> bool {
        other.x >= self.x - epsilon
            && other.y >= self.y - epsilon
            && other.right() <= self.right() + epsilon
            && other.bottom() <= self.bottom() + epsilon
    }
}

/// A named standard page size with fixed physical dimensions.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PageSize {
    /// ISO A4: 210 × 297 mm.
    A4,
    /// US Letter: 215.9 × 279.4 mm.
    Letter,
}

impl PageSize {
    /// Physical dimensions in millimetres.
    pub const fn dimensions_mm(self) -> MmSize {
        match self {
            Self::A4 => MmSize::new(210.0, 297.0),
            Self::Letter => MmSize::new(215.9, 279.4),
        }
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A4 => "a4",
            Self::Letter => "letter",
        }
    }

    /// Look up a page size by name (ASCII case-insensitive, trimmed).
    ///
    /// ```
    /// use pagefit::{LayoutError, PageSize};
    ///
    /// assert_eq!(PageSize::by_name(" Letter "), Ok(PageSize::Letter));
    /// assert_eq!(PageSize::by_name("a5"), Err(LayoutError::UnknownPageSize));
    /// ```
    pub fn by_name(name: &str) -> Result<Self, LayoutError> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("a4") {
            Ok(Self::A4)
        } else if name.eq_ignore_ascii_case("letter") {
            Ok(Self::Letter)
        } else {
            Err(LayoutError::UnknownPageSize)
        }
    }
}

/// Margin applied on all four sides of a fixed-size page.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Margin {
    /// No margin.
    #[default]
    None,
    /// 10 mm on every side.
    Small,
    /// 20 mm on every side.
    Medium,
    /// Explicit margin in millimetres. Must be finite and non-negative;
    /// anything else is rejected at compute time, as is any margin that
    /// leaves no usable area.
    Custom(f64),
}

impl Margin {
    /// Margin width in millimetres.
    pub const fn mm(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Small => 10.0,
            Self::Medium => 20.0,
            Self::Custom(mm) => mm,
        }
    }
}

/// Rule determining a page's physical dimensions and the image's placement
/// on it.
///
/// `FitToImage` structurally carries no margin — the page equals the image,
/// so a margin would be meaningless. That invariant holds by construction
/// rather than by validation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SizingPolicy {
    /// A named standard page; the image is scaled to fit the usable area
    /// (page minus margins) preserving aspect ratio, and centered.
    Fixed {
        /// The page standard.
        page: PageSize,
        /// Margin on all four sides.
        margin: Margin,
    },
    /// Page dimensions are derived per-image from the image's own pixel
    /// dimensions via [`PX_TO_MM`]; the placement fills the page exactly.
    FitToImage,
}

impl SizingPolicy {
    /// Fixed-page policy with the given standard and margin.
    pub const fn fixed(page: PageSize, margin: Margin) -> Self {
        Self::Fixed { page, margin }
    }

    /// Compute the page geometry for one image.
    ///
    /// Pure and deterministic: identical inputs produce bit-identical
    /// output. Fails without computing anything when the image has a zero
    /// dimension or the margin leaves no usable area.
    pub fn compute(&self, image: PixelSize) -> Result<PageGeometry, LayoutError> {
        if image.width == 0 || image.height == 0 {
            return Err(LayoutError::ZeroImageDimension);
        }

        match *self {
            Self::FitToImage => {
                let page = MmSize::new(
                    image.width as f64 * PX_TO_MM,
                    image.height as f64 * PX_TO_MM,
                );
                Ok(PageGeometry {
                    page,
                    placement: MmRect::new(0.0, 0.0, page.width, page.height),
                })
            }

            Self::Fixed { page, margin } => {
                let page = page.dimensions_mm();
                let margin = margin.mm();
                let max_w = page.width - 2.0 * margin;
                let max_h = page.height - 2.0 * margin;
                // Rejected, never clamped. The negated comparisons also
                // catch a NaN margin.
                if !(margin >= 0.0) || !(max_w > 0.0) || !(max_h > 0.0) {
                    return Err(LayoutError::MarginExceedsPage);
                }

                let (w, h) = fit_within(image.ratio(), max_w, max_h);
                Ok(PageGeometry {
                    page,
                    placement: MmRect::new(
                        (page.width - w) / 2.0,
                        (page.height - h) / 2.0,
                        w,
                        h,
                    ),
                })
            }
        }
    }
}

/// Computed page geometry for one image.
///
/// The placement rectangle lies fully within the page and preserves the
/// image's pixel aspect ratio (exactly equal to the page under
/// [`SizingPolicy::FitToImage`]).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PageGeometry {
    /// Page dimensions in millimetres.
    pub page: MmSize,
    /// Where the image is drawn on the page.
    pub placement: MmRect,
}

impl PageGeometry {
    /// Whether the placement covers the whole page (no blank border).
    pub fn fills_page(&self) -> bool {
        self.placement.x == 0.0
            && self.placement.y == 0.0
            && self.placement.width == self.page.width
            && self.placement.height == self.page.height
    }

    /// Relative deviation of the placement's aspect ratio from the image's
    /// pixel aspect ratio. Stays within floating-point rounding for any
    /// geometry this crate computes.
    pub fn ratio_deviation(&self, image: PixelSize) -> f64 {
        let placed = self.placement.width / self.placement.height;
        ((placed - image.ratio()) / image.ratio()).abs()
    }
}

/// Layout computation error.
///
/// All failures are local and synchronous; none is transient. Plan
/// construction propagates the first error it hits and produces no
/// partial plan.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// Image has zero width or height.
    ZeroImageDimension,
    /// Margin leaves no usable area on the page (or is negative/NaN).
    MarginExceedsPage,
    /// Page size name is not in the standard table.
    UnknownPageSize,
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroImageDimension => f.write_str("image has a zero pixel dimension"),
            Self::MarginExceedsPage => f.write_str("margin leaves no usable area on the page"),
            Self::UnknownPageSize => f.write_str("page size name is not a known standard"),
        }
    }
}

impl core::error::Error for LayoutError {}

// ============================================================================
// Internal geometry
// ============================================================================

/// Largest width/height of the given aspect ratio that fits in the box.
///
/// Width-first with height fallback: the first step always satisfies the
/// width bound; the second only triggers when height still overflows, and
/// re-deriving width from the clamped height can only shrink it. One of
/// the two steps always yields the binding constraint, even for extreme
/// ratios.
fn fit_within(ratio: f64, max_w: f64, max_h: f64) -> (f64, f64) {
    let mut w = max_w;
    let mut h = w / ratio;
    if h > max_h {
        h = max_h;
        w = h * ratio;
    }
    (w, h)
}
