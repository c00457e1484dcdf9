//! String-valued settings resolution.
//!
//! Settings UIs hand the engine plain strings — a page-size choice
//! (`"a4"`, `"letter"`, `"fit"`) and a margin choice (`"none"`, `"small"`,
//! `"medium"`). This module resolves such a pair into a validated
//! [`SizingPolicy`], enforcing at this boundary the rule that a
//! fit-to-image page carries no margin: a margin requested alongside
//! `"fit"` is dropped and surfaced as a warning instead of silently
//! vanishing.
//!
//! # Example
//!
//! ```
//! use pagefit::settings;
//! use pagefit::{Margin, PageSize, SizingPolicy};
//!
//! let res = settings::resolve("a4", "small").unwrap();
//! assert!(res.warnings.is_empty());
//! assert_eq!(
//!     res.policy,
//!     SizingPolicy::fixed(PageSize::A4, Margin::Small)
//! );
//!
//! let res = settings::resolve("fit", "medium").unwrap();
//! assert_eq!(res.policy, SizingPolicy::FitToImage);
//! assert_eq!(res.warnings.len(), 1);
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::geometry::{LayoutError, Margin, PageSize, SizingPolicy};

/// Page-size name selecting [`SizingPolicy::FitToImage`].
pub const FIT_PAGE_NAME: &str = "fit";

/// Result of resolving a settings pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The validated policy.
    pub policy: SizingPolicy,
    /// Non-fatal resolution warnings.
    pub warnings: Vec<ResolveWarning>,
}

/// Non-fatal warning from settings resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveWarning {
    /// A margin was requested together with the fit-to-image page size;
    /// the margin is meaningless there and was dropped.
    MarginIgnoredForFitPage {
        /// The requested margin value, as given.
        margin: String,
    },
    /// The margin name was not recognized; no margin is applied.
    MarginNotRecognized {
        /// The requested margin value, as given.
        margin: String,
    },
}

/// Resolve a page-size / margin name pair into a [`SizingPolicy`].
///
/// Names are trimmed and matched ASCII-case-insensitively. An unknown
/// page-size name is a hard [`LayoutError::UnknownPageSize`] — unlike a
/// margin, it has no sensible fallback. An unknown or dropped margin is a
/// warning, not an error.
pub fn resolve(page_size: &str, margin: &str) -> Result<Resolution, LayoutError> {
    let page_name = page_size.trim();
    let margin_name = margin.trim();
    let mut warnings = Vec::new();

    if page_name.eq_ignore_ascii_case(FIT_PAGE_NAME) {
        if !margin_name.is_empty() && !margin_name.eq_ignore_ascii_case("none") {
            warnings.push(ResolveWarning::MarginIgnoredForFitPage {
                margin: margin_name.to_string(),
            });
        }
        return Ok(Resolution {
            policy: SizingPolicy::FitToImage,
            warnings,
        });
    }

    let page = PageSize::by_name(page_name)?;
    let margin = match parse_margin(margin_name) {
        Some(m) => m,
        None => {
            warnings.push(ResolveWarning::MarginNotRecognized {
                margin: margin_name.to_string(),
            });
            Margin::None
        }
    };

    Ok(Resolution {
        policy: SizingPolicy::Fixed { page, margin },
        warnings,
    })
}

/// An empty name counts as "none": an unset margin is not worth a warning.
fn parse_margin(name: &str) -> Option<Margin> {
    if name.is_empty() || name.eq_ignore_ascii_case("none") {
        Some(Margin::None)
    } else if name.eq_ignore_ascii_case("small") {
        Some(Margin::Small)
    } else if name.eq_ignore_ascii_case("medium") {
        Some(Margin::Medium)
    } else {
        None
    }
}
