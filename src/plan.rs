//! Document plan construction.
//!
//! Turns an ordered image list and a shared [`SizingPolicy`] into an
//! ordered sequence of page-construction instructions, one page per image.
//! The plan is pure data for a renderer to consume: no instruction depends
//! on any other, so pages may be emitted (or computed) in any order even
//! though the plan itself preserves input order.

use alloc::vec::Vec;

use crate::geometry::{LayoutError, PageGeometry, PixelSize, SizingPolicy};

/// One page of the document: where image `image_index` goes and on what page.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PageInstruction {
    /// Page dimensions and placement rectangle.
    pub geometry: PageGeometry,
    /// Index of the image in the input sequence.
    pub image_index: usize,
}

/// Ordered page-construction instructions for a whole document.
///
/// Computed fresh per export request and immutable afterwards; a renderer
/// consumes it once and discards it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentPlan {
    pages: Vec<PageInstruction>,
}

impl DocumentPlan {
    /// Number of pages (equals the number of input images).
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the plan has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The instructions, in input order.
    pub fn pages(&self) -> &[PageInstruction] {
        &self.pages
    }

    /// Iterate over instructions in input order.
    pub fn iter(&self) -> core::slice::Iter<'_, PageInstruction> {
        self.pages.iter()
    }
}

impl<'a> IntoIterator for &'a DocumentPlan {
    type Item = &'a PageInstruction;
    type IntoIter = core::slice::Iter<'a, PageInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build a document plan: one instruction per image, input order preserved,
/// the shared policy applied independently to each image.
///
/// Fails on the first invalid image with no partial plan — a document with
/// missing pages is not a meaningful result. An empty input yields an empty
/// plan; rejecting empty export requests is the caller's concern.
///
/// ```
/// use pagefit::{PixelSize, SizingPolicy, plan};
///
/// let images = [PixelSize::new(800, 600), PixelSize::new(600, 800)];
/// let doc = plan::build(&SizingPolicy::FitToImage, &images).unwrap();
///
/// assert_eq!(doc.len(), 2);
/// assert_eq!(doc.pages()[1].image_index, 1);
/// // Each page takes its size from its own image.
/// assert_ne!(doc.pages()[0].geometry.page, doc.pages()[1].geometry.page);
/// ```
pub fn build(
    policy: &SizingPolicy,
    images: &[PixelSize],
) -> Result<DocumentPlan, LayoutError> {
    let mut pages = Vec::with_capacity(images.len());
    for (image_index, &image) in images.iter().enumerate() {
        pages.push(PageInstruction {
            geometry: policy.compute(image)?,
            image_index,
        });
    }
    Ok(DocumentPlan { pages })
}
