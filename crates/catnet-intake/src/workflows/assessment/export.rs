//! Narrow boundary to the external rasterize-then-assemble capability. The
//! core never renders pixels or writes PDF bytes itself; it drives the two
//! collaborators in strict page order and reports failures as non-fatal,
//! retryable errors.

use super::report::views::{ReportDocument, ReportPage};

/// Bitmap produced by rasterizing one report page at a fixed scale factor.
/// Dimensions are deterministic for a given page's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    pub page_number: usize,
    pub width_px: u32,
    pub height_px: u32,
    pub bytes: Vec<u8>,
}

/// Assembled multi-page document ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub file_name: String,
    pub page_count: usize,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    #[error("failed to rasterize page {page}: {reason}")]
    Rasterize { page: usize, reason: String },
    #[error("failed to assemble document: {0}")]
    Assemble(String),
}

/// Renders one composed page to a bitmap.
pub trait PageRasterizer {
    fn rasterize(&self, page_number: usize, page: &ReportPage) -> Result<PageImage, ExportError>;
}

/// Stitches rasterized pages into a single downloadable document.
pub trait DocumentAssembler {
    fn assemble(
        &self,
        file_name: &str,
        pages: Vec<PageImage>,
    ) -> Result<ExportedDocument, ExportError>;
}

/// Rasterize every page in document order (1 before 2 before 3 before 4) and
/// hand the results to the assembler. The first failure aborts the export;
/// the caller may simply retry the whole action.
pub fn export_document<R, A>(
    document: &ReportDocument,
    rasterizer: &R,
    assembler: &A,
) -> Result<ExportedDocument, ExportError>
where
    R: PageRasterizer,
    A: DocumentAssembler,
{
    let mut images = Vec::with_capacity(document.pages.len());
    for (index, page) in document.pages.iter().enumerate() {
        images.push(rasterizer.rasterize(index + 1, page)?);
    }

    assembler.assemble(&document.file_name, images)
}
