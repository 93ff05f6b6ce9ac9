//! # gcounsel-report
//!
//! Lays out a sequence of [`GeneReportEntry`] values onto letter-sized pages and
//! serializes the result as a PDF.
//!
//! Layout and serialization are separate steps:
//!
//! - [`paginate`] walks the entries with a single vertical cursor and produces a
//!   [`Report`]: a list of pages, each a list of positioned text runs and lines
//! - [`Report::to_pdf`] turns that into PDF bytes with `lopdf`
//!
//! Whenever the cursor drops below the bottom margin, the current page is closed, a new
//! one is opened and the report title is drawn again at the top.
//!
//! ## Example
//!
//! ```rust
//! use gcounsel_core::models::{GeneReportEntry, Lookup};
//! use gcounsel_report::{LayoutConfig, paginate};
//!
//! let entries = vec![GeneReportEntry::new("TP53", Lookup::NotFound, Lookup::NotFound, Lookup::NotFound)];
//! let report = paginate(&entries, &LayoutConfig::default());
//!
//! assert_eq!(report.pages.len(), 1);
//! let pdf = report.to_pdf().unwrap();
//! assert!(pdf.starts_with(b"%PDF"));
//! ```
//!
//! [`GeneReportEntry`]: gcounsel_core::models::GeneReportEntry
pub mod artifact;
pub mod errors;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod wrap;

// re-export things
pub use artifact::*;
pub use errors::*;
pub use layout::*;
pub use metrics::Font;
pub use wrap::wrap_text;

/// Lay out `entries` and serialize them to PDF bytes in one step.
pub fn render_pdf(
    entries: &[gcounsel_core::models::GeneReportEntry],
    config: &LayoutConfig,
) -> Result<Vec<u8>, ReportError> {
    paginate(entries, config).to_pdf()
}

// constants
pub mod consts {
    pub const REPORT_TITLE: &str = "Genetic Counseling Report";
    pub const DEFAULT_REPORT_FILE_NAME: &str = "genetic_counseling_report.pdf";
    pub const PDF_MIME_TYPE: &str = "application/pdf";

    /// US letter, in points.
    pub const LETTER_WIDTH: f32 = 612.0;
    pub const LETTER_HEIGHT: f32 = 792.0;
}
