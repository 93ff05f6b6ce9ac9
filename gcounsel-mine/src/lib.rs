//! # gcounsel-mine
//!
//! Finds gene names in documents a user uploads.
//!
//! Two steps, each behind its own seam:
//!
//! - [`extract_text`]: plain text out of a `.txt`/`.md` or `.pdf` file
//! - [`GeneEntityExtractor`]: gene names out of that text; [`SymbolPatternExtractor`]
//!   recognizes HGNC-style symbols
//!
//! An unrecognized file type is a warning, not an error: [`mine_gene_names`] returns an
//! empty list for it.
pub mod consts;
pub mod document;
pub mod entities;
pub mod errors;

pub use document::*;
pub use entities::*;
pub use errors::*;

use std::path::Path;

use log::{info, warn};

///
/// Extract gene names from the document at `path`.
///
/// # Returns
/// - the names found, de-duplicated in order of first appearance; empty for an
///   unsupported file type
///
pub fn mine_gene_names<E: GeneEntityExtractor + ?Sized>(
    path: &Path,
    extractor: &E,
) -> Result<Vec<String>, MineError> {
    let text = match extract_text(path) {
        Ok(text) => text,
        Err(MineError::UnsupportedInput(ext)) => {
            warn!(
                "Unsupported file type `{}` for {}; no genes extracted",
                ext,
                path.display()
            );
            return Ok(Vec::new());
        }
        Err(err) => return Err(err),
    };

    let genes = extractor.extract(&text);
    info!("Found {} gene names in {}", genes.len(), path.display());
    Ok(genes)
}
