//! # gcounsel-session
//!
//! Runs one counseling session as explicit, finite stages:
//!
//! 1. [`Session::collect_input`]: typed gene names plus names mined from documents
//! 2. [`Session::fetch`]: metadata, function and selected mutations per gene
//! 3. [`Session::render`]: the PDF report
//! 4. [`Session::ask`]: follow-up questions answered against the fetched entries
//!
//! Collaborators (gene source, assistant, entity extractor, layout) are handed in per call
//! through a [`SessionContext`]; the session itself only holds state.
//!
//! ```rust,no_run
//! use gcounsel_fetch::GeneClientBuilder;
//! use gcounsel_mine::SymbolPatternExtractor;
//! use gcounsel_report::LayoutConfig;
//! use gcounsel_select::ConsequenceFilter;
//! use gcounsel_session::{Session, SessionContext};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeneClientBuilder::default().finish()?;
//! let extractor = SymbolPatternExtractor::default();
//! let layout = LayoutConfig::default();
//! let ctx = SessionContext::new(&client, &extractor, &layout);
//!
//! let mut session = Session::new(ConsequenceFilter::new(["stop_gained"], 5)?);
//! session.collect_input(&ctx, &["BRCA1", "TP53"], &[] as &[PathBuf])?;
//! session.fetch(&ctx)?;
//! session.render(&ctx)?.write_to("report.pdf".as_ref())?;
//! # Ok(())
//! # }
//! ```
pub mod config;
pub mod context;
pub mod errors;
pub mod session;

pub use config::*;
pub use context::*;
pub use errors::*;
pub use session::*;
