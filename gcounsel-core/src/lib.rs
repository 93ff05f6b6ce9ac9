//! # gcounsel-core
//!
//! Shared data model for the gcounsel workspace.
//!
//! Every other crate speaks in terms of these types:
//!
//! - **`RawVariant`**: one record of an Ensembl variant-overlap response, as it arrives
//! - **`Variant`**: the normalized, immutable mutation record that ends up in a report
//! - **`GeneMetadata`** / **`GeneFunction`**: per-gene facts from Ensembl and mygene.info
//! - **`Lookup`**: the outcome of asking an upstream source about one gene
//! - **`Selection`**: the outcome of filtering a gene's variants by consequence
//! - **`GeneReportEntry`**: everything known about one requested gene
//!
//! Upstream failures are modelled as data (`Lookup::NotFound`, `Lookup::Failed`,
//! `Selection::NoMatch`) so that one gene failing never aborts a whole session.
//!
//! ## Example
//!
//! ```rust
//! use gcounsel_core::models::{RawVariant, Variant};
//!
//! let raw: RawVariant = serde_json::from_str(
//!     r#"{"id": "rs28897696", "seq_region_name": "17", "consequence_type": "stop_gained", "alleles": ["G", "T"]}"#,
//! ).unwrap();
//!
//! let variant = Variant::from_raw(&raw);
//! assert_eq!(variant.id, "rs28897696");
//! assert_eq!(variant.allele, "G, T");
//! ```
pub mod consts;
pub mod errors;
pub mod models;

pub use errors::*;
pub use models::*;
