//! # gcounsel-select
//!
//! Turns a gene's raw variant-overlap records into a capped, de-duplicated list of
//! variants for the consequence categories the user asked for.
//!
//! ## Rules
//!
//! - records are scanned in source order; the first record with a given identifier wins
//! - a record is claimed by the first requested category (in caller order) that it
//!   matches and that still has room under the cap; it is never emitted twice
//! - matching is a case-insensitive, unanchored substring test against each consequence
//!   annotation, so `"variant"` matches `"missense_variant"`
//! - scanning stops as soon as every category has reached the cap
//! - an empty result is [`Selection::NoMatch`]
//!
//! ## Example
//!
//! ```rust
//! use gcounsel_core::models::RawVariant;
//! use gcounsel_select::{ConsequenceFilter, select};
//!
//! let records: Vec<RawVariant> = serde_json::from_str(r#"[
//!     {"id": "rs1", "seq_region_name": "17", "consequence_type": "stop_gained"},
//!     {"id": "rs2", "seq_region_name": "17", "consequence_type": "intron_variant"}
//! ]"#).unwrap();
//!
//! let filter = ConsequenceFilter::new(["stop_gained"], 5).unwrap();
//! let selection = select(&records, &filter);
//! assert_eq!(selection.len(), 1);
//! ```
pub mod consequences;
pub mod errors;
pub mod filter;
pub mod selector;

// re-export things
pub use consequences::*;
pub use errors::*;
pub use filter::*;
pub use selector::*;

pub use gcounsel_core::models::Selection;

// constants
pub mod consts {
    /// Default number of variants kept per consequence category.
    pub const DEFAULT_LIMIT: usize = 5;

    /// Category used when the caller does not ask for any.
    pub const DEFAULT_CONSEQUENCE: &str = "stop_gained";
}
