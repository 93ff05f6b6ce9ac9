//! # gcounsel-fetch
//!
//! Blocking REST client for the two public data sources gcounsel reads:
//!
//! - **Ensembl** (`rest.ensembl.org`): symbol lookup and variant overlap
//! - **mygene.info**: gene function summaries
//!
//! The [`source::GeneSource`] trait is the seam the rest of the workspace programs
//! against; [`client::GeneClient`] is the HTTP implementation.
pub mod client;
pub mod consts;
pub mod errors;
pub mod parse;
pub mod source;
pub mod utils;

pub use client::{GeneClient, GeneClientBuilder};
pub use errors::FetchError;
pub use source::{GeneSource, fetch_entry, fetch_mutations};
