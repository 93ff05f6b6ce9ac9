//! Environment variables, endpoints and request constants for the gene data client.

// Environment variable names

/// Environment variable name for overriding the Ensembl REST endpoint.
///
/// When set, this overrides the default endpoint (`https://rest.ensembl.org`).
///
/// # Example
///
/// ```bash
/// export GCOUNSEL_ENSEMBL_API=https://grch37.rest.ensembl.org
/// ```
pub const ENSEMBL_API_ENV: &str = "GCOUNSEL_ENSEMBL_API";

/// Environment variable name for overriding the mygene.info endpoint.
///
/// When set, this overrides the default endpoint (`https://mygene.info`).
pub const MYGENE_API_ENV: &str = "GCOUNSEL_MYGENE_API";

// Defaults

pub const DEFAULT_ENSEMBL_API: &str = "https://rest.ensembl.org";

pub const DEFAULT_MYGENE_API: &str = "https://mygene.info";

/// Species segment of the Ensembl symbol lookup.
pub const DEFAULT_SPECIES: &str = "homo_sapiens";

/// Fields requested from mygene.info.
pub const MYGENE_FIELDS: &str = "symbol,name,summary";

pub const USER_AGENT: &str = concat!("gcounsel/", env!("CARGO_PKG_VERSION"));
