use log::{info, warn};

use gcounsel_core::errors::UpstreamError;
use gcounsel_core::models::{GeneFunction, GeneMetadata, GeneReportEntry, Lookup, RawVariant, Selection};
use gcounsel_select::{ConsequenceFilter, select};

///
/// Where gene facts come from.
///
/// Implemented over HTTP by [`crate::client::GeneClient`]; tests substitute in-memory
/// sources.
///
pub trait GeneSource {
    /// Resolve a gene symbol to its metadata.
    fn lookup_gene(&self, name: &str) -> Lookup<GeneMetadata>;

    /// Best-match function summary for a gene symbol.
    fn lookup_function(&self, name: &str) -> Lookup<GeneFunction>;

    /// Variant-overlap records for a stable gene id, in source order.
    fn lookup_variants(&self, gene_id: &str) -> Result<Vec<RawVariant>, UpstreamError>;
}

///
/// Fetch and filter the variants of an already looked-up gene.
///
/// A gene that was not resolved yields `NotFound` (or the original failure) without
/// another request.
///
pub fn fetch_mutations<S: GeneSource + ?Sized>(
    source: &S,
    metadata: &Lookup<GeneMetadata>,
    filter: &ConsequenceFilter,
) -> Lookup<Selection> {
    let meta = match metadata {
        Lookup::Found(meta) => meta,
        Lookup::NotFound => return Lookup::NotFound,
        Lookup::Failed(err) => return Lookup::Failed(err.clone()),
    };

    info!("Fetching mutations for Gene ID: {}", meta.stable_id);
    match source.lookup_variants(&meta.stable_id) {
        Ok(records) => {
            info!("Received {} mutations from Ensembl.", records.len());
            Lookup::Found(select(&records, filter))
        }
        Err(err) => {
            warn!(
                "Error fetching mutation data from Ensembl for gene ID {}: {}",
                meta.stable_id, err
            );
            Lookup::Failed(err)
        }
    }
}

///
/// Gather everything for one requested gene: metadata, function, then mutations.
///
pub fn fetch_entry<S: GeneSource + ?Sized>(
    source: &S,
    name: &str,
    filter: &ConsequenceFilter,
) -> GeneReportEntry {
    let metadata = source.lookup_gene(name);
    let function = source.lookup_function(name);
    let mutations = fetch_mutations(source, &metadata, filter);
    GeneReportEntry::new(name, metadata, function, mutations)
}
