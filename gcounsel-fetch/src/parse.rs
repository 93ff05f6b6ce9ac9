//! Decoding of Ensembl and mygene.info response bodies.
//!
//! Kept free of any HTTP concerns so the wire formats can be tested on fixtures.

use serde::Deserialize;

use gcounsel_core::models::{GeneFunction, GeneMetadata, RawVariant};

/// `GET /lookup/symbol/{species}/{symbol}` response, reduced to what gcounsel reads.
#[derive(Deserialize, Debug)]
struct EnsemblLookupRecord {
    id: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    seq_region_name: Option<String>,
    #[serde(default)]
    start: Option<u64>,
    #[serde(default)]
    end: Option<u64>,
}

impl From<EnsemblLookupRecord> for GeneMetadata {
    fn from(record: EnsemblLookupRecord) -> Self {
        GeneMetadata {
            stable_id: record.id,
            display_name: record.display_name,
            chromosome: record.seq_region_name,
            start: record.start,
            end: record.end,
        }
    }
}

#[derive(Deserialize, Debug)]
struct MyGeneQueryResponse {
    #[serde(default)]
    hits: Vec<GeneFunction>,
}

pub fn parse_gene_lookup(body: &str) -> Result<GeneMetadata, serde_json::Error> {
    let record: EnsemblLookupRecord = serde_json::from_str(body)?;
    Ok(record.into())
}

pub fn parse_variant_overlap(body: &str) -> Result<Vec<RawVariant>, serde_json::Error> {
    serde_json::from_str(body)
}

///
/// Best hit of a mygene.info query, or `None` when the query matched nothing.
///
pub fn parse_gene_function(body: &str) -> Result<Option<GeneFunction>, serde_json::Error> {
    let response: MyGeneQueryResponse = serde_json::from_str(body)?;
    Ok(response.hits.into_iter().next())
}
