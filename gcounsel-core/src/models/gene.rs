use serde::{Deserialize, Serialize};

use crate::consts::{NO_FUNCTION_SUMMARY, NOT_AVAILABLE};

///
/// Gene metadata as resolved by the Ensembl symbol lookup.
///
/// `stable_id` (e.g. `ENSG00000012048`) is the key used for the variant-overlap request.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneMetadata {
    pub stable_id: String,
    pub display_name: Option<String>,
    pub chromosome: Option<String>,
    pub start: Option<u64>,
    pub end: Option<u64>,
}

impl GeneMetadata {
    ///
    /// Gene symbol. Ensembl reports the HGNC symbol as the display name.
    ///
    pub fn symbol(&self) -> &str {
        self.display_name.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    ///
    /// Labelled attributes in report order.
    ///
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let or_na = |v: Option<String>| v.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        vec![
            ("Gene Name", self.symbol().to_string()),
            ("Gene Symbol", self.symbol().to_string()),
            ("Gene ID", self.stable_id.clone()),
            ("Chromosome", or_na(self.chromosome.clone())),
            ("Start", or_na(self.start.map(|s| s.to_string()))),
            ("End", or_na(self.end.map(|e| e.to_string()))),
        ]
    }
}

/// Best-match gene function record from mygene.info.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneFunction {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl GeneFunction {
    pub fn symbol(&self) -> &str {
        self.symbol.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn summary(&self) -> &str {
        self.summary.as_deref().unwrap_or(NO_FUNCTION_SUMMARY)
    }
}
