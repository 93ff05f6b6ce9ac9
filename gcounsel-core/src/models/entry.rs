use super::gene::{GeneFunction, GeneMetadata};
use super::lookup::Lookup;
use super::variant::{Selection, Variant};

///
/// Everything gathered for one requested gene: metadata, function and selected mutations.
///
/// Each part degrades independently; the report renders a placeholder section for any
/// part that is not `Found`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneReportEntry {
    /// The gene name as the user requested it.
    pub query: String,
    pub metadata: Lookup<GeneMetadata>,
    pub function: Lookup<GeneFunction>,
    pub mutations: Lookup<Selection>,
}

impl GeneReportEntry {
    pub fn new(
        query: impl Into<String>,
        metadata: Lookup<GeneMetadata>,
        function: Lookup<GeneFunction>,
        mutations: Lookup<Selection>,
    ) -> Self {
        GeneReportEntry {
            query: query.into(),
            metadata,
            function,
            mutations,
        }
    }

    /// Symbol used in section headings: the resolved symbol, else the queried name.
    pub fn symbol(&self) -> &str {
        match &self.metadata {
            Lookup::Found(meta) if meta.display_name.is_some() => meta.symbol(),
            _ => &self.query,
        }
    }

    /// Selected variants, or `None` when there is nothing to list.
    pub fn variants(&self) -> Option<Vec<&Variant>> {
        match &self.mutations {
            Lookup::Found(Selection::Matched(matches)) => {
                Some(matches.iter().map(|m| &m.variant).collect())
            }
            _ => None,
        }
    }

    /// One-line human description of the mutation outcome.
    pub fn mutation_summary(&self) -> String {
        match &self.mutations {
            Lookup::Found(Selection::Matched(matches)) => {
                format!("{} mutations selected.", matches.len())
            }
            Lookup::Found(Selection::NoMatch) => {
                "No mutations found that match the criteria.".to_string()
            }
            Lookup::NotFound => "Gene information not found.".to_string(),
            Lookup::Failed(err) => format!("Error fetching mutation data: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Upstream, UpstreamError};

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_symbol_falls_back_to_query() {
        let entry = GeneReportEntry::new("BRCA9", Lookup::NotFound, Lookup::NotFound, Lookup::NotFound);
        assert_eq!(entry.symbol(), "BRCA9");
        assert_eq!(entry.variants(), None);
        assert_eq!(entry.mutation_summary(), "Gene information not found.");
    }

    #[rstest]
    fn test_symbol_prefers_resolved_name() {
        let meta = GeneMetadata {
            stable_id: "ENSG00000012048".to_string(),
            display_name: Some("BRCA1".to_string()),
            chromosome: Some("17".to_string()),
            start: None,
            end: None,
        };
        let entry = GeneReportEntry::new(
            "brca1",
            Lookup::Found(meta),
            Lookup::NotFound,
            Lookup::Found(Selection::NoMatch),
        );
        assert_eq!(entry.symbol(), "BRCA1");
        assert_eq!(
            entry.mutation_summary(),
            "No mutations found that match the criteria."
        );
    }

    #[rstest]
    fn test_failed_mutations_summary_mentions_upstream() {
        let entry = GeneReportEntry::new(
            "TP53",
            Lookup::NotFound,
            Lookup::NotFound,
            Lookup::Failed(UpstreamError::new(Upstream::Ensembl, Some(502), "bad gateway")),
        );
        assert!(entry.mutation_summary().contains("status 502"));
    }
}
