//! `fetch_entry` against an in-memory source backed by the JSON fixtures.

use std::fs::read_to_string;
use std::path::PathBuf;

use gcounsel_core::errors::{Upstream, UpstreamError};
use gcounsel_core::models::{GeneFunction, GeneMetadata, Lookup, RawVariant, Selection};
use gcounsel_fetch::parse::{parse_gene_function, parse_gene_lookup, parse_variant_overlap};
use gcounsel_fetch::{GeneSource, fetch_entry};
use gcounsel_select::ConsequenceFilter;

fn data(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("tests/data")
        .join(name);
    read_to_string(path).unwrap()
}

/// Knows BRCA1 only; `overlap_fails` makes the variant request error out.
struct FixtureSource {
    overlap_fails: bool,
}

impl GeneSource for FixtureSource {
    fn lookup_gene(&self, name: &str) -> Lookup<GeneMetadata> {
        match name {
            "BRCA1" => Lookup::Found(parse_gene_lookup(&data("ensembl_lookup_brca1.json")).unwrap()),
            _ => Lookup::NotFound,
        }
    }

    fn lookup_function(&self, name: &str) -> Lookup<GeneFunction> {
        match name {
            "BRCA1" => Lookup::Found(
                parse_gene_function(&data("mygene_query_brca1.json"))
                    .unwrap()
                    .unwrap(),
            ),
            _ => Lookup::NotFound,
        }
    }

    fn lookup_variants(&self, gene_id: &str) -> Result<Vec<RawVariant>, UpstreamError> {
        assert_eq!(gene_id, "ENSG00000012048");
        if self.overlap_fails {
            return Err(UpstreamError::new(Upstream::Ensembl, Some(503), "maintenance"));
        }
        Ok(parse_variant_overlap(&data("ensembl_overlap_brca1.json")).unwrap())
    }
}

#[test]
fn test_resolved_gene_gets_all_three_sections() {
    let source = FixtureSource { overlap_fails: false };
    let filter = ConsequenceFilter::new(["stop_gained"], 5).unwrap();

    let entry = fetch_entry(&source, "BRCA1", &filter);

    assert!(entry.metadata.is_found());
    assert!(entry.function.is_found());
    let ids: Vec<String> = entry
        .variants()
        .unwrap()
        .iter()
        .map(|v| v.id.clone())
        .collect();
    assert_eq!(ids, vec!["rs80357069", "rs80357123", "rs80356898"]);

    let second = &entry.variants().unwrap()[1];
    assert_eq!(second.allele, "G/A/T");
    assert_eq!(second.consequence_label(), "stop_gained/NMD_transcript_variant");
}

#[test]
fn test_unknown_gene_skips_variant_request() {
    let source = FixtureSource { overlap_fails: false };
    let filter = ConsequenceFilter::new(["stop_gained"], 5).unwrap();

    // lookup_variants would assert on the gene id if it were called
    let entry = fetch_entry(&source, "NOTAGENE", &filter);

    assert_eq!(entry.metadata, Lookup::NotFound);
    assert_eq!(entry.function, Lookup::NotFound);
    assert_eq!(entry.mutations, Lookup::NotFound);
}

#[test]
fn test_overlap_failure_is_kept_per_gene() {
    let source = FixtureSource { overlap_fails: true };
    let filter = ConsequenceFilter::new(["stop_gained"], 5).unwrap();

    let entry = fetch_entry(&source, "BRCA1", &filter);

    assert!(entry.metadata.is_found());
    match entry.mutations {
        Lookup::Failed(err) => assert_eq!(err.status, Some(503)),
        other => panic!("expected a failed mutation lookup, got {other:?}"),
    }
}

#[test]
fn test_no_matching_category_is_no_match() {
    let source = FixtureSource { overlap_fails: false };
    let filter = ConsequenceFilter::new(["frameshift_variant"], 5).unwrap();

    let entry = fetch_entry(&source, "BRCA1", &filter);

    assert_eq!(entry.mutations, Lookup::Found(Selection::NoMatch));
}
