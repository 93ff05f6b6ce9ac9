use std::collections::HashSet;

use log::{debug, info};

use gcounsel_core::models::{Match, RawVariant, Selection, Variant};

use crate::filter::ConsequenceFilter;

///
/// Select the variants of one gene that match the requested consequence categories.
///
/// # Arguments
/// - records: raw variant-overlap records, in the order the source returned them
/// - filter: requested categories (in priority order) and the per-category cap
///
/// # Returns
/// - `Selection::Matched` with the claimed variants in scan order, or
///   `Selection::NoMatch` if nothing matched
///
pub fn select(records: &[RawVariant], filter: &ConsequenceFilter) -> Selection {
    let categories = filter.categories();
    let cap = filter.cap();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut counts = vec![0usize; categories.len()];
    let mut matches: Vec<Match> = Vec::new();

    // lowercase once instead of per annotation
    let needles: Vec<String> = categories.iter().map(|c| c.to_lowercase()).collect();

    for record in records {
        let id = record.identifier();
        if seen.contains(id) {
            continue;
        }

        let annotations: Vec<String> = record
            .consequences()
            .iter()
            .map(|a| a.to_lowercase())
            .collect();

        for (idx, needle) in needles.iter().enumerate() {
            if counts[idx] >= cap {
                continue;
            }
            if annotations.iter().any(|a| a.contains(needle.as_str())) {
                matches.push(Match {
                    category: categories[idx].clone(),
                    variant: Variant::from_raw(record),
                });
                seen.insert(id);
                counts[idx] += 1;
                break;
            }
        }

        if counts.iter().all(|&count| count >= cap) {
            debug!("All categories reached the cap of {}; stopping scan", cap);
            break;
        }
    }

    for (category, count) in categories.iter().zip(&counts) {
        info!("Found {} mutations for {}.", count, category);
    }
    info!("Total filtered mutations: {}", matches.len());

    Selection::from_matches(matches)
}

///
/// Per-category counts of a selection, in the filter's category order.
///
pub fn tally(selection: &Selection, filter: &ConsequenceFilter) -> Vec<(String, usize)> {
    filter
        .categories()
        .iter()
        .map(|c| (c.clone(), selection.count_for(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn record(id: &str, consequences: &[&str]) -> RawVariant {
        RawVariant {
            id: Some(id.to_string()),
            seq_region_name: Some("17".to_string()),
            consequence_type: Some(gcounsel_core::models::OneOrMany::Many(
                consequences.iter().map(|c| c.to_string()).collect(),
            )),
            allele_string: Some(gcounsel_core::models::OneOrMany::One("G/A".to_string())),
            ..Default::default()
        }
    }

    #[fixture]
    fn mixed_records() -> Vec<RawVariant> {
        vec![
            record("rs1", &["stop_gained"]),
            record("rs2", &["missense_variant"]),
            record("rs1", &["stop_gained"]),
            record("rs3", &["intron_variant"]),
            record("rs4", &["stop_gained", "NMD_transcript_variant"]),
            record("rs5", &["missense_variant"]),
            record("rs6", &["stop_gained"]),
        ]
    }

    #[rstest]
    fn test_zero_records_is_no_match() {
        let filter = ConsequenceFilter::new(["stop_gained"], 5).unwrap();
        assert_eq!(select(&[], &filter), Selection::NoMatch);
    }

    #[rstest]
    fn test_no_matching_consequence_is_no_match(mixed_records: Vec<RawVariant>) {
        let filter = ConsequenceFilter::new(["frameshift_variant"], 5).unwrap();
        assert_eq!(select(&mixed_records, &filter), Selection::NoMatch);
    }

    #[rstest]
    fn test_empty_category_list_is_no_match(mixed_records: Vec<RawVariant>) {
        let filter = ConsequenceFilter::new(Vec::<String>::new(), 5).unwrap();
        assert_eq!(select(&mixed_records, &filter), Selection::NoMatch);
    }

    #[rstest]
    fn test_identifiers_are_unique(mixed_records: Vec<RawVariant>) {
        let filter = ConsequenceFilter::new(["stop_gained", "missense_variant"], 10).unwrap();
        let selection = select(&mixed_records, &filter);

        let ids: Vec<&str> = selection.variants().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["rs1", "rs2", "rs4", "rs5", "rs6"]);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    fn test_cap_is_respected_per_category(mixed_records: Vec<RawVariant>, #[case] cap: usize) {
        let filter = ConsequenceFilter::new(["stop_gained", "missense_variant"], cap).unwrap();
        let selection = select(&mixed_records, &filter);

        for (category, count) in tally(&selection, &filter) {
            assert!(count <= cap, "{category} got {count} > {cap}");
        }
    }

    #[rstest]
    fn test_first_category_in_caller_order_claims_record() {
        let records = vec![record("rs10", &["missense_variant", "stop_gained"])];
        let filter = ConsequenceFilter::new(["stop_gained", "missense_variant"], 1).unwrap();

        let selection = select(&records, &filter);

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.matches()[0].category, "stop_gained");
        assert_eq!(selection.count_for("missense_variant"), 0);
    }

    #[rstest]
    fn test_exhausted_category_does_not_block_others() {
        let records = vec![
            record("rs1", &["stop_gained"]),
            record("rs2", &["stop_gained", "missense_variant"]),
            record("rs3", &["missense_variant"]),
        ];
        let filter = ConsequenceFilter::new(["stop_gained", "missense_variant"], 1).unwrap();

        let selection = select(&records, &filter);

        // rs2 falls through to missense_variant because stop_gained is full
        let claimed: Vec<(&str, &str)> = selection
            .matches()
            .iter()
            .map(|m| (m.variant.id.as_str(), m.category.as_str()))
            .collect();
        assert_eq!(
            claimed,
            vec![("rs1", "stop_gained"), ("rs2", "missense_variant")]
        );
    }

    #[rstest]
    fn test_matching_is_case_insensitive_substring() {
        let records = vec![
            record("rs1", &["Missense_Variant"]),
            record("rs2", &["splice_region_variant"]),
        ];
        let filter = ConsequenceFilter::new(["MISSENSE"], 5).unwrap();
        assert_eq!(select(&records, &filter).len(), 1);

        // unanchored: "variant" matches any *_variant term
        let filter = ConsequenceFilter::new(["variant"], 5).unwrap();
        assert_eq!(select(&records, &filter).len(), 2);
    }

    #[rstest]
    fn test_single_string_consequence_is_normalized() {
        let records: Vec<RawVariant> = serde_json::from_str(
            r#"[{"id": "rs7", "consequence_type": "stop_gained", "alleles": ["C", "T"]}]"#,
        )
        .unwrap();
        let filter = ConsequenceFilter::new(["stop_gained"], 5).unwrap();

        let selection = select(&records, &filter);
        let variant = selection.variants().next().unwrap();
        assert_eq!(variant.consequences, vec!["stop_gained"]);
        assert_eq!(variant.allele, "C, T");
    }

    #[rstest]
    fn test_scan_stops_once_every_cap_is_reached(mixed_records: Vec<RawVariant>) {
        let filter = ConsequenceFilter::new(["stop_gained", "missense_variant"], 1).unwrap();
        let selection = select(&mixed_records, &filter);

        let ids: Vec<&str> = selection.variants().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["rs1", "rs2"]);
    }
}
