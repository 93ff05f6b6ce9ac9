//! The full pipeline against in-memory collaborators.

use std::cell::RefCell;
use std::fs;

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

use gcounsel_assist::{AssistError, Assistant};
use gcounsel_core::consts::{NO_GENE_FUNCTION, NO_GENE_INFO, NO_MUTATION_INFO};
use gcounsel_core::errors::{Upstream, UpstreamError};
use gcounsel_core::models::{GeneFunction, GeneMetadata, Lookup, OneOrMany, RawVariant};
use gcounsel_fetch::GeneSource;
use gcounsel_mine::SymbolPatternExtractor;
use gcounsel_report::{LayoutConfig, paginate};
use gcounsel_select::ConsequenceFilter;
use gcounsel_session::{Session, SessionContext, SessionError};

fn record(id: &str, consequence: &str) -> RawVariant {
    RawVariant {
        id: Some(id.to_string()),
        seq_region_name: Some("17".to_string()),
        consequence_type: Some(OneOrMany::One(consequence.to_string())),
        allele_string: Some(OneOrMany::One("C/T".to_string())),
        ..Default::default()
    }
}

/// Resolves BRCA1 with two stop_gained variants; every other lookup fails upstream.
struct FakeSource;

impl GeneSource for FakeSource {
    fn lookup_gene(&self, name: &str) -> Lookup<GeneMetadata> {
        match name.to_uppercase().as_str() {
            "BRCA1" => Lookup::Found(GeneMetadata {
                stable_id: "ENSG00000012048".to_string(),
                display_name: Some("BRCA1".to_string()),
                chromosome: Some("17".to_string()),
                start: Some(43044295),
                end: Some(43170245),
            }),
            _ => Lookup::Failed(UpstreamError::new(
                Upstream::Ensembl,
                Some(500),
                "internal error",
            )),
        }
    }

    fn lookup_function(&self, name: &str) -> Lookup<GeneFunction> {
        match name.to_uppercase().as_str() {
            "BRCA1" => Lookup::Found(GeneFunction {
                symbol: Some("BRCA1".to_string()),
                name: Some("BRCA1 DNA repair associated".to_string()),
                summary: Some("Tumor suppressor involved in DNA repair.".to_string()),
            }),
            _ => Lookup::NotFound,
        }
    }

    fn lookup_variants(&self, gene_id: &str) -> Result<Vec<RawVariant>, UpstreamError> {
        assert_eq!(gene_id, "ENSG00000012048");
        Ok(vec![
            record("rs1", "missense_variant"),
            record("rs2", "stop_gained"),
            record("rs3", "synonymous_variant"),
            record("rs4", "stop_gained"),
        ])
    }
}

/// Answers with a fixed string and remembers the context it was given.
#[derive(Default)]
struct FakeAssistant {
    contexts: RefCell<Vec<String>>,
}

impl Assistant for FakeAssistant {
    fn answer(&self, question: &str, context: &str) -> Result<String, AssistError> {
        self.contexts.borrow_mut().push(context.to_string());
        Ok(format!("You asked: {question}"))
    }
}

#[fixture]
fn session() -> Session {
    Session::new(ConsequenceFilter::new(["stop_gained"], 5).unwrap())
}

#[rstest]
fn test_two_genes_one_failing(mut session: Session) {
    let source = FakeSource;
    let extractor = SymbolPatternExtractor::default();
    let layout = LayoutConfig::default();
    let ctx = SessionContext::new(&source, &extractor, &layout);

    session
        .collect_input(&ctx, &["BRCA1", "NOPE1"], &[] as &[&str])
        .unwrap();
    let entries = session.fetch(&ctx).unwrap();

    assert_eq!(entries.len(), 2);
    let ids: Vec<&str> = entries[0]
        .variants()
        .unwrap()
        .iter()
        .map(|v| v.id.as_str())
        .collect();
    assert_eq!(ids, vec!["rs2", "rs4"]);
    assert!(matches!(entries[1].metadata, Lookup::Failed(_)));
    assert!(matches!(entries[1].mutations, Lookup::Failed(_)));

    let report = paginate(session.entries(), &layout);
    let texts: Vec<&str> = report.pages.iter().flat_map(|p| p.texts()).collect();
    let first_placeholder = texts.iter().position(|t| *t == NO_GENE_INFO).unwrap();
    let function_placeholder = texts.iter().position(|t| *t == NO_GENE_FUNCTION).unwrap();
    let mutation_placeholder = texts.iter().position(|t| *t == NO_MUTATION_INFO).unwrap();
    assert!(first_placeholder < function_placeholder);
    assert!(function_placeholder < mutation_placeholder);
    assert!(texts.iter().any(|t| t.contains("rs4")));

    let artifact = session.render(&ctx).unwrap();
    assert_eq!(artifact.page_count, report.pages.len());
    assert_eq!(artifact.file_name, "genetic_counseling_report.pdf");
    assert!(artifact.bytes.starts_with(b"%PDF-"));
}

#[rstest]
fn test_collect_input_merges_documents(mut session: Session) {
    let dir = tempfile::tempdir().unwrap();
    let notes = dir.path().join("notes.txt");
    fs::write(&notes, "Family history: TP53 and brca1. Mother tested for BRCA1.").unwrap();

    let source = FakeSource;
    let extractor = SymbolPatternExtractor::default();
    let layout = LayoutConfig::default();
    let ctx = SessionContext::new(&source, &extractor, &layout);

    let genes = session
        .collect_input(&ctx, &["brca1", "  ", " CFTR "], &[notes.as_path()])
        .unwrap();
    assert_eq!(genes, &["brca1", "CFTR", "TP53"]);
}

#[rstest]
fn test_unsupported_document_is_skipped(mut session: Session) {
    let dir = tempfile::tempdir().unwrap();
    let scan = dir.path().join("scan.png");
    fs::write(&scan, [0u8; 8]).unwrap();

    let source = FakeSource;
    let extractor = SymbolPatternExtractor::default();
    let layout = LayoutConfig::default();
    let ctx = SessionContext::new(&source, &extractor, &layout);

    let genes = session
        .collect_input(&ctx, &["APC"], &[scan.as_path()])
        .unwrap();
    assert_eq!(genes, &["APC"]);
}

#[rstest]
fn test_unreadable_documents_do_not_drop_other_input(mut session: Session) {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let corrupt = dir.path().join("corrupt.pdf");
    fs::write(&corrupt, b"this is not a pdf").unwrap();
    let notes = dir.path().join("notes.md");
    fs::write(&notes, "Refer for MLH1 testing.").unwrap();

    let source = FakeSource;
    let extractor = SymbolPatternExtractor::default();
    let layout = LayoutConfig::default();
    let ctx = SessionContext::new(&source, &extractor, &layout);

    let genes = session
        .collect_input(
            &ctx,
            &["BRCA1"],
            &[missing.as_path(), corrupt.as_path(), notes.as_path()],
        )
        .unwrap();
    assert_eq!(genes, &["BRCA1", "MLH1"]);
}

#[rstest]
fn test_stages_out_of_order(mut session: Session) {
    let source = FakeSource;
    let extractor = SymbolPatternExtractor::default();
    let layout = LayoutConfig::default();
    let ctx = SessionContext::new(&source, &extractor, &layout);

    assert!(matches!(session.fetch(&ctx), Err(SessionError::NoGenes)));
    assert!(matches!(session.render(&ctx), Err(SessionError::NotFetched)));
    assert!(matches!(
        session.ask(&ctx, "What is BRCA1?"),
        Err(SessionError::NoAssistant)
    ));
}

#[rstest]
fn test_ask_uses_fetched_context(mut session: Session) {
    let source = FakeSource;
    let extractor = SymbolPatternExtractor::default();
    let layout = LayoutConfig::default();
    let assistant = FakeAssistant::default();
    let ctx = SessionContext::new(&source, &extractor, &layout).with_assistant(&assistant);

    session
        .collect_input(&ctx, &["BRCA1"], &[] as &[&str])
        .unwrap();
    session.fetch(&ctx).unwrap();

    let answer = session.ask(&ctx, "Is rs2 pathogenic?").unwrap();
    assert_eq!(answer, "You asked: Is rs2 pathogenic?");
    assert_eq!(session.history().len(), 1);

    let contexts = assistant.contexts.borrow();
    assert!(contexts[0].contains("Gene ID: ENSG00000012048"));
    assert!(contexts[0].contains("rs2"));
    assert!(contexts[0].contains("rs4"));
}

#[rstest]
fn test_reset_clears_state(mut session: Session) {
    let source = FakeSource;
    let extractor = SymbolPatternExtractor::default();
    let layout = LayoutConfig::default();
    let ctx = SessionContext::new(&source, &extractor, &layout);

    session
        .collect_input(&ctx, &["BRCA1"], &[] as &[&str])
        .unwrap();
    session.fetch(&ctx).unwrap();
    session.render(&ctx).unwrap();
    assert!(session.report().is_some());

    session.reset();
    assert!(session.genes().is_empty());
    assert!(session.entries().is_empty());
    assert!(session.report().is_none());
    assert!(session.history().is_empty());
    assert_eq!(session.filter().cap(), 5);
}

#[rstest]
fn test_new_input_invalidates_fetched_entries(mut session: Session) {
    let source = FakeSource;
    let extractor = SymbolPatternExtractor::default();
    let layout = LayoutConfig::default();
    let ctx = SessionContext::new(&source, &extractor, &layout);

    session
        .collect_input(&ctx, &["BRCA1"], &[] as &[&str])
        .unwrap();
    session.fetch(&ctx).unwrap();
    assert_eq!(session.entries().len(), 1);

    session
        .collect_input(&ctx, &["TP53"], &[] as &[&str])
        .unwrap();
    assert!(session.entries().is_empty());
    assert_eq!(session.genes(), &["TP53"]);
}
