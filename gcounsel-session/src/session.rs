use std::collections::HashSet;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use gcounsel_assist::build_context;
use gcounsel_core::models::GeneReportEntry;
use gcounsel_fetch::fetch_entry;
use gcounsel_mine::mine_gene_names;
use gcounsel_report::{ReportArtifact, paginate};
use gcounsel_select::ConsequenceFilter;

use crate::context::SessionContext;
use crate::errors::SessionError;

/// One question put to the assistant and the answer it gave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
}

///
/// State of one counseling session.
///
/// Stages run in order and each one replaces the output of the previous run of that
/// stage: collecting new genes drops fetched entries, fetching drops the last report.
///
#[derive(Debug)]
pub struct Session {
    genes: Vec<String>,
    filter: ConsequenceFilter,
    entries: Vec<GeneReportEntry>,
    report: Option<ReportArtifact>,
    history: Vec<Exchange>,
}

impl Session {
    pub fn new(filter: ConsequenceFilter) -> Self {
        Session {
            genes: Vec::new(),
            filter,
            entries: Vec::new(),
            report: None,
            history: Vec::new(),
        }
    }

    pub fn genes(&self) -> &[String] {
        &self.genes
    }

    pub fn filter(&self) -> &ConsequenceFilter {
        &self.filter
    }

    pub fn entries(&self) -> &[GeneReportEntry] {
        &self.entries
    }

    pub fn report(&self) -> Option<&ReportArtifact> {
        self.report.as_ref()
    }

    pub fn history(&self) -> &[Exchange] {
        &self.history
    }

    /// Replace the consequence filter; takes effect on the next fetch.
    pub fn set_filter(&mut self, filter: ConsequenceFilter) {
        self.filter = filter;
    }

    ///
    /// Gather the genes to report on.
    ///
    /// Typed names come first, then names mined from each document in order. Names are
    /// trimmed, blanks are dropped, and duplicates are removed case-insensitively keeping
    /// the first spelling seen. A document that cannot be read is logged and skipped.
    ///
    /// # Returns
    /// - the collected gene names
    ///
    pub fn collect_input<S, P>(
        &mut self,
        ctx: &SessionContext,
        genes: &[S],
        documents: &[P],
    ) -> Result<&[String], SessionError>
    where
        S: AsRef<str>,
        P: AsRef<Path>,
    {
        let mut candidates: Vec<String> = genes.iter().map(|g| g.as_ref().to_string()).collect();
        for document in documents {
            let mined = match mine_gene_names(document.as_ref(), ctx.extractor) {
                Ok(mined) => mined,
                Err(err) => {
                    warn!(
                        "Skipping document {}: {}",
                        document.as_ref().display(),
                        err
                    );
                    continue;
                }
            };
            info!(
                "Mined {} gene names from {}",
                mined.len(),
                document.as_ref().display()
            );
            candidates.extend(mined);
        }

        let mut seen = HashSet::new();
        let collected: Vec<String> = candidates
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .filter(|name| seen.insert(name.to_uppercase()))
            .map(String::from)
            .collect();

        self.genes = collected;
        self.entries.clear();
        self.report = None;
        Ok(&self.genes)
    }

    ///
    /// Look up every collected gene, in order.
    ///
    /// A failure for one gene is recorded in its entry and never stops the others.
    ///
    pub fn fetch(&mut self, ctx: &SessionContext) -> Result<&[GeneReportEntry], SessionError> {
        if self.genes.is_empty() {
            return Err(SessionError::NoGenes);
        }

        info!(
            "Fetching {} genes with filter {}",
            self.genes.len(),
            self.filter
        );

        let pb = ProgressBar::new(self.genes.len() as u64);
        if let Ok(style) =
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
        {
            pb.set_style(style);
        }

        let mut entries = Vec::with_capacity(self.genes.len());
        for gene in &self.genes {
            pb.set_message(gene.clone());
            let entry = fetch_entry(ctx.source, gene, &self.filter);
            if !entry.metadata.is_found() {
                warn!("Gene information not found for {}", gene);
            }
            entries.push(entry);
            pb.inc(1);
        }
        pb.finish_and_clear();

        self.entries = entries;
        self.report = None;
        Ok(&self.entries)
    }

    /// Lay out and serialize the fetched entries as a PDF report.
    pub fn render(&mut self, ctx: &SessionContext) -> Result<&ReportArtifact, SessionError> {
        if self.entries.is_empty() {
            return Err(SessionError::NotFetched);
        }

        let report = paginate(&self.entries, ctx.layout);
        let bytes = report.to_pdf()?;
        info!(
            "Rendered report: {} pages, {} bytes",
            report.pages.len(),
            bytes.len()
        );

        Ok(&*self
            .report
            .insert(ReportArtifact::pdf(bytes, report.pages.len())))
    }

    ///
    /// Ask the assistant a question about the fetched genes.
    ///
    /// The exchange is appended to the session history.
    ///
    pub fn ask(&mut self, ctx: &SessionContext, question: &str) -> Result<&str, SessionError> {
        let assistant = ctx.assistant.ok_or(SessionError::NoAssistant)?;

        let context = build_context(&self.entries);
        let answer = assistant.answer(question, &context)?;

        self.history.push(Exchange {
            question: question.to_string(),
            answer,
        });
        Ok(self
            .history
            .last()
            .map(|exchange| exchange.answer.as_str())
            .unwrap_or_default())
    }

    /// Forget genes, entries, the report and the chat history. The filter is kept.
    pub fn reset(&mut self) {
        self.genes.clear();
        self.entries.clear();
        self.report = None;
        self.history.clear();
    }
}
