use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;

use gcounsel_mine::{SymbolPatternExtractor, mine_gene_names};

pub fn run_mine(matches: &ArgMatches) -> Result<()> {
    let documents = matches
        .get_many::<PathBuf>("documents")
        .expect("At least one document is required.");

    let mut extractor = SymbolPatternExtractor::default();
    if let Some(symbols) = matches.get_one::<PathBuf>("symbols") {
        extractor = extractor
            .with_symbol_file(symbols)
            .with_context(|| format!("Failed to read symbol file {}", symbols.display()))?;
    }

    for document in documents {
        let genes = mine_gene_names(document, &extractor)
            .with_context(|| format!("Failed to read {}", document.display()))?;
        for gene in genes {
            println!("{}\t{}", document.display(), gene);
        }
    }

    Ok(())
}
