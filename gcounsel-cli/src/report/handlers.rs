use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use gcounsel_mine::SymbolPatternExtractor;
use gcounsel_report::LayoutConfig;
use gcounsel_session::{Session, SessionContext};

use crate::shared::{chat_client, gene_client, session_config};

///
/// Run the whole pipeline and write the report to disk.
///
/// With `--question`, the assistant is asked once the genes are fetched and its answer is
/// printed after the report summary.
///
pub fn run_report(matches: &ArgMatches) -> Result<()> {
    let config = session_config(matches)?;
    let output = config.output_path();

    let client = gene_client(&config)?;
    let extractor = SymbolPatternExtractor::default();
    let layout = LayoutConfig::default();

    let question = matches.get_one::<String>("question");
    let assistant = match question {
        Some(_) => Some(chat_client(&config)?),
        None => None,
    };

    let mut ctx = SessionContext::new(&client, &extractor, &layout);
    if let Some(assistant) = &assistant {
        ctx = ctx.with_assistant(assistant);
    }

    let mut session = Session::new(config.filter()?);
    let genes = session.collect_input(&ctx, &config.genes, &config.documents)?;
    info!("Genes: {}", genes.join(", "));

    for entry in session.fetch(&ctx)? {
        println!("{}: {}", entry.symbol(), entry.mutation_summary());
    }

    let artifact = session.render(&ctx)?;
    artifact
        .write_to(&output)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;
    println!(
        "Wrote {} ({} pages) to {}",
        artifact.file_name,
        artifact.page_count,
        output.display()
    );

    if let Some(question) = question {
        let answer = session.ask(&ctx, question)?;
        println!("\n{answer}");
    }

    Ok(())
}
