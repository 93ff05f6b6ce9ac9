use anyhow::Result;
use clap::ArgMatches;

use gcounsel_mine::SymbolPatternExtractor;
use gcounsel_report::LayoutConfig;
use gcounsel_session::{Session, SessionContext};

use crate::shared::{chat_client, gene_client, session_config};

pub fn run_ask(matches: &ArgMatches) -> Result<()> {
    let question = matches
        .get_one::<String>("question")
        .expect("A question is required.");

    let config = session_config(matches)?;
    let client = gene_client(&config)?;
    let assistant = chat_client(&config)?;
    let extractor = SymbolPatternExtractor::default();
    let layout = LayoutConfig::default();
    let ctx = SessionContext::new(&client, &extractor, &layout).with_assistant(&assistant);

    let mut session = Session::new(config.filter()?);
    session.collect_input(&ctx, &config.genes, &config.documents)?;
    session.fetch(&ctx)?;

    println!("{}", session.ask(&ctx, question)?);
    Ok(())
}
