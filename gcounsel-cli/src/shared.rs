//! Arguments and client setup shared by the gene-fetching subcommands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, value_parser};

use gcounsel_assist::ChatClient;
use gcounsel_fetch::{GeneClient, GeneClientBuilder};
use gcounsel_session::SessionConfig;

pub fn genes_arg() -> Arg {
    Arg::new("genes")
        .long("genes")
        .short('g')
        .num_args(1..)
        .value_delimiter(',')
        .action(ArgAction::Append)
        .help("Gene names, comma or space separated (e.g. BRCA1,TP53)")
}

pub fn documents_arg() -> Arg {
    Arg::new("documents")
        .long("documents")
        .short('d')
        .num_args(1..)
        .action(ArgAction::Append)
        .value_parser(value_parser!(PathBuf))
        .help("Text or PDF documents to mine for gene names")
}

pub fn consequences_arg() -> Arg {
    Arg::new("consequences")
        .long("consequences")
        .short('c')
        .num_args(1..)
        .value_delimiter(',')
        .action(ArgAction::Append)
        .help("Consequence categories to select, in priority order [default: stop_gained]")
}

pub fn limit_arg() -> Arg {
    Arg::new("limit")
        .long("limit")
        .short('n')
        .value_parser(value_parser!(usize))
        .help("Maximum number of mutations per consequence category [default: 5]")
}

pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_parser(value_parser!(PathBuf))
        .help("TOML session file; command-line flags override its values")
}

pub fn species_arg() -> Arg {
    Arg::new("species")
        .long("species")
        .help("Ensembl species for symbol lookups [default: homo_sapiens]")
}

pub fn model_arg() -> Arg {
    Arg::new("model")
        .long("model")
        .help("Chat model used by the assistant")
}

///
/// Build the session configuration: the `--config` file if given, then any flags on top.
///
pub fn session_config(matches: &ArgMatches) -> Result<SessionConfig> {
    let mut config = match matches.try_get_one::<PathBuf>("config").ok().flatten() {
        Some(path) => SessionConfig::try_from(path.as_path())
            .with_context(|| format!("Failed to load session config {}", path.display()))?,
        None => SessionConfig::default(),
    };

    if let Some(genes) = get_strings(matches, "genes") {
        config.genes = genes;
    }
    if let Some(consequences) = get_strings(matches, "consequences") {
        config.consequences = consequences;
    }
    if let Some(documents) = matches.try_get_many::<PathBuf>("documents").ok().flatten() {
        config.documents = documents.cloned().collect();
    }
    if let Some(limit) = matches.try_get_one::<usize>("limit").ok().flatten() {
        config.limit = *limit;
    }
    if let Some(output) = matches.try_get_one::<PathBuf>("output").ok().flatten() {
        config.output = Some(output.clone());
    }
    if let Some(species) = matches.try_get_one::<String>("species").ok().flatten() {
        config.species = Some(species.clone());
    }
    if let Some(model) = matches.try_get_one::<String>("model").ok().flatten() {
        config.model = Some(model.clone());
    }

    Ok(config)
}

fn get_strings(matches: &ArgMatches, id: &str) -> Option<Vec<String>> {
    matches
        .try_get_many::<String>(id)
        .ok()
        .flatten()
        .map(|values| values.cloned().collect())
}

pub fn gene_client(config: &SessionConfig) -> Result<GeneClient> {
    let mut builder = GeneClientBuilder::new();
    if let Some(species) = &config.species {
        builder = builder.with_species(species.clone());
    }
    builder.finish().context("Failed to create the gene client")
}

pub fn chat_client(config: &SessionConfig) -> Result<ChatClient> {
    let mut builder = ChatClient::builder();
    if let Some(model) = &config.model {
        builder = builder.with_model(model.clone());
    }
    builder.finish().context("Failed to create the chat client")
}
