mod ask;
mod consequences;
mod mine;
mod mutations;
mod report;
mod shared;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "gcounsel";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Genetic counseling reports: gene metadata, function and selected mutations from Ensembl and mygene.info, with an optional chat assistant.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log at debug level (RUST_LOG takes precedence)"),
        )
        .subcommand(report::cli::create_report_cli())
        .subcommand(mutations::cli::create_mutations_cli())
        .subcommand(mine::cli::create_mine_cli())
        .subcommand(ask::cli::create_ask_cli())
        .subcommand(consequences::cli::create_consequences_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    let log_level = if matches.get_flag("verbose") {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match matches.subcommand() {
        //
        // REPORT
        //
        Some((report::cli::REPORT_CMD, matches)) => {
            report::handlers::run_report(matches)?;
        }

        //
        // MUTATIONS OF ONE GENE
        //
        Some((mutations::cli::MUTATIONS_CMD, matches)) => {
            mutations::handlers::run_mutations(matches)?;
        }

        //
        // GENE NAMES FROM DOCUMENTS
        //
        Some((mine::cli::MINE_CMD, matches)) => {
            mine::handlers::run_mine(matches)?;
        }

        //
        // ASSISTANT
        //
        Some((ask::cli::ASK_CMD, matches)) => {
            ask::handlers::run_ask(matches)?;
        }

        //
        // SEQUENCE ONTOLOGY TERMS
        //
        Some((consequences::cli::CONSEQUENCES_CMD, _)) => {
            consequences::handlers::run_consequences();
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
