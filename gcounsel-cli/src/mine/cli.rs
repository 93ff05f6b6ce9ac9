use std::path::PathBuf;

use clap::{Arg, Command, value_parser};

pub const MINE_CMD: &str = "mine";

pub fn create_mine_cli() -> Command {
    Command::new(MINE_CMD)
        .about("Print the gene names found in text or PDF documents.")
        .arg(
            Arg::new("documents")
                .required(true)
                .num_args(1..)
                .value_parser(value_parser!(PathBuf))
                .help("Documents to scan (.txt, .md, .pdf)"),
        )
        .arg(
            Arg::new("symbols")
                .long("symbols")
                .short('s')
                .value_parser(value_parser!(PathBuf))
                .help("File of known gene symbols, one per line; only these are reported"),
        )
}
