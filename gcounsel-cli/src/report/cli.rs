use std::path::PathBuf;

use clap::{Arg, Command, value_parser};

use crate::shared::{
    config_arg, consequences_arg, documents_arg, genes_arg, limit_arg, model_arg, species_arg,
};

pub const REPORT_CMD: &str = "report";

pub fn create_report_cli() -> Command {
    Command::new(REPORT_CMD)
        .about("Fetch gene information and selected mutations, and write a PDF report.")
        .arg(genes_arg())
        .arg(documents_arg())
        .arg(consequences_arg())
        .arg(limit_arg())
        .arg(config_arg())
        .arg(species_arg())
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_parser(value_parser!(PathBuf))
                .help("Where to write the PDF [default: genetic_counseling_report.pdf]"),
        )
        .arg(
            Arg::new("question")
                .long("question")
                .short('q')
                .help("Also ask the assistant this question about the genes"),
        )
        .arg(model_arg())
}
