use clap::{Arg, Command};

use crate::shared::{consequences_arg, limit_arg, species_arg};

pub const MUTATIONS_CMD: &str = "mutations";

pub fn create_mutations_cli() -> Command {
    Command::new(MUTATIONS_CMD)
        .about("Print the selected mutations of one gene as a table.")
        .arg(Arg::new("gene").required(true).help("Gene symbol, e.g. BRCA1"))
        .arg(consequences_arg())
        .arg(limit_arg())
        .arg(species_arg())
}
