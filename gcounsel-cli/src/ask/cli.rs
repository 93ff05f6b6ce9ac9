use clap::{Arg, Command};

use crate::shared::{
    config_arg, consequences_arg, documents_arg, genes_arg, limit_arg, model_arg, species_arg,
};

pub const ASK_CMD: &str = "ask";

pub fn create_ask_cli() -> Command {
    Command::new(ASK_CMD)
        .about("Fetch genes, then ask the assistant a question about them. Needs GROQ_API_KEY.")
        .arg(
            Arg::new("question")
                .required(true)
                .help("The question, e.g. \"What do these mutations mean for my family?\""),
        )
        .arg(genes_arg())
        .arg(documents_arg())
        .arg(consequences_arg())
        .arg(limit_arg())
        .arg(config_arg())
        .arg(species_arg())
        .arg(model_arg())
}
