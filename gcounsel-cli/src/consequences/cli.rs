use clap::Command;

pub const CONSEQUENCES_CMD: &str = "consequences";

pub fn create_consequences_cli() -> Command {
    Command::new(CONSEQUENCES_CMD)
        .about("List the Sequence Ontology consequence terms that can be selected.")
}
