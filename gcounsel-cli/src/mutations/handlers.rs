use anyhow::Result;
use clap::ArgMatches;

use gcounsel_core::models::{Lookup, Selection};
use gcounsel_fetch::fetch_entry;
use gcounsel_fetch::utils::print_selection;
use gcounsel_select::tally;

use crate::shared::{gene_client, session_config};

pub fn run_mutations(matches: &ArgMatches) -> Result<()> {
    let gene = matches
        .get_one::<String>("gene")
        .expect("A gene symbol is required.");

    let config = session_config(matches)?;
    let filter = config.filter()?;
    let client = gene_client(&config)?;

    let entry = fetch_entry(&client, gene, &filter);
    if let Some(meta) = entry.metadata.found() {
        for (label, value) in meta.attributes() {
            println!("{label}: {value}");
        }
    }

    match &entry.mutations {
        Lookup::Found(selection @ Selection::Matched(_)) => {
            print_selection(selection);
            for (category, count) in tally(selection, &filter) {
                println!("{category}: {count}");
            }
        }
        _ => println!("{}", entry.mutation_summary()),
    }

    Ok(())
}
