use std::fmt::Write;

use gcounsel_core::models::{GeneReportEntry, Lookup};

///
/// Render the session's gene entries as the free-text context handed to the assistant.
///
/// One block per gene: the gene information attributes, the function summary, and the
/// selected variants (or why there are none).
///
pub fn build_context(entries: &[GeneReportEntry]) -> String {
    let mut context = String::new();

    for entry in entries {
        let info = match &entry.metadata {
            Lookup::Found(meta) => meta
                .attributes()
                .iter()
                .map(|(label, value)| format!("{label}: {value}"))
                .collect::<Vec<_>>()
                .join(", "),
            Lookup::NotFound => format!("{} was not found", entry.query),
            Lookup::Failed(err) => format!("{} could not be looked up ({err})", entry.query),
        };
        let _ = writeln!(context, "Gene Information: {info}");

        if let Some(function) = entry.function.found() {
            let _ = writeln!(
                context,
                "Gene Function: {} ({}): {}",
                function.name(),
                function.symbol(),
                function.summary()
            );
        }

        match entry.variants() {
            Some(variants) => {
                for variant in variants {
                    let _ = writeln!(
                        context,
                        "Mutation: {} at {} ({}), alleles {}",
                        variant.id,
                        variant.location,
                        variant.consequence_label(),
                        variant.allele
                    );
                }
            }
            None => {
                let _ = writeln!(context, "Mutations: {}", entry.mutation_summary());
            }
        }
    }

    context.trim_end().to_string()
}
