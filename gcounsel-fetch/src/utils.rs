use std::env;

use tabled::{Table, Tabled};

use gcounsel_core::models::Selection;

use super::consts::{DEFAULT_ENSEMBL_API, DEFAULT_MYGENE_API, ENSEMBL_API_ENV, MYGENE_API_ENV};

#[derive(Tabled)]
pub struct VariantPrint {
    category: String,
    variation: String,
    location: String,
    consequence: String,
    alleles: String,
}

/// Get default Ensembl endpoint from environment variable
///
/// # Returns
/// - Ensembl REST base url
pub fn get_default_ensembl_api() -> String {
    env::var(ENSEMBL_API_ENV).unwrap_or_else(|_| DEFAULT_ENSEMBL_API.to_string())
}

/// Get default mygene.info endpoint from environment variable
///
/// # Returns
/// - mygene.info base url
pub fn get_default_mygene_api() -> String {
    env::var(MYGENE_API_ENV).unwrap_or_else(|_| DEFAULT_MYGENE_API.to_string())
}

/// Render a selection as a table, one row per variant.
pub fn selection_table(selection: &Selection) -> Table {
    let rows: Vec<VariantPrint> = selection
        .matches()
        .iter()
        .map(|m| VariantPrint {
            category: m.category.clone(),
            variation: m.variant.id.clone(),
            location: m.variant.location.clone(),
            consequence: m.variant.consequence_label(),
            alleles: m.variant.allele.clone(),
        })
        .collect();

    Table::new(rows)
}

pub fn print_selection(selection: &Selection) {
    println!("{}", selection_table(selection));
}
