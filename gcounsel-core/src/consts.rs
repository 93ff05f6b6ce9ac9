//! Constants shared by the selector, the report layout and the chat context.

/// Value rendered for any field an upstream record did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Summary rendered when mygene.info returns a hit without a summary.
pub const NO_FUNCTION_SUMMARY: &str = "No function available";

/// Delimiter used when an allele field arrives as a list.
///
/// The canonical choice is a comma followed by a space, e.g. `"G, T"`.
pub const ALLELE_DELIMITER: &str = ", ";

/// Delimiter used when rendering a variant's consequence annotations on one line.
pub const CONSEQUENCE_DELIMITER: &str = "/";

// Placeholder sections

/// Rendered instead of the gene metadata section when the gene could not be looked up.
pub const NO_GENE_INFO: &str = "No gene information available.";

/// Rendered instead of the gene function section when mygene.info had nothing.
pub const NO_GENE_FUNCTION: &str = "No gene function information available.";

/// Rendered instead of the mutation section when no variant could be reported.
pub const NO_MUTATION_INFO: &str = "No mutation information available.";
