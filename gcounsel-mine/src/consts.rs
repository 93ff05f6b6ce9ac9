//! Recognition constants for gene-symbol mining.

/// Candidate gene symbols: an uppercase letter followed by 2-9 uppercase letters or
/// digits, optionally with one short hyphenated suffix (`HLA-A`, `NKX2-1`).
pub const SYMBOL_PATTERN: &str = r"\b[A-Z][A-Z0-9]{2,9}(?:-[A-Z0-9]{1,4})?\b";

/// Uppercase tokens that look like symbols but are common in clinical text.
pub const STOP_WORDS: &[&str] = &[
    "AND", "ARE", "BMI", "BUT", "CDC", "CNV", "COVID", "DNA", "DOB", "FDA", "FOR", "GRCH37",
    "GRCH38", "HGNC", "HGVS", "HIV", "ICU", "MRI", "NCBI", "NGS", "NIH", "NOT", "OMIM", "PCR",
    "PDF", "RNA", "SNP", "SNV", "THE", "USA", "VCF", "VUS", "WES", "WGS", "WHO", "WITH",
];

/// File extensions read as plain text.
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md"];

pub const PDF_EXTENSION: &str = "pdf";
