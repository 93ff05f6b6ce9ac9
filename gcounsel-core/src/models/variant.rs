use serde::{Deserialize, Serialize};

use crate::consts::{ALLELE_DELIMITER, CONSEQUENCE_DELIMITER, NOT_AVAILABLE};

///
/// A field that Ensembl sends either as a single string or as a list of strings.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Normalize to an ordered sequence; a single string becomes a one-element sequence.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => vec![value.clone()],
            OneOrMany::Many(values) => values.clone(),
        }
    }

    /// Render as one string, joining list values with `sep`.
    pub fn join(&self, sep: &str) -> String {
        match self {
            OneOrMany::One(value) => value.clone(),
            OneOrMany::Many(values) => values.join(sep),
        }
    }
}

///
/// One record of an Ensembl `overlap/id/{id}?feature=variation` response.
///
/// Only the fields gcounsel reads are declared; everything else in the payload is ignored.
///
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RawVariant {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub seq_region_name: Option<String>,
    #[serde(default)]
    pub start: Option<u64>,
    #[serde(default)]
    pub end: Option<u64>,
    #[serde(default)]
    pub strand: Option<i8>,
    #[serde(default)]
    pub consequence_type: Option<OneOrMany>,
    #[serde(default)]
    pub allele_string: Option<OneOrMany>,
    #[serde(default)]
    pub alleles: Option<OneOrMany>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub clinical_significance: Vec<String>,
}

impl RawVariant {
    ///
    /// The variant identifier, or `N/A` when the record has none.
    ///
    /// Records without an identifier all share the `N/A` key, so at most one of them
    /// survives de-duplication.
    ///
    pub fn identifier(&self) -> &str {
        self.id.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    ///
    /// Consequence annotations normalized to an ordered sequence.
    ///
    pub fn consequences(&self) -> Vec<String> {
        self.consequence_type
            .as_ref()
            .map(OneOrMany::to_vec)
            .unwrap_or_default()
    }

    ///
    /// Allele representation: `allele_string` wins over `alleles`; list values are joined
    /// with [`ALLELE_DELIMITER`].
    ///
    pub fn allele(&self) -> String {
        self.allele_string
            .as_ref()
            .or(self.alleles.as_ref())
            .map(|a| a.join(ALLELE_DELIMITER))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

///
/// A mutation record as it appears in a report. Built once from a [`RawVariant`].
///
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub id: String,
    pub location: String,
    pub consequences: Vec<String>,
    pub allele: String,
}

impl Variant {
    pub fn from_raw(raw: &RawVariant) -> Self {
        Variant {
            id: raw.identifier().to_string(),
            location: raw
                .seq_region_name
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            consequences: raw.consequences(),
            allele: raw.allele(),
        }
    }

    /// All consequence annotations on one line, e.g. `stop_gained/NMD_transcript_variant`.
    pub fn consequence_label(&self) -> String {
        self.consequences.join(CONSEQUENCE_DELIMITER)
    }
}

impl From<&RawVariant> for Variant {
    fn from(raw: &RawVariant) -> Self {
        Variant::from_raw(raw)
    }
}

/// A variant together with the consequence category that claimed it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub category: String,
    pub variant: Variant,
}

///
/// Outcome of filtering one gene's variants by consequence category.
///
/// `NoMatch` means the gene and its variants were found but nothing satisfied the
/// filter. It is never used for upstream failures.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Matched(Vec<Match>),
    NoMatch,
}

impl Selection {
    pub fn from_matches(matches: Vec<Match>) -> Self {
        if matches.is_empty() {
            Selection::NoMatch
        } else {
            Selection::Matched(matches)
        }
    }

    pub fn matches(&self) -> &[Match] {
        match self {
            Selection::Matched(matches) => matches,
            Selection::NoMatch => &[],
        }
    }

    pub fn variants(&self) -> impl Iterator<Item = &Variant> {
        self.matches().iter().map(|m| &m.variant)
    }

    pub fn len(&self) -> usize {
        self.matches().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::NoMatch)
    }

    /// Number of selected variants attributed to `category`.
    pub fn count_for(&self, category: &str) -> usize {
        self.matches()
            .iter()
            .filter(|m| m.category == category)
            .count()
    }
}
