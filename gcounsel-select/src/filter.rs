use std::fmt::{self, Display};

use log::warn;

use crate::consequences::is_known_consequence;
use crate::errors::SelectError;

///
/// The consequence categories a caller wants, in priority order, and how many variants
/// each category may contribute.
///
/// Categories are de-duplicated on construction (first spelling wins); the cap applies to
/// each category independently. A category that is not a known Sequence Ontology term is
/// kept, since matching is by substring, but logged as a warning.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsequenceFilter {
    categories: Vec<String>,
    cap: usize,
}

impl ConsequenceFilter {
    pub fn new<I, S>(categories: I, cap: usize) -> Result<Self, SelectError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if cap == 0 {
            return Err(SelectError::InvalidCap(cap));
        }

        let mut unique: Vec<String> = Vec::new();
        for category in categories {
            let category = category.as_ref().trim();
            if category.is_empty() {
                return Err(SelectError::EmptyCategory);
            }
            if !unique.iter().any(|c| c == category) {
                if !is_known_consequence(category) {
                    warn!(
                        "`{}` is not a known consequence term; it is matched as a substring",
                        category
                    );
                }
                unique.push(category.to_string());
            }
        }

        Ok(ConsequenceFilter {
            categories: unique,
            cap,
        })
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}

impl Display for ConsequenceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] (up to {} each)", self.categories.join(", "), self.cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_zero_cap_is_rejected() {
        assert_eq!(
            ConsequenceFilter::new(["stop_gained"], 0),
            Err(SelectError::InvalidCap(0))
        );
    }

    #[rstest]
    fn test_blank_category_is_rejected() {
        assert_eq!(
            ConsequenceFilter::new(["stop_gained", "  "], 3),
            Err(SelectError::EmptyCategory)
        );
    }

    #[rstest]
    fn test_categories_are_deduplicated_in_order() {
        let filter =
            ConsequenceFilter::new(["missense_variant", "stop_gained", "missense_variant"], 2)
                .unwrap();
        assert_eq!(filter.categories(), &["missense_variant", "stop_gained"]);
        assert_eq!(filter.cap(), 2);
    }

    #[rstest]
    fn test_display() {
        let filter = ConsequenceFilter::new(["stop_gained", "frameshift_variant"], 5).unwrap();
        assert_eq!(
            filter.to_string(),
            "[stop_gained, frameshift_variant] (up to 5 each)"
        );
    }
}
