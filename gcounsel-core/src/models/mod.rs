pub mod entry;
pub mod gene;
pub mod lookup;
pub mod variant;

// re-export for cleaner imports
pub use self::entry::GeneReportEntry;
pub use self::gene::{GeneFunction, GeneMetadata};
pub use self::lookup::Lookup;
pub use self::variant::{Match, OneOrMany, RawVariant, Selection, Variant};
