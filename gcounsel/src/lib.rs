//! Genetic counseling reports: gene metadata, function summaries and a capped selection of
//! mutations per consequence category, rendered to PDF.
//!
//! Each part lives in its own crate and is enabled by the feature of the same name
//! (`full` enables all of them).

#[cfg(feature = "core")]
#[doc(inline)]
pub use gcounsel_core as core;

#[cfg(feature = "select")]
#[doc(inline)]
pub use gcounsel_select as select;

#[cfg(feature = "report")]
#[doc(inline)]
pub use gcounsel_report as report;

#[cfg(feature = "fetch")]
#[doc(inline)]
pub use gcounsel_fetch as fetch;

#[cfg(feature = "assist")]
#[doc(inline)]
pub use gcounsel_assist as assist;

#[cfg(feature = "mine")]
#[doc(inline)]
pub use gcounsel_mine as mine;

#[cfg(feature = "session")]
#[doc(inline)]
pub use gcounsel_session as session;
