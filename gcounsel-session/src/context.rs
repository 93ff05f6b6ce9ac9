use gcounsel_assist::Assistant;
use gcounsel_fetch::GeneSource;
use gcounsel_mine::GeneEntityExtractor;
use gcounsel_report::LayoutConfig;

///
/// Request-scoped collaborators for a [`crate::Session`].
///
/// Nothing here is global: each call receives the source, extractor, layout and
/// (optionally) the assistant it should use.
///
pub struct SessionContext<'a> {
    pub source: &'a dyn GeneSource,
    pub extractor: &'a dyn GeneEntityExtractor,
    pub layout: &'a LayoutConfig,
    pub assistant: Option<&'a dyn Assistant>,
}

impl<'a> SessionContext<'a> {
    pub fn new(
        source: &'a dyn GeneSource,
        extractor: &'a dyn GeneEntityExtractor,
        layout: &'a LayoutConfig,
    ) -> Self {
        SessionContext {
            source,
            extractor,
            layout,
            assistant: None,
        }
    }

    pub fn with_assistant(mut self, assistant: &'a dyn Assistant) -> Self {
        self.assistant = Some(assistant);
        self
    }
}
