/// A prompt located in the composed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PromptEntry {
    /// Line of the projection buffer on which the prompt starts.
    pub line_number: usize,
    /// Index of the projection span rendering the prompt. Opaque to the mapping.
    pub span_index: usize,
}

impl PromptEntry {
    #[must_use]
    pub fn new(line_number: usize, span_index: usize) -> Self {
        Self {
            line_number,
            span_index,
        }
    }
}

impl From<(usize, usize)> for PromptEntry {
    fn from((line_number, span_index): (usize, usize)) -> Self {
        Self::new(line_number, span_index)
    }
}

impl std::fmt::Display for PromptEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.line_number, self.span_index)
    }
}
