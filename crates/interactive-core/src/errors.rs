pub type PromptMapResult<T> = Result<T, PromptMapError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PromptMapError {
    /// Positional access outside `0..len`.
    #[error("index {index} out of bounds (len={len})")]
    IndexOutOfBounds { index: usize, len: usize },
    /// The operation needs at least one prompt entry.
    #[error("prompt line mapping is empty")]
    EmptyMapping,
    /// Lines must be appended in strictly increasing order.
    #[error("line {line_number} does not follow last prompt line {last}")]
    NonIncreasingLine { line_number: usize, last: usize },
}
