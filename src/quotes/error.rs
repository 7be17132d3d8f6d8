use thiserror::Error;

/// Errors raised by quote store, cursor and session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// The text was empty or whitespace only.
    #[error("quote text is empty")]
    EmptyText,

    /// A read of the current quote while the store holds nothing.
    #[error("no quotes to show")]
    EmptyCollection,

    #[error("quote index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
