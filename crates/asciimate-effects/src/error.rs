use thiserror::Error;

/// Errors raised when building a reveal sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevealError {
    #[error("art has no characters to reveal")]
    EmptyInput,

    #[error("noise charset is empty")]
    EmptyCharset,

    #[error("chunk size must be at least 1")]
    ZeroChunkSize,
}

/// Errors raised when starting an animation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    #[error(transparent)]
    Reveal(#[from] RevealError),

    #[error("no animation with key {0}")]
    UnknownKey(u32),
}
