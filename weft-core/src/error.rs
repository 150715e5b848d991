use thiserror::Error;

/// Why a parse attempt produced no match.
///
/// Combinators absorb these errors rather than letting them escape halfway:
/// alternation catches a branch's error and retries the next branch from the
/// original state, while sequencing and mapping convert an inner error into
/// failure of the whole composite. A failed parse never consumes input and
/// never leaves partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The next part of the input did not start with the expected literal.
    #[error("expected literal `{expected}`, found `{found}`")]
    LiteralMismatch { expected: String, found: String },

    /// The input ran out where more was expected.
    #[error("expected `{expected}`, but the input was exhausted")]
    UnexpectedEnd { expected: String },

    /// A placeholder's conversion rejected the text it was given.
    #[error("placeholder could not convert `{input}`")]
    Conversion { input: String },

    /// A successfully parsed value was rejected while mapping it to the
    /// target type.
    #[error("parsed value was rejected while mapping to the target type")]
    Mapping,

    /// The grammar was satisfied but unconsumed input remains.
    #[error("unconsumed input remains after the grammar was satisfied")]
    TrailingInput,

    /// No alternative matched, or the always-failing parser was reached.
    #[error("no grammar alternative matched the input")]
    Unmatched,
}

/// Why a value could not be printed (or templated) by a grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrintError {
    /// No branch of the grammar can represent this value.
    #[error("value cannot be represented by this grammar")]
    Unrepresentable,

    /// A placeholder's conversion could not turn the value back into text.
    #[error("placeholder value could not be converted to text")]
    Conversion,
}
