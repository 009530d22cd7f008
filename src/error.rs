use thiserror::Error;

/// Errors raised while building terms or reading clause text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The text does not have the shape `symbol(arg1, arg2, ...)`
    #[error("malformed term `{input}`, expected e.g. `likes(X, Y)`")]
    MalformedTerm {
        /// The offending input, trimmed
        input: String,
    },

    /// A term was built with an empty predicate symbol
    #[error("term symbol must not be empty")]
    EmptySymbol,

    /// A term was built without any arguments
    #[error("term `{symbol}` needs at least one argument")]
    NoArguments {
        /// The predicate symbol of the rejected term
        symbol: String,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
