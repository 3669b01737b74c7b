//! Error types for the C# generator.

use thiserror::Error;

/// Result type for stencil-csharp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while describing declarations or loading configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// A type-kind spelling outside the four supported declaration shapes
    /// (`class`, `record`, `struct`, `record struct`).
    ///
    /// The generator never guesses a declaration keyword for an unknown
    /// shape.
    #[error("unsupported type kind `{kind}`")]
    UnknownTypeKind {
        /// The spelling that was presented.
        kind: String,
    },

    /// Generator configuration failed to parse.
    #[error("invalid generator configuration")]
    Config(#[from] toml::de::Error),
}
