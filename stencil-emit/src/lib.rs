//! Indented source emission engine for the Stencil generator.
//!
//! This crate provides the language-agnostic building blocks used by
//! language-specific generator crates (e.g., `stencil-csharp`):
//!
//! - [`SourceWriter`] - line buffer with automatic indentation and
//!   blank-line separation between blocks
//! - [`BlockScope`] - scoped guard that closes brace blocks on release
//! - [`Indent`] - indentation configuration
//!
//! # Example
//!
//! ```
//! use stencil_emit::SourceWriter;
//!
//! let mut writer = SourceWriter::default();
//! let mut scope = writer.begin_block_with("namespace App");
//! scope.line("// body");
//! scope.close();
//!
//! assert_eq!(writer.as_str(), "namespace App\n{\n\t// body\n}\n");
//! ```

mod indent;
mod scope;
mod writer;

pub use indent::Indent;
pub use scope::BlockScope;
pub use writer::SourceWriter;
