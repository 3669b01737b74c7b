//! C# partial type declaration generator.
//!
//! This crate turns a description of a type — its name, kind, containing
//! namespace, and containing-type chain — into a syntactically valid,
//! correctly indented partial declaration skeleton, ready for the caller to
//! fill with body content.
//!
//! # Module Organization
//!
//! - [`TypeKind`] - the closed classification of declaration shapes
//! - [`TypeDescriptor`] - declaration description and containment walker
//! - [`SourceFileBuilder`] - generated-file preamble and composition
//! - [`GeneratorConfig`] - TOML-loadable generator settings
//!
//! # Example
//!
//! ```
//! use stencil_csharp::{SourceWriter, TypeDescriptor, TypeKind};
//!
//! let descriptor = TypeDescriptor::new("Id", TypeKind::RecordStruct)
//!     .namespace("App.Models")
//!     .base_list("IEquatable<Id>");
//!
//! let mut writer = SourceWriter::default();
//! let mut scope = descriptor.declare(&mut writer);
//! scope.line("public int Value;");
//! scope.close();
//!
//! assert!(writer.as_str().contains("partial record struct Id : IEquatable<Id>"));
//! ```

mod config;
mod descriptor;
mod error;
mod file;
mod kind;

pub use config::GeneratorConfig;
pub use descriptor::{AttributeWriter, ContainingType, TypeDescriptor};
pub use error::{Error, Result};
pub use file::{
    AUTO_GENERATED_BANNER, GENERATED_FILE_SUFFIX, NULLABLE_DIRECTIVE, SourceFileBuilder,
};
pub use kind::TypeKind;

pub use stencil_emit::{BlockScope, Indent, SourceWriter};
