//! Generated source-file composition.

use stencil_emit::{Indent, SourceWriter};

use crate::TypeDescriptor;

/// Banner marking a file as generated. Suppresses style analysis in most
/// C# tooling.
pub const AUTO_GENERATED_BANNER: &str = "// <auto-generated/>";

/// Nullable-context directive emitted below the banner.
pub const NULLABLE_DIRECTIVE: &str = "#nullable enable";

/// File-name suffix for generated partial declarations.
pub const GENERATED_FILE_SUFFIX: &str = ".g.cs";

/// Builder for a complete generated source file: the standard preamble
/// followed by one or more partial declarations.
///
/// # Example
///
/// ```
/// use stencil_csharp::{Indent, SourceFileBuilder, TypeDescriptor, TypeKind};
///
/// let descriptor = TypeDescriptor::new("Foo", TypeKind::Class);
/// let code = SourceFileBuilder::new(Indent::Tab)
///     .declaration(&descriptor, |writer| {
///         writer.line("public int Bar;");
///     })
///     .build();
///
/// assert!(code.starts_with("// <auto-generated/>\n#nullable enable\n"));
/// ```
#[derive(Debug)]
pub struct SourceFileBuilder {
    writer: SourceWriter,
}

impl SourceFileBuilder {
    /// Create a builder with the standard generated-file preamble already
    /// written.
    pub fn new(indent: Indent) -> Self {
        let mut writer = SourceWriter::new(indent);
        writer.line(AUTO_GENERATED_BANNER);
        writer.line(NULLABLE_DIRECTIVE);
        writer.newline();
        Self { writer }
    }

    /// Declare `descriptor` and fill its body through the closure. All
    /// blocks the declaration opens are closed before this returns.
    pub fn declaration<F>(mut self, descriptor: &TypeDescriptor, body: F) -> Self
    where
        F: FnOnce(&mut SourceWriter),
    {
        let mut scope = descriptor.declare(&mut self.writer);
        body(&mut scope);
        scope.close();
        self
    }

    /// Consume the builder and return the file contents.
    pub fn build(self) -> String {
        self.writer.into_string()
    }
}

impl Default for SourceFileBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
