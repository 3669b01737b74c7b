//! Type descriptors and the containment walker.

use std::fmt;

use stencil_emit::{BlockScope, SourceWriter};

use crate::TypeKind;
use crate::file::GENERATED_FILE_SUFFIX;

/// Callback that writes attribute lines immediately above a declaration.
pub type AttributeWriter = Box<dyn Fn(&mut SourceWriter)>;

/// One enclosing type in a containment chain.
///
/// Containing types are re-declared in partial form with no attributes and
/// no base list; only their name and kind matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainingType {
    name: String,
    kind: TypeKind,
}

impl ContainingType {
    /// Create a containing-type entry.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// The type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declaration kind.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    fn header(&self) -> String {
        format!("partial {} {}", self.kind.keywords(), self.name)
    }
}

/// Description of a partial type to declare: its name and kind, where it
/// lives (namespace and containing-type chain, outermost first), and the
/// optional attribute callback and base list for its own header.
///
/// # Example
///
/// ```
/// use stencil_csharp::{SourceWriter, TypeDescriptor, TypeKind};
///
/// let descriptor = TypeDescriptor::new("Id", TypeKind::RecordStruct)
///     .namespace("App.Models")
///     .base_list("IEquatable<Id>");
///
/// let mut writer = SourceWriter::default();
/// let mut scope = descriptor.declare(&mut writer);
/// scope.line("public int Value;");
/// scope.close();
/// ```
pub struct TypeDescriptor {
    name: String,
    kind: TypeKind,
    namespace: Option<String>,
    containing_types: Vec<ContainingType>,
    base_list: Option<String>,
    attribute_writer: Option<AttributeWriter>,
}

impl TypeDescriptor {
    /// Create a descriptor for a top-level type with no namespace.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            namespace: None,
            containing_types: Vec::new(),
            base_list: None,
            attribute_writer: None,
        }
    }

    /// Set the containing namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Append a containing type (call in outermost-to-innermost order).
    pub fn containing_type(mut self, name: impl Into<String>, kind: TypeKind) -> Self {
        self.containing_types.push(ContainingType::new(name, kind));
        self
    }

    /// Set the full containing-type chain, outermost first.
    pub fn containing_types(mut self, chain: impl IntoIterator<Item = ContainingType>) -> Self {
        self.containing_types = chain.into_iter().collect();
        self
    }

    /// Set the base list appended to the header after ` : `.
    ///
    /// The text is taken verbatim; the generator does not parse it.
    pub fn base_list(mut self, base_list: impl Into<String>) -> Self {
        self.base_list = Some(base_list.into());
        self
    }

    /// Set a callback that writes attribute lines immediately above the
    /// target declaration, at the declaration's depth.
    pub fn attributes(mut self, write: impl Fn(&mut SourceWriter) + 'static) -> Self {
        self.attribute_writer = Some(Box::new(write));
        self
    }

    /// The type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declaration kind.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// The target type's own header line.
    pub fn header(&self) -> String {
        let mut header = format!("partial {} {}", self.kind.keywords(), self.name);
        if let Some(base_list) = &self.base_list {
            header.push_str(" : ");
            header.push_str(base_list);
        }
        header
    }

    /// Walk the containment chain and open every enclosing block: the
    /// namespace (if any), one block per containing type (outermost first),
    /// and finally the target type's own declaration block, with attribute
    /// lines written just above it.
    ///
    /// Returns a single guard that closes all opened blocks, innermost
    /// first, leaving the writer positioned for the type's body content.
    pub fn declare<'w>(&self, writer: &'w mut SourceWriter) -> BlockScope<'w> {
        let mut wrappers = Vec::new();
        if let Some(namespace) = &self.namespace {
            wrappers.push(format!("namespace {namespace}"));
        }
        wrappers.extend(self.containing_types.iter().map(ContainingType::header));

        match wrappers.split_first() {
            Some((outermost, rest)) => {
                let mut scope = writer.begin_block_with(outermost);
                for header in rest {
                    scope = scope.nested_with(header);
                }
                if let Some(write_attributes) = &self.attribute_writer {
                    write_attributes(&mut scope);
                }
                scope.nested_with(&self.header())
            }
            None => {
                if let Some(write_attributes) = &self.attribute_writer {
                    write_attributes(&mut *writer);
                }
                writer.begin_block_with(&self.header())
            }
        }
    }

    /// Hint name for the generated file: the dot-joined containment path
    /// plus the `.g.cs` suffix (e.g. `App.Models.Outer.Id.g.cs`).
    pub fn hint_name(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(namespace) = &self.namespace {
            parts.push(namespace);
        }
        for outer in &self.containing_types {
            parts.push(&outer.name);
        }
        parts.push(&self.name);
        format!("{}{}", parts.join("."), GENERATED_FILE_SUFFIX)
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("namespace", &self.namespace)
            .field("containing_types", &self.containing_types)
            .field("base_list", &self.base_list)
            .field("has_attribute_writer", &self.attribute_writer.is_some())
            .finish()
    }
}
