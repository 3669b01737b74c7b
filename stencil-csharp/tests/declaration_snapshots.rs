//! Snapshot tests for generated declaration files.
//!
//! These verify complete file output, preamble included. Run
//! `cargo insta review` to update snapshots after intentional changes.

use stencil_csharp::{Indent, SourceFileBuilder, TypeDescriptor, TypeKind};

#[test]
fn nested_record_struct() {
    let descriptor = TypeDescriptor::new("Id", TypeKind::RecordStruct)
        .namespace("App.Models")
        .containing_type("Outer", TypeKind::Class)
        .base_list("global::System.IEquatable<Id>");

    let code = SourceFileBuilder::new(Indent::Spaces(4))
        .declaration(&descriptor, |writer| {
            writer.line("public int Value { get; init; }");
        })
        .build();

    insta::assert_snapshot!("nested_record_struct", code);
}

#[test]
fn attributed_view_model() {
    let descriptor = TypeDescriptor::new("MainViewModel", TypeKind::Class)
        .namespace("App.ViewModels")
        .attributes(|writer| {
            writer.line(
                "[global::System.CodeDom.Compiler.GeneratedCodeAttribute(\"stencil-csharp\", \"0.1.0\")]",
            );
        });

    let code = SourceFileBuilder::new(Indent::Spaces(4))
        .declaration(&descriptor, |writer| {
            writer.begin_block_with("public void Load()").close();
            writer.begin_block_with("public void Save()").close();
        })
        .build();

    insta::assert_snapshot!("attributed_view_model", code);
}

#[test]
fn deeply_nested_chain() {
    let descriptor = TypeDescriptor::new("Payload", TypeKind::Record)
        .namespace("App")
        .containing_type("Outer", TypeKind::Class)
        .containing_type("Middle", TypeKind::Struct)
        .containing_type("Inner", TypeKind::Record);

    let code = SourceFileBuilder::new(Indent::Spaces(2))
        .declaration(&descriptor, |_| {})
        .build();

    insta::assert_snapshot!("deeply_nested_chain", code);
}
