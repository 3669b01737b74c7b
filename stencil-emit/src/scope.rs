//! Scoped release of open brace blocks.

use std::ops::{Deref, DerefMut};

use crate::SourceWriter;

/// Guard over one or more open brace blocks.
///
/// Created by [`SourceWriter::begin_block`]; dropping the guard closes every
/// block it recorded, innermost first, on all exit paths including early
/// returns and panics. The guard holds the exclusive borrow of the writer,
/// so body content is written through it and out-of-order release is
/// rejected at compile time.
///
/// # Example
///
/// ```
/// use stencil_emit::SourceWriter;
///
/// let mut writer = SourceWriter::default();
/// let mut scope = writer.begin_block_with("namespace App").nested_with("partial class Foo");
/// scope.line("public int Bar;");
/// scope.close();
///
/// assert!(writer.as_str().ends_with("\t\tpublic int Bar;\n\t}\n}\n"));
/// ```
#[derive(Debug)]
pub struct BlockScope<'w> {
    writer: &'w mut SourceWriter,
    blocks: usize,
}

impl<'w> BlockScope<'w> {
    pub(crate) fn new(writer: &'w mut SourceWriter, blocks: usize) -> Self {
        debug_assert!(blocks >= 1);
        Self { writer, blocks }
    }

    /// Open another block inside this one, folding its close into this guard.
    pub fn nested(mut self) -> Self {
        self.writer.open_block();
        self.blocks += 1;
        self
    }

    /// Write `header` as a line, then open a nested block folded into this
    /// guard.
    pub fn nested_with(mut self, header: &str) -> Self {
        self.writer.line(header);
        self.nested()
    }

    /// Number of blocks this guard closes on release.
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// Release the guard, closing its blocks. Equivalent to dropping it;
    /// provided as an explicit release point.
    pub fn close(self) {}
}

impl Deref for BlockScope<'_> {
    type Target = SourceWriter;

    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl DerefMut for BlockScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}

impl Drop for BlockScope<'_> {
    fn drop(&mut self) {
        for _ in 0..self.blocks {
            self.writer.close_block();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_count_matches_opens() {
        let mut writer = SourceWriter::default();
        let scope = writer
            .begin_block_with("namespace App")
            .nested_with("partial class Outer")
            .nested_with("partial class Inner");
        assert_eq!(scope.blocks(), 3);
        scope.close();

        assert_eq!(writer.depth(), 0);
        assert_eq!(
            writer.as_str(),
            "namespace App\n{\n\tpartial class Outer\n\t{\n\t\tpartial class Inner\n\t\t{\n\t\t}\n\t}\n}\n"
        );
    }

    #[test]
    fn test_released_on_early_return() {
        fn emit(writer: &mut SourceWriter, fail: bool) -> Result<(), &'static str> {
            let mut scope = writer.begin_block_with("void A()");
            scope.line("work();");
            if fail {
                return Err("stop");
            }
            scope.line("done();");
            Ok(())
        }

        let mut writer = SourceWriter::default();
        assert_eq!(emit(&mut writer, true), Err("stop"));
        assert_eq!(writer.depth(), 0);
        assert_eq!(writer.as_str(), "void A()\n{\n\twork();\n}\n");
    }

    #[test]
    fn test_body_written_through_guard() {
        let mut writer = SourceWriter::default();
        let mut scope = writer.begin_block();
        scope.write("x = ");
        scope.write("1;");
        scope.newline();
        drop(scope);

        assert_eq!(writer.as_str(), "{\n\tx = 1;\n}\n");
    }

    #[test]
    fn test_sequential_guards_balance() {
        let mut writer = SourceWriter::default();
        for header in ["void A()", "void B()", "void C()"] {
            writer.begin_block_with(header).close();
            assert_eq!(writer.depth(), 0);
        }
    }
}
