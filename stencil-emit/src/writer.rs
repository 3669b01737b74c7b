//! Indented source writer.

use crate::{BlockScope, Indent};

/// Line that opens a brace block.
pub(crate) const BLOCK_OPEN: &str = "{";
/// Line that closes a brace block.
pub(crate) const BLOCK_CLOSE: &str = "}";
/// Continuation keyword exempt from the blank separator rule.
const ELSE_KEYWORD: &str = "else";

/// Append-only writer that indents every physical line to the current
/// brace-block depth.
///
/// The writer inserts one blank line between a closed block and whatever
/// follows it, unless the next line closes an enclosing block (`}`) or
/// continues the same construct (`else`). Blocks are opened with
/// [`begin_block`](Self::begin_block) and closed by dropping the returned
/// [`BlockScope`], so depth is always balanced on every exit path.
///
/// # Example
///
/// ```
/// use stencil_emit::SourceWriter;
///
/// let mut writer = SourceWriter::default();
/// let mut scope = writer.begin_block_with("partial class Foo");
/// scope.line("public int Bar;");
/// scope.close();
///
/// assert_eq!(writer.as_str(), "partial class Foo\n{\n\tpublic int Bar;\n}\n");
/// ```
#[derive(Debug)]
pub struct SourceWriter {
    buffer: String,
    indent: Indent,
    depth: usize,
    indent_pending: bool,
    last_line_closed_block: bool,
}

impl SourceWriter {
    /// Create a new writer with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            buffer: String::new(),
            indent,
            depth: 0,
            indent_pending: true,
            last_line_closed_block: false,
        }
    }

    /// Write `text` as a full line at the current depth.
    ///
    /// If the previous line closed a block and `text` neither closes the
    /// enclosing block nor is the `else` keyword, a blank separator line is
    /// emitted first.
    pub fn line(&mut self, text: &str) -> &mut Self {
        if self.last_line_closed_block && text != BLOCK_CLOSE && text != ELSE_KEYWORD {
            self.buffer.push('\n');
        }
        self.write_pending_indent();
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self.indent_pending = true;
        self.last_line_closed_block = text == BLOCK_CLOSE;
        self
    }

    /// Write `text` without a line terminator.
    ///
    /// Pending indentation is applied if this is the first write on the
    /// current physical line.
    pub fn write(&mut self, text: &str) -> &mut Self {
        self.write_pending_indent();
        self.buffer.push_str(text);
        self
    }

    /// Terminate the current physical line.
    pub fn newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self.indent_pending = true;
        self.last_line_closed_block = false;
        self
    }

    /// Open a brace block, returning a scope that closes it on release.
    pub fn begin_block(&mut self) -> BlockScope<'_> {
        self.open_block();
        BlockScope::new(self, 1)
    }

    /// Write `header` as a line, then open a brace block.
    pub fn begin_block_with(&mut self, header: &str) -> BlockScope<'_> {
        self.line(header);
        self.begin_block()
    }

    /// Current nesting depth (number of open blocks).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// View of the accumulated output.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer and return the accumulated output.
    pub fn into_string(self) -> String {
        self.buffer
    }

    pub(crate) fn open_block(&mut self) {
        self.line(BLOCK_OPEN);
        self.depth += 1;
    }

    /// Close one block. Calling this with no open block is a contract
    /// violation and panics rather than producing corrupted output.
    pub(crate) fn close_block(&mut self) {
        assert!(self.depth > 0, "close_block with no open block");
        self.depth -= 1;
        self.line(BLOCK_CLOSE);
    }

    fn write_pending_indent(&mut self) {
        if !self.indent_pending {
            return;
        }
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent.as_str());
        }
        self.indent_pending = false;
    }
}

impl Default for SourceWriter {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
