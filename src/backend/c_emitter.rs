//! C code emitter - builds C source text line by line
//!
//! A small buffer with indentation tracking, in the shape the lookup table needs: preprocessor lines,
//! a function block and a switch with one case per registered code.

use std::fmt::Write;

/// A buffer for building C source code with indentation
#[derive(Debug)]
pub struct CEmitter {
    buffer: String,
    indent_level: usize,
    indent_str: &'static str,
}

impl Default for CEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CEmitter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent_str: "  ",
        }
    }

    /// Get the generated code
    pub fn finish(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write a formatted line with current indentation
    pub fn linef(&mut self, args: std::fmt::Arguments<'_>) {
        self.write_indent();
        let _ = self.buffer.write_fmt(args);
        self.buffer.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent_str);
        }
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write a block with braces
    pub fn block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(&format!("{} {{", header));
        self.indent();
        f(self);
        self.dedent();
        self.line("}");
    }

    /// Write a `/* ... */` comment line
    pub fn comment(&mut self, text: &str) {
        self.linef(format_args!("/* {} */", text.replace("*/", "* /")));
    }

    /// Write a `switch` whose cases sit at the same depth as the `switch` keyword.
    pub fn switch<F>(&mut self, scrutinee: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(&format!("switch({}) {{", scrutinee));
        f(self);
        self.line("}");
    }

    /// Write `case 0xNNNN: return "<literal>"; break;`
    ///
    /// `literal` must already be escaped for a C string.
    pub fn return_case(&mut self, code: u16, literal: &str) {
        self.linef(format_args!("case 0x{:04x}: return \"{}\"; break;", code, literal));
    }
}
