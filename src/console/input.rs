//! Console input/output primitives
//!
//! All reads are line-based: every read consumes up to and including the
//! terminator, so a malformed entry never leaks into the next prompt.

use std::io::{BufRead, Write};

use crate::error::AppResult;

/// One interactive console session over a reader/writer pair
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Read one line, stripping the trailing terminator only.
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Print a prompt and read the answer.
    ///
    /// End of input yields an empty answer.
    pub fn prompt(&mut self, label: &str) -> AppResult<String> {
        self.write_str(label)?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Prompt for an integer; `Ok(None)` when the answer does not parse
    pub fn prompt_int(&mut self, label: &str) -> AppResult<Option<i32>> {
        let answer = self.prompt(label)?;
        Ok(answer.trim().parse().ok())
    }

    /// Write text without a newline and flush, so prompts show up before
    /// the blocking read that follows them
    pub fn write_str(&mut self, text: &str) -> AppResult<()> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_line(&mut self, text: &str) -> AppResult<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Wait for the user to acknowledge before returning to the menu
    pub fn pause(&mut self) -> AppResult<()> {
        self.write_str("\nPressione Enter para continuar...")?;
        self.read_line()?;
        Ok(())
    }
}
