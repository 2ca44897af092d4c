// 🖥️ Console - line-oriented prompts over any reader/writer
// stdin/stdout in the binary, Cursor/Vec<u8> in tests

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Print `message` without a newline and read one line.
    ///
    /// Returns `None` at end of input. The trailing newline is stripped; other
    /// whitespace is left for the caller to interpret.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Print one line
    pub fn say(&mut self, message: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", message.as_ref()).context("Failed to write output")
    }

    /// Hand back the writer (tests inspect what was printed)
    pub fn into_output(self) -> W {
        self.output
    }
}
