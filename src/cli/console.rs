//! Line-oriented console I/O
//!
//! All interactive prompts go through `Console`, which is generic over its
//! reader and writer so the menu can be driven from in-memory buffers.

use std::fmt::Display;
use std::io::{BufRead, Write};

use zeroize::Zeroizing;

use crate::error::{TrackerError, TrackerResult};

/// Prompting console over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
    hidden_passwords: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            hidden_passwords: false,
        }
    }

    /// Read passwords from the terminal without echo
    ///
    /// Only meaningful when stdin is a terminal; otherwise passwords are read
    /// as plain lines from the console input.
    pub fn with_hidden_passwords(mut self, hidden: bool) -> Self {
        self.hidden_passwords = hidden;
        self
    }

    /// Write a line of output
    pub fn say(&mut self, text: impl Display) -> TrackerResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write text without a trailing newline
    pub fn write(&mut self, text: impl Display) -> TrackerResult<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }

    /// Show a prompt and read one line; `None` at end of input
    ///
    /// The line terminator is stripped, other whitespace is kept.
    pub fn prompt(&mut self, prompt: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Prompt for a password, wiping it from memory when dropped
    pub fn prompt_password(&mut self, prompt: &str) -> TrackerResult<Option<Zeroizing<String>>> {
        if self.hidden_passwords {
            self.output.flush()?;
            return rpassword::prompt_password(prompt)
                .map(|p| Some(Zeroizing::new(p)))
                .map_err(|e| TrackerError::Io(format!("Failed to read password: {}", e)));
        }

        Ok(self.prompt(prompt)?.map(Zeroizing::new))
    }

    /// Consume the console, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }
}
