//!
//! src/prompt.rs
//!
//! Line based prompting over any reader/writer pair. The binary wires it
//! to stdin/stdout, tests wire it to in-memory buffers.
//!

use std::io::{self, BufRead, Write};

use crate::errors::RaterError;

pub trait Prompter {
    /// Shows `label` and returns one line of input without its line ending
    fn input(&mut self, label: &str) -> Result<String, RaterError>;

    /// Shows `label [y/N]`, true only for an explicit yes
    fn confirm(&mut self, label: &str) -> Result<bool, RaterError>;

    /// Prints a message line
    fn say(&mut self, text: &str) -> Result<(), RaterError>;
}

pub struct LinePrompter<R, W> {
    reader: R,
    writer: W
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self) -> Result<String, RaterError> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)
            .map_err(|e| RaterError::Prompt(e.to_string()))?;
        if read == 0 {
            return Err(RaterError::Prompt("EOF".to_string()));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn show(&mut self, text: &str) -> Result<(), RaterError> {
        write!(self.writer, "{text}")
            .and_then(|_| self.writer.flush())
            .map_err(|e| RaterError::Prompt(e.to_string()))
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&mut self, label: &str) -> Result<String, RaterError> {
        self.show(&format!("{label}: "))?;
        self.read_line()
    }

    fn confirm(&mut self, label: &str) -> Result<bool, RaterError> {
        self.show(&format!("{label} [y/N]: "))?;
        Ok(is_affirmative(&self.read_line()?))
    }

    fn say(&mut self, text: &str) -> Result<(), RaterError> {
        self.show(&format!("{text}\n"))
    }
}
