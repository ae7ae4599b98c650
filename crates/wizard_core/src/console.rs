//! Line-oriented I/O port used by the factory and the battle loop.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("input stream closed")]
    Closed,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub trait Console {
    /// Shows `text` and returns the next input line without its terminator.
    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError>;

    fn say(&mut self, line: &str) -> Result<(), ConsoleError>;
}

/// Console over any reader/writer pair; `stdio()` binds it to the process
/// streams.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(ConsoleError::Closed);
        }
        // Undecodable bytes become U+FFFD and fail token matching downstream.
        Ok(strip_terminator(String::from_utf8_lossy(&raw).into_owned()))
    }

    fn say(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }
}

fn strip_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Replays canned input and records everything shown, for tests and
/// scripted runs. Each prompt is recorded together with the answer it got.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn into_transcript(self) -> Vec<String> {
        self.transcript
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        let answer = self.inputs.pop_front().ok_or(ConsoleError::Closed)?;
        self.transcript.push(format!("{text}{answer}"));
        Ok(answer)
    }

    fn say(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.transcript.push(line.to_owned());
        Ok(())
    }
}
