//! Session runner: the fixed prompt/read/respond sequence

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::engine::{parse_number, Operation};
use crate::error::{Result, SessionError};
use crate::output::format_general;

/// Drives one session over an input and an output stream.
///
/// Both streams are owned for the runner's lifetime. Input errors are written
/// to `output` as the final line of the transcript and then returned, so the
/// caller decides only how the process exits.
pub struct SessionRunner<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> SessionRunner<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the session to completion, returning the computed result.
    pub fn run(&mut self) -> Result<f64> {
        match self.run_steps() {
            Ok(result) => Ok(result),
            Err(e) if e.is_input_error() => {
                debug!(error = ?e, "session aborted");
                info!(kind = e.kind_name(), "session aborted");
                writeln!(self.output, "{}", e)?;
                self.output.flush()?;
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Give back the streams, mainly so tests can inspect the transcript.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn run_steps(&mut self) -> Result<f64> {
        writeln!(self.output, "Hello Remote World!")?;

        // Name and language are echoed byte for byte, valid UTF-8 or not
        let name = self.prompt("Enter your name: ")?;
        self.output.write_all(b"Hello, ")?;
        self.output.write_all(&name)?;
        self.output.write_all(b"! Welcome to the Remote World!\n")?;

        let language = self.prompt("Enter your favorite programming language: ")?;
        self.output.write_all(&language)?;
        self.output.write_all(b" is a great choice!\n")?;

        writeln!(self.output, "Let's do some basic arithmetic.")?;
        let num1 = self.prompt_text("Enter the first number: ")?;
        let num1 = parse_number(&num1)?;
        let num2 = self.prompt_text("Enter the second number: ")?;
        let num2 = parse_number(&num2)?;
        debug!(num1, num2, "numbers parsed");

        let operation: Operation = self
            .prompt_text("Choose an operation (+, -, *, /): ")?
            .parse()?;
        let result = operation.apply(num1, num2)?;
        debug!(%operation, result, "operation applied");

        writeln!(
            self.output,
            "The result of the operation is: {}",
            format_general(result)
        )?;
        self.output.flush()?;
        Ok(result)
    }

    /// Write a prompt without a newline and read the raw answer.
    fn prompt(&mut self, text: &str) -> Result<Vec<u8>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompt for an answer that is parsed as text. Invalid UTF-8 is replaced
    /// so it fails parsing instead of the read.
    fn prompt_text(&mut self, text: &str) -> Result<String> {
        let line = self.prompt(text)?;
        Ok(String::from_utf8_lossy(&line).into_owned())
    }

    /// Read one line without its terminator. Exhausted input reads as "".
    fn read_line(&mut self) -> Result<Vec<u8>> {
        let mut line = Vec::new();
        let read = self.input.read_until(b'\n', &mut line)?;
        if read == 0 {
            debug!("input exhausted, using empty line");
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
