use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

#[derive(Debug)]
pub struct IoConsole<R: BufRead, W: Write> {
    input: R,
    output: W,
}

pub type StdConsole = IoConsole<StdinLock<'static>, Stdout>;

impl StdConsole {
    pub fn stdio() -> Self {
        IoConsole::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    /// Bytes that are not UTF-8 become U+FFFD, so they surface as bad input
    /// rather than as a console failure.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.output.flush()?;
        Ok(())
    }
}
