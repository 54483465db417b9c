use crate::core::Console;
use crate::utils::error::Result;
use std::io::{BufRead, Stdin, Stdout, Write};

/// Console over any buffered reader and writer.
#[derive(Debug)]
pub struct LineConsole<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    /// Reads raw bytes so that invalid UTF-8 reaches the evaluator as an
    /// unrecognised token instead of failing the read.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub type StdConsole = LineConsole<std::io::StdinLock<'static>, Stdout>;

impl StdConsole {
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        LineConsole::new(stdin.lock(), std::io::stdout())
    }
}
