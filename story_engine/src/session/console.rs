//! Console seam - where the session shows text and waits for the player.

use std::io::{BufRead, Write};

use crate::error::EngineError;

/// The line-oriented surface a session talks to.
pub trait Console {
    /// Display a block of already wrapped text.
    fn show(&mut self, text: &str) -> Result<(), EngineError>;

    /// Show `prompt` and block until the player advances.
    fn acknowledge(&mut self, prompt: &str) -> Result<(), EngineError>;
}

/// Console over any buffered reader and writer. Any line of input advances.
#[derive(Debug)]
pub struct IoConsole<R, W> {
    input: R,
    output: W,
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
    fn show(&mut self, text: &str) -> Result<(), EngineError> {
        writeln!(self.output, "\n{text}")?;
        self.output.flush()?;
        Ok(())
    }

    fn acknowledge(&mut self, prompt: &str) -> Result<(), EngineError> {
        write!(self.output, "\n{prompt} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EngineError::InputClosed);
        }
        writeln!(self.output, "✓")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_show_and_acknowledge() {
        let mut console = IoConsole::new(Cursor::new("\n"), Vec::new());

        console.show("Hello").unwrap();
        console.acknowledge("Press the button:").unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "\nHello\n\nPress the button: ✓\n");
    }

    #[test]
    fn test_closed_input() {
        let mut console = IoConsole::new(Cursor::new(""), Vec::new());
        let err = console.acknowledge("Go").unwrap_err();
        assert!(matches!(err, EngineError::InputClosed));
    }
}
