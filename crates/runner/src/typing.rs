//! Simulated typing for chat output

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Writes lines one character at a time with a fixed pause
pub struct TypingWriter<W: Write> {
    inner: W,
    delay: Duration,
}

impl<W: Write> TypingWriter<W> {
    pub fn new(inner: W, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// No pause between characters
    pub fn instant(inner: W) -> Self {
        Self::new(inner, Duration::ZERO)
    }

    /// Type out `text` followed by a newline
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        if self.delay.is_zero() {
            writeln!(self.inner, "{}", text)?;
            return self.inner.flush();
        }

        for c in text.chars() {
            write!(self.inner, "{}", c)?;
            self.inner.flush()?;
            thread::sleep(self.delay);
        }
        writeln!(self.inner)?;
        self.inner.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_write() {
        let mut writer = TypingWriter::instant(Vec::new());
        writer.write_line("Salve").unwrap();
        writer.write_line("").unwrap();
        assert_eq!(writer.into_inner(), b"Salve\n\n");
    }

    #[test]
    fn test_delayed_write_same_output() {
        let mut writer = TypingWriter::new(Vec::new(), Duration::from_millis(1));
        writer.write_line("XIV").unwrap();
        assert_eq!(writer.get_ref().as_slice(), b"XIV\n");
    }
}
