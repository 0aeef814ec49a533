//! Byte-counting sink adapter

use std::io::{self, Write};

/// Wraps a sink and counts the bytes it actually accepted
#[derive(Debug)]
pub(crate) struct WriteCounter<W> {
    inner: W,
    written: u64,
}

impl<W: Write> WriteCounter<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    pub(crate) fn written(&self) -> u64 {
        self.written
    }
}

impl<W: Write> Write for WriteCounter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
