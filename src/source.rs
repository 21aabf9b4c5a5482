//! Forward-only line sources for header parsing.
//!
//! The parser looks at most one line ahead: it peeks a line, decides whether
//! it belongs to the header, and only then advances past it. Lines are
//! returned with their trailing newline.

use std::io::{self, BufRead};

/// A forward-only cursor over the lines of a patch.
pub trait LineSource {
    /// Return the next line without consuming it, or `None` at end of input.
    fn peek(&mut self) -> io::Result<Option<&str>>;

    /// Move past the line returned by the last `peek`.
    fn advance(&mut self);

    /// Number of lines consumed so far.
    fn line_number(&self) -> usize;

    /// Consume and return the next line.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let line = match self.peek()? {
            Some(line) => line.to_string(),
            None => return Ok(None),
        };
        self.advance();
        Ok(Some(line))
    }
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn peek(&mut self) -> io::Result<Option<&str>> {
        (**self).peek()
    }

    fn advance(&mut self) {
        (**self).advance()
    }

    fn line_number(&self) -> usize {
        (**self).line_number()
    }
}

/// Lines of an in-memory patch.
#[derive(Debug, Clone)]
pub struct StrLines<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> StrLines<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 0,
        }
    }

    /// The unconsumed remainder of the input.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn next_end(&self) -> usize {
        match self.input[self.pos..].find('\n') {
            Some(index) => self.pos + index + 1,
            None => self.input.len(),
        }
    }
}

impl LineSource for StrLines<'_> {
    fn peek(&mut self) -> io::Result<Option<&str>> {
        if self.pos >= self.input.len() {
            return Ok(None);
        }
        Ok(Some(&self.input[self.pos..self.next_end()]))
    }

    fn advance(&mut self) {
        if self.pos < self.input.len() {
            self.pos = self.next_end();
            self.line += 1;
        }
    }

    fn line_number(&self) -> usize {
        self.line
    }
}

/// Lines read incrementally from a buffered reader.
///
/// Input is read as bytes. Invalid UTF-8 (a Latin-1 hunk body, say) is
/// replaced with U+FFFD instead of failing the read.
#[derive(Debug)]
pub struct ReaderLines<R> {
    reader: R,
    raw: Vec<u8>,
    buf: String,
    peeked: bool,
    eof: bool,
    line: usize,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            raw: Vec::new(),
            buf: String::new(),
            peeked: false,
            eof: false,
            line: 0,
        }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn peek(&mut self) -> io::Result<Option<&str>> {
        if !self.peeked && !self.eof {
            self.raw.clear();
            if self.reader.read_until(b'\n', &mut self.raw)? == 0 {
                self.eof = true;
            } else {
                self.buf.clear();
                self.buf.push_str(&String::from_utf8_lossy(&self.raw));
                self.peeked = true;
            }
        }
        if self.peeked {
            Ok(Some(self.buf.as_str()))
        } else {
            Ok(None)
        }
    }

    /// Has no effect unless a line has been peeked.
    fn advance(&mut self) {
        if self.peeked {
            self.peeked = false;
            self.line += 1;
        }
    }

    fn line_number(&self) -> usize {
        self.line
    }
}
