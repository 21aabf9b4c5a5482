//! File header parsing.
//!
//! Two header dialects are recognized:
//! - git: a `diff --git a/<old> b/<new>` marker followed by extended header
//!   lines and, when there is content, a `---`/`+++` pair
//! - traditional: a bare `---`/`+++` pair as written by GNU diff
//!
//! Either way the result is one `File`. The line that ends the header (usually
//! the first `@@` fragment marker) is left unconsumed in the source for the
//! fragment parser.

mod git;
mod traditional;


use crate::error::{HeaderError, ParseError, Result};
use crate::file::File;
use crate::options::ParseOptions;
use crate::source::{LineSource, StrLines};
use serde::Serialize;

/// Marker line of a git header.
pub const GIT_HEADER_PREFIX: &str = "diff --git ";
/// Old-file line of either dialect.
pub const OLD_FILE_PREFIX: &str = "--- ";
/// New-file line of either dialect.
pub const NEW_FILE_PREFIX: &str = "+++ ";
/// Start of a fragment (hunk) header.
pub const FRAGMENT_PREFIX: &str = "@@";

/// Start of a unified fragment header, required after a traditional header
/// found by scanning.
const FRAGMENT_HEADER_PREFIX: &str = "@@ -";

/// A file header located by [`HeaderParser::next_file`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedHeader {
    /// The parsed descriptor.
    #[serde(flatten)]
    pub file: File,
    /// Line number of the first header line.
    pub line: usize,
    /// Text skipped before the header (commit message, fragment bodies of
    /// the previous file, ...). Empty unless preamble collection is on.
    #[serde(skip)]
    pub preamble: String,
}

/// Parses file headers from a line source.
///
/// Headers are parsed strictly one after another; each parse owns the `File`
/// it builds and hands it back to the caller when the header ends.
#[derive(Debug)]
pub struct HeaderParser<S> {
    source: S,
    options: ParseOptions,
    collect_preamble: bool,
}

impl<S: LineSource> HeaderParser<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn with_options(source: S, options: ParseOptions) -> Self {
        Self {
            source,
            options,
            collect_preamble: true,
        }
    }

    /// Whether `next_file` keeps the skipped text in
    /// [`ParsedHeader::preamble`]. On by default; turn it off to avoid
    /// buffering fragment bodies that will not be read.
    pub fn collect_preamble(mut self, collect: bool) -> Self {
        self.collect_preamble = collect;
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// The underlying source, positioned at the first unconsumed line.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Parse the header that starts with `first`, a line the caller has
    /// already consumed from the source.
    ///
    /// A `diff --git` line starts a git header. A `---` line must be followed
    /// by a `+++` line, which is consumed. Anything else is an error.
    pub fn parse_header(&mut self, first: &str) -> Result<File> {
        let header_line = self.source.line_number();

        if first.starts_with(GIT_HEADER_PREFIX) {
            return git::parse_git_header(&mut self.source, first, &self.options);
        }

        if first.starts_with(OLD_FILE_PREFIX) {
            let second = match self.source.peek() {
                Ok(Some(line)) if line.starts_with(NEW_FILE_PREFIX) => line.to_string(),
                Ok(Some(line)) => {
                    let kind = HeaderError::UnrecognizedHeader(line.trim_end().to_string());
                    return Err(ParseError::new(header_line, 1, kind));
                }
                Ok(None) => {
                    return Err(ParseError::new(header_line, 1, HeaderError::UnexpectedEof));
                }
                Err(err) => return Err(ParseError::new(header_line, 1, err.into())),
            };
            self.source.advance();
            return traditional::parse_traditional_header(
                first,
                &second,
                header_line,
                &self.options,
            );
        }

        let kind = HeaderError::UnrecognizedHeader(first.trim_end().to_string());
        Err(ParseError::new(header_line, 0, kind))
    }

    /// Scan forward to the next file header and parse it.
    ///
    /// Lines before the header are collected as preamble. A traditional
    /// header is only recognized when its `+++` line is followed by a fragment
    /// header, so `---`/`+++` lines inside fragment bodies are not mistaken
    /// for headers. Returns `None` at end of input.
    pub fn next_file(&mut self) -> Result<Option<ParsedHeader>> {
        let mut preamble = String::new();

        while let Some(line) = self.read_line()? {
            let header_line = self.source.line_number();

            if line.starts_with(GIT_HEADER_PREFIX) {
                let file = self.parse_header(&line)?;
                return Ok(Some(self.found(file, header_line, preamble)));
            }

            if line.starts_with(OLD_FILE_PREFIX) && self.peek_starts_with(NEW_FILE_PREFIX)? {
                let second = self
                    .read_line()?
                    .ok_or_else(|| ParseError::new(header_line, 1, HeaderError::UnexpectedEof))?;

                if self.peek_starts_with(FRAGMENT_HEADER_PREFIX)? {
                    let file = traditional::parse_traditional_header(
                        &line,
                        &second,
                        header_line,
                        &self.options,
                    )?;
                    return Ok(Some(self.found(file, header_line, preamble)));
                }

                if self.collect_preamble {
                    preamble.push_str(&line);
                    preamble.push_str(&second);
                }
                continue;
            }

            if self.collect_preamble {
                preamble.push_str(&line);
            }
        }

        Ok(None)
    }

    fn found(&self, file: File, line: usize, preamble: String) -> ParsedHeader {
        tracing::debug!(
            target: "diffmeta.header",
            op = "next_file",
            line,
            preamble_len = preamble.len(),
            "file header found"
        );
        ParsedHeader {
            file,
            line,
            preamble,
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let consumed = self.source.line_number();
        self.source
            .next_line()
            .map_err(|err| ParseError::new(consumed, 1, err.into()))
    }

    fn peek_starts_with(&mut self, prefix: &str) -> Result<bool> {
        let consumed = self.source.line_number();
        match self.source.peek() {
            Ok(line) => Ok(line.is_some_and(|line| line.starts_with(prefix))),
            Err(err) => Err(ParseError::new(consumed, 1, err.into())),
        }
    }
}

/// Parse every file header in an in-memory patch.
pub fn parse_file_headers(input: &str, options: &ParseOptions) -> Result<Vec<ParsedHeader>> {
    let mut parser = HeaderParser::with_options(StrLines::new(input), options.clone());
    let mut headers = Vec::new();
    while let Some(header) = parser.next_file()? {
        headers.push(header);
    }
    Ok(headers)
}
