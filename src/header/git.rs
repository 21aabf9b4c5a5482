//! Extended (`diff --git`) header parsing.
//!
//! After the marker line, git writes zero or more extended header lines
//! (`old mode`, `rename from`, `index`, ...) and optionally the `---`/`+++`
//! pair. Each line is classified, applied to the `File` under construction,
//! and consumed. The first line that is not header data (usually a fragment
//! marker) ends the header and is left in the source.

use super::{FRAGMENT_PREFIX, GIT_HEADER_PREFIX, NEW_FILE_PREFIX, OLD_FILE_PREFIX};
use crate::error::{HeaderError, ParseError, Result};
use crate::fields::{parse_index, parse_mode, parse_score};
use crate::file::{File, Side};
use crate::name::{parse_name, Terminator};
use crate::options::ParseOptions;
use crate::source::LineSource;
use crate::verify::verify_name;

/// A classified line of git header data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum GitHeaderLine<'a> {
    OldName(&'a str),
    NewName(&'a str),
    OldMode(&'a str),
    NewMode(&'a str),
    DeletedFileMode(&'a str),
    NewFileMode(&'a str),
    CopyFrom(&'a str),
    CopyTo(&'a str),
    RenameFrom(&'a str),
    RenameTo(&'a str),
    Similarity(&'a str),
    Dissimilarity(&'a str),
    Index(&'a str),
    Fragment,
    /// Anything else; ends the header.
    Other,
}

impl<'a> GitHeaderLine<'a> {
    /// Classify `line` (without its newline). Prefixes are tried in table
    /// order and the first match wins.
    pub(super) fn classify(line: &'a str) -> Self {
        use GitHeaderLine::*;

        let table: [(&str, fn(&'a str) -> GitHeaderLine<'a>); 16] = [
            (OLD_FILE_PREFIX, OldName),
            (NEW_FILE_PREFIX, NewName),
            ("old mode ", OldMode),
            ("new mode ", NewMode),
            ("deleted file mode ", DeletedFileMode),
            ("new file mode ", NewFileMode),
            ("copy from ", CopyFrom),
            ("copy to ", CopyTo),
            ("rename old ", RenameFrom),
            ("rename from ", RenameFrom),
            ("rename new ", RenameTo),
            ("rename to ", RenameTo),
            ("similarity index ", Similarity),
            ("dissimilarity index ", Dissimilarity),
            ("index ", Index),
            (FRAGMENT_PREFIX, |_| Fragment),
        ];

        table
            .iter()
            .find_map(|(prefix, make)| line.strip_prefix(*prefix).map(*make))
            .unwrap_or(Other)
    }
}

/// How the header loop proceeds after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    /// Header over. `fragment` is true when the ending line is a fragment
    /// marker.
    End { fragment: bool },
}

/// Parse a git header whose marker line has already been consumed from
/// `source`.
pub(super) fn parse_git_header<S: LineSource + ?Sized>(
    source: &mut S,
    marker: &str,
    options: &ParseOptions,
) -> Result<File> {
    let header_line = source.line_number();
    let error_at =
        move |offset: usize, kind: HeaderError| ParseError::new(header_line, offset, kind);

    let marker = marker.trim_end_matches('\n');
    let marker = marker.strip_prefix(GIT_HEADER_PREFIX).unwrap_or(marker);
    let default_name =
        parse_default_name(marker, options.strip_components).map_err(|kind| error_at(0, kind))?;

    let mut file = File::default();
    // Header lines consumed after the marker. The peeked line is at
    // `consumed + 1`.
    let mut consumed = 0;
    let fragment = loop {
        let offset = consumed + 1;
        let line = match source.peek() {
            Ok(Some(line)) => line,
            Ok(None) => break false,
            Err(err) => return Err(error_at(offset, err.into())),
        };

        let line = line.strip_suffix('\n').unwrap_or(line);
        let kind = GitHeaderLine::classify(line);
        tracing::trace!(target: "diffmeta.header", offset, line = ?kind, "git header line");

        match apply_line(&mut file, kind, default_name.as_deref(), options) {
            Ok(Step::Continue) => {
                source.advance();
                consumed = offset;
            }
            Ok(Step::End { fragment }) => break fragment,
            Err(kind) => return Err(error_at(offset, kind)),
        }
    };

    finalize(&mut file, default_name, fragment).map_err(|kind| error_at(0, kind))?;

    tracing::debug!(
        target: "diffmeta.header",
        op = "git_header",
        old_name = ?file.old_name,
        new_name = ?file.new_name,
        is_new = file.is_new,
        is_delete = file.is_delete,
        is_rename = file.is_rename,
        is_copy = file.is_copy,
        lines = consumed,
        "git file header parsed"
    );

    Ok(file)
}

/// Extract the name shared by both tokens of the marker line.
///
/// Mode-only changes and empty-file creations or deletions carry no `---`/`+++`
/// lines, so this is the only place their name appears. Returns `None` when
/// the tokens differ, as they do for renames.
fn parse_default_name(
    header: &str,
    strip: usize,
) -> std::result::Result<Option<String>, HeaderError> {
    let (first, mut n) = parse_name(header, Terminator::Whitespace, strip)?;
    if header[n..].starts_with([' ', '\t']) {
        n += 1;
    }
    let (second, _) = parse_name(&header[n..], Terminator::Whitespace, strip)?;

    Ok((first == second).then_some(first))
}

fn apply_line(
    file: &mut File,
    line: GitHeaderLine<'_>,
    default_name: Option<&str>,
    options: &ParseOptions,
) -> std::result::Result<Step, HeaderError> {
    use GitHeaderLine::*;

    let strip = options.strip_components;
    match line {
        OldName(rest) => set_marker_name(file, Side::Old, rest, strip)?,
        NewName(rest) => set_marker_name(file, Side::New, rest, strip)?,
        OldMode(rest) => file.old_mode = Some(parse_mode(rest)?),
        NewMode(rest) => file.new_mode = Some(parse_mode(rest)?),
        DeletedFileMode(rest) => {
            file.is_delete = true;
            if let Some(name) = default_name {
                file.old_name = Some(name.to_string());
            }
            file.old_mode = Some(parse_mode(rest)?);
        }
        NewFileMode(rest) => {
            file.is_new = true;
            if let Some(name) = default_name {
                file.new_name = Some(name.to_string());
            }
            file.new_mode = Some(parse_mode(rest)?);
        }
        CopyFrom(rest) => {
            file.is_copy = true;
            file.old_name = Some(parse_bare_name(rest)?);
        }
        CopyTo(rest) => {
            file.is_copy = true;
            file.new_name = Some(parse_bare_name(rest)?);
        }
        RenameFrom(rest) => {
            file.is_rename = true;
            file.old_name = Some(parse_bare_name(rest)?);
        }
        RenameTo(rest) => {
            file.is_rename = true;
            file.new_name = Some(parse_bare_name(rest)?);
        }
        Similarity(rest) | Dissimilarity(rest) => match parse_score(rest)? {
            Some(score) => file.score = Some(score),
            None => tracing::debug!(
                target: "diffmeta.header",
                score = rest,
                "score out of range, ignoring"
            ),
        },
        Index(rest) => {
            let index = parse_index(rest)?;
            file.old_oid_prefix = Some(index.old_oid_prefix.to_string());
            file.new_oid_prefix = Some(index.new_oid_prefix.to_string());
            if let Some(mode) = index.mode {
                // A mode on the index line means the mode did not change.
                file.old_mode = Some(mode);
                file.new_mode.get_or_insert(mode);
            }
        }
        Fragment => return Ok(Step::End { fragment: true }),
        Other => return Ok(Step::End { fragment: false }),
    }
    Ok(Step::Continue)
}

/// Handle a `---` or `+++` name. The first statement of a side's name is
/// stored; later ones must agree with it.
fn set_marker_name(
    file: &mut File,
    side: Side,
    rest: &str,
    strip: usize,
) -> std::result::Result<(), HeaderError> {
    let (name, _) = parse_name(rest, Terminator::Byte(b'\t'), strip)?;

    if file.name(side).is_none() && !file.is_null(side) {
        *file.name_slot(side) = Some(name);
        return Ok(());
    }
    verify_name(&name, file.name(side), file.is_null(side), side)
}

/// Names on copy and rename lines run to the end of the line and keep their
/// full path.
fn parse_bare_name(rest: &str) -> std::result::Result<String, HeaderError> {
    let (name, _) = parse_name(rest, Terminator::LineEnd, 0)?;
    Ok(name)
}

fn finalize(
    file: &mut File,
    default_name: Option<String>,
    fragment: bool,
) -> std::result::Result<(), HeaderError> {
    // Headers followed by content must name their files explicitly; the
    // marker-line default only covers headers without fragments.
    if file.old_name.is_none() && file.new_name.is_none() && !fragment {
        let name = default_name.ok_or(HeaderError::MissingFilename)?;
        file.old_name = Some(name.clone());
        file.new_name = Some(name);
    }

    if (file.new_name.is_none() && !file.is_delete) || (file.old_name.is_none() && !file.is_new) {
        return Err(HeaderError::MissingFilename);
    }
    Ok(())
}
