//! Per-file header parsing for unified diff patches.
//!
//! A patch is a sequence of per-file sections. Each section starts with a
//! header describing which file changed and how: its old and new names, modes,
//! and whether it was created, deleted, renamed or copied. This crate reads
//! those headers in both dialects seen in the wild:
//!
//! - git's `diff --git` headers with extended header lines
//! - traditional `---`/`+++` headers as written by GNU diff
//!
//! and produces one [`File`] per header. Fragment (hunk) bodies are not
//! parsed; the line that ends a header is left in the source for whatever
//! reads fragments next.
//!
//! ```
//! use diffmeta::{parse_file_headers, ParseOptions};
//!
//! let patch = "diff --git a/run.sh b/run.sh\nold mode 100644\nnew mode 100755\n";
//! let headers = parse_file_headers(patch, &ParseOptions::default()).unwrap();
//! assert_eq!(headers[0].file.new_name.as_deref(), Some("run.sh"));
//! assert_eq!(headers[0].file.new_mode, Some(0o100755));
//! ```

pub mod error;
pub mod fields;
pub mod file;
pub mod header;
pub mod name;
pub mod options;
pub mod source;
pub mod timestamp;
pub mod verify;

pub use error::{ConfigError, HeaderError, NameConflict, NameError, ParseError, Result};
pub use file::{File, Side, DEV_NULL};
pub use header::{parse_file_headers, HeaderParser, ParsedHeader};
pub use options::ParseOptions;
pub use source::{LineSource, ReaderLines, StrLines};
