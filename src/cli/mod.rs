//! CLI argument parsing for diffmeta.
//!
//! Uses clap derive macros for declarative argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Diffmeta: print the per-file header metadata of a patch.
///
/// Reads a git or traditional unified diff and writes one JSON object per file
/// header to stdout: names, modes, creation/deletion/rename/copy flags,
/// similarity score and abbreviated object ids.
#[derive(Parser, Debug)]
#[command(name = "diffmeta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Patch file to read. Reads stdin when omitted or `-`.
    pub patch: Option<PathBuf>,

    /// YAML file with parse options.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Leading path components to strip from names (overrides the config).
    #[arg(short = 'p', long = "strip", value_name = "N")]
    pub strip: Option<usize>,

    /// Log header parsing decisions to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The patch path, or `None` for stdin.
    pub fn patch_path(&self) -> Option<&PathBuf> {
        self.patch.as_ref().filter(|path| path.as_os_str() != "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["diffmeta"]).unwrap();
        assert!(cli.patch.is_none());
        assert!(cli.config.is_none());
        assert!(cli.strip.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(cli.patch_path().is_none());
    }

    #[test]
    fn parse_patch_and_strip() {
        let cli = Cli::try_parse_from(["diffmeta", "-p", "0", "change.patch"]).unwrap();
        assert_eq!(cli.strip, Some(0));
        assert_eq!(cli.patch_path(), Some(&PathBuf::from("change.patch")));
    }

    #[test]
    fn parse_long_options() {
        let cli = Cli::try_parse_from([
            "diffmeta",
            "--strip",
            "2",
            "--config",
            "diffmeta.yaml",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.strip, Some(2));
        assert_eq!(cli.config, Some(PathBuf::from("diffmeta.yaml")));
        assert!(cli.verbose);
    }

    #[test]
    fn dash_means_stdin() {
        let cli = Cli::try_parse_from(["diffmeta", "-"]).unwrap();
        assert!(cli.patch.is_some());
        assert!(cli.patch_path().is_none());
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["diffmeta", "-v", "-q"]).is_err());
    }

    #[test]
    fn strip_must_be_a_number() {
        assert!(Cli::try_parse_from(["diffmeta", "-p", "x"]).is_err());
    }
}
