//! Tracing subscriber setup for the diffmeta binary.
//!
//! Logs go to stderr so stdout stays machine-readable. The filter is chosen
//! in priority order:
//!
//! 1. `DIFFMETA_LOG` (directives such as `diffmeta.header=trace`)
//! 2. `RUST_LOG`
//! 3. `-v` (debug for header parsing) or `-q` (errors only)
//! 4. `warn`

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding diffmeta-specific filter directives.
pub const LOG_ENV: &str = "DIFFMETA_LOG";

/// Target prefix of the library's events.
const TARGET_PREFIX: &str = "diffmeta";

/// Verbosity level derived from CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    pub fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Install the global subscriber. Call once, before loading config.
pub fn init(verbosity: Verbosity) {
    let use_ansi = std::io::IsTerminal::is_terminal(&std::io::stderr());

    tracing_subscriber::registry()
        .with(build_env_filter(verbosity, std::env::var(LOG_ENV).ok()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_ansi)
                .with_target(true)
                .without_time()
                .compact(),
        )
        .init();
}

/// Unparseable directives fall through to the next source.
fn build_env_filter(verbosity: Verbosity, directives: Option<String>) -> EnvFilter {
    if let Some(directives) = directives
        && let Ok(filter) = EnvFilter::try_new(&directives)
    {
        return filter;
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::try_new(default_directive(verbosity))
        .unwrap_or_else(|_| EnvFilter::new(verbosity.default_level().as_str()))
}

fn default_directive(verbosity: Verbosity) -> String {
    let level = verbosity.default_level();
    if verbosity == Verbosity::Verbose {
        format!("{level},{TARGET_PREFIX}=debug")
    } else {
        level.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Verbose);
    }

    #[test]
    fn default_levels() {
        assert_eq!(Verbosity::Quiet.default_level(), Level::ERROR);
        assert_eq!(Verbosity::Normal.default_level(), Level::WARN);
        assert_eq!(Verbosity::Verbose.default_level(), Level::DEBUG);
    }

    #[test]
    fn verbose_directive_enables_library_debug() {
        assert_eq!(default_directive(Verbosity::Verbose), "DEBUG,diffmeta=debug");
        assert_eq!(default_directive(Verbosity::Quiet), "ERROR");
    }
}
