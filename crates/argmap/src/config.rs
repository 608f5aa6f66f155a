//! Parser configuration and injectable policies.

use std::fmt;

/// Policy for tokens that are neither a registered command nor option nor a
/// value for a pending entry.
pub enum OnUnrecognized {
    /// Print a diagnostic plus the help listing to stdout, then terminate
    /// the process with exit code 1.
    Exit,
    /// Hand the token to a callback and keep parsing. The map is left
    /// untouched for the offending token.
    Handler(Box<dyn Fn(&str) + Send + Sync>),
}

impl fmt::Debug for OnUnrecognized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exit => f.write_str("Exit"),
            Self::Handler(_) => f.write_str("Handler(..)"),
        }
    }
}

/// Parse-time configuration.
///
/// Partial overrides use struct update syntax:
///
/// ```
/// use argmap::Config;
///
/// let config = Config {
///     argv_convert: false,
///     ..Config::default()
/// };
/// ```
#[derive(Debug)]
pub struct Config {
    /// Canonicalize matched option names to their short alias and command
    /// names to their first alias when recording map keys.
    pub argv_convert: bool,
    /// Expand clustered short flags (`-abc` into `-a -b -c`) before
    /// classification.
    pub split_combo_opts: bool,
    /// Static help override: printed verbatim in place of the generated
    /// listing, after which the process terminates with exit code 0.
    pub help_message: Option<String>,
    /// What to do with unrecognized tokens.
    pub on_unrecognized: OnUnrecognized,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            argv_convert: true,
            split_combo_opts: true,
            help_message: None,
            on_unrecognized: OnUnrecognized::Exit,
        }
    }
}
