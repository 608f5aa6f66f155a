//! Error types for registry lookups.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Lookup failures.
///
/// Classification always checks membership before looking an entry up, so
/// reaching one of these from `parse` or `run` indicates a broken registry
/// contract rather than bad user input. Unrecognized input tokens never
/// surface here; they go through the configured [`OnUnrecognized`] policy.
///
/// [`OnUnrecognized`]: crate::OnUnrecognized
#[derive(Debug, Error)]
pub enum Error {
    #[error("no registered command matches `{0}`")]
    CommandNotFound(String),

    #[error("no registered option matches `{0}`")]
    OptionNotFound(String),
}
