//! Error handling for the copybar library.
//!
//! Progress reporting never fails a copy: transfer failures reach the bar as
//! corrective commands, not as errors. The variants below only describe
//! misuse of the bar itself (shutting it down twice, a broken style template).
//! I/O errors convert into [`Error`] so that callers reading through a
//! [`ProgressReader`](crate::ProgressReader) can use `?` on both.

use std::io;
use thiserror::Error;

/// Errors that can happen when using copybar.
#[derive(Error, Debug)]
pub enum Error {
    /// The progress actor has already shut down.
    ///
    /// Returned by [`CopyBar::finish`](crate::CopyBar::finish) when another
    /// handle already finished the bar, or the actor stopped because every
    /// handle was dropped.
    #[error("progress bar is already closed")]
    Closed,

    /// Invalid progress bar template.
    ///
    /// Wraps the error indicatif reports when parsing the template string of
    /// a [`BarStyle`](crate::BarStyle).
    #[error("Invalid template: {source}")]
    Template {
        #[from]
        source: indicatif::style::TemplateError,
    },

    /// I/O Error.
    ///
    /// Never produced by the bar: console failures are only logged. The
    /// variant lets callers propagate the errors of their own reads and
    /// writes, such as those of a [`ProgressReader`](crate::ProgressReader),
    /// next to copybar errors.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a copybar error.
pub type Result<T> = std::result::Result<T, Error>;
