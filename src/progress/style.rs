//! Progress bar styling options.
//!
//! The copy bar is a single byte-oriented line. By default it looks like
//! wget: transferred bytes, a `[==>   ]` bar and the transfer rate.
//!
//! # Examples
//!
//! ## Default Styling
//!
//! ```rust
//! use copybar::progress::BarStyle;
//!
//! let style = BarStyle::default();
//! assert!(style.is_enabled());
//! ```
//!
//! ## Custom Styling
//!
//! ```rust
//! use copybar::progress::BarStyle;
//!
//! let style = BarStyle::new(
//!     Some(BarStyle::TEMPLATE_PIP.to_string()),
//!     Some(BarStyle::CHARS_LINE.to_string()),
//!     true,
//! );
//! ```
//!
//! ## Hidden Progress Bar
//!
//! ```rust
//! use copybar::progress::BarStyle;
//!
//! let style = BarStyle::hidden();
//! assert!(!style.is_enabled());
//! ```

use crate::error::Result;
use indicatif::ProgressStyle;

/// Define the options for the copy progress bar.
#[derive(Debug, Clone)]
pub struct BarStyle {
    /// Progress bar template string.
    template: Option<String>,
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do".
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            template: Some(BarStyle::TEMPLATE_WGET.into()),
            progress_chars: Some(BarStyle::CHARS_WGET.into()),
            enabled: true,
        }
    }
}

impl BarStyle {
    /// Template which looks like wget.
    ///
    /// `12.50 MiB / 40.00 MiB [==========>                             ] 3.20 MiB/s`
    pub const TEMPLATE_WGET: &'static str =
        "{bytes} / {total_bytes} [{bar:40}] {bytes_per_sec}";
    /// Template which looks like the Python package installer pip.
    ///
    /// `━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━ 211.23 KiB/211.23 KiB 1008.31 KiB/s eta 0s`
    pub const TEMPLATE_PIP: &'static str =
        "{bar:40} {bytes:>11}/{total_bytes:<11} {bytes_per_sec:>13} eta {eta}";
    /// Use wget arrows as progress characters: `"=> "`.
    pub const CHARS_WGET: &'static str = "=> ";
    /// Use a line as progress characters: `"━╾╴─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";
    /// Use rough blocks as progress characters: `"█  "`.
    pub const CHARS_ROUGH: &'static str = "█  ";

    /// Create a new [`BarStyle`].
    pub fn new(template: Option<String>, progress_chars: Option<String>, enabled: bool) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
        }
    }

    /// Create a new [`BarStyle`] which hides the progress bar.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..BarStyle::default()
        }
    }

    /// Return `false` if the bar should never be drawn.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    pub fn to_progress_style(&self) -> Result<ProgressStyle> {
        let mut style = ProgressStyle::default_bar();
        if let Some(ref template) = self.template {
            style = ProgressStyle::with_template(template)?;
        }
        if let Some(ref progress_chars) = self.progress_chars {
            style = style.progress_chars(progress_chars);
        }
        Ok(style)
    }
}
