//! Final numbers reported when the progress bar shuts down.
//!
//! # Examples
//!
//! ```rust
//! use copybar::CopyBarBuilder;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), copybar::Error> {
//! let bar = CopyBarBuilder::hidden().build();
//! bar.extend(2048).await;
//! bar.progress(2048).await;
//!
//! let summary = bar.finish().await?;
//! assert_eq!(summary.total(), 2048);
//! assert_eq!(summary.position(), 2048);
//! assert!(summary.started());
//! # Ok(())
//! # }
//! ```

/// Snapshot of the progress state taken when the actor finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BarSummary {
    /// Sum of every extension.
    total: u64,
    /// Displayed position, including corrections.
    position: u64,
    /// Bytes reported through progress commands only.
    bytes_read: u64,
    /// Whether the bar was ever drawn.
    started: bool,
}

impl BarSummary {
    /// Create a new [`BarSummary`].
    pub fn new(total: u64, position: u64, bytes_read: u64, started: bool) -> Self {
        Self {
            total,
            position,
            bytes_read,
            started,
        }
    }

    /// Get the total number of bytes announced.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Get the final displayed position.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Get the number of bytes reported as transferred.
    ///
    /// Unlike [`BarSummary::position`], this ignores error corrections.
    #[must_use]
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Get whether the bar was started.
    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }

    /// Return `true` if the displayed position reached the total.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.started && self.position >= self.total
    }
}
