//! Configuration structures and defaults for the copy bar.
//!
//! # Examples
//!
//! ```rust
//! use copybar::bar::BarConfig;
//! use copybar::progress::BarStyle;
//!
//! let config = BarConfig {
//!     style: BarStyle::hidden(),
//!     ..BarConfig::default()
//! };
//! assert_eq!(config.refresh_rate, BarConfig::DEFAULT_REFRESH_RATE);
//! assert_eq!(config.channel_capacity, BarConfig::DEFAULT_CHANNEL_CAPACITY);
//! ```

use crate::progress::BarStyle;

use std::time::Duration;

/// Configuration structure for the copy bar.
#[derive(Debug, Clone)]
pub struct BarConfig {
    /// Progress bar style options.
    pub style: BarStyle,
    /// Maximum number of redraws per second.
    ///
    /// The bar is also redrawn at this rate while no progress is reported.
    pub refresh_rate: u8,
    /// Number of commands that may wait for the actor before producers block.
    pub channel_capacity: usize,
}

impl BarConfig {
    /// Redraw at most every 10 milliseconds.
    pub const DEFAULT_REFRESH_RATE: u8 = 100;
    /// A single slot: producers run at most one command ahead of the display.
    pub const DEFAULT_CHANNEL_CAPACITY: usize = 1;

    /// Time between two redraws of an idle bar.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(1) / u32::from(self.refresh_rate.max(1))
    }
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            style: BarStyle::default(),
            refresh_rate: Self::DEFAULT_REFRESH_RATE,
            channel_capacity: Self::DEFAULT_CHANNEL_CAPACITY,
        }
    }
}
