//! Builder pattern implementation for creating [`CopyBar`] instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use copybar::CopyBarBuilder;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let bar = CopyBarBuilder::new()
//!     .refresh_rate(20)
//!     .channel_capacity(8)
//!     .build();
//! # bar.finish().await.unwrap();
//! # }
//! ```
//!
//! ## Hidden Progress Bar
//!
//! ```rust
//! use copybar::CopyBarBuilder;
//!
//! # #[tokio::main]
//! # async fn main() {
//! // Keeps the accounting, never draws.
//! let bar = CopyBarBuilder::hidden().build();
//! # bar.finish().await.unwrap();
//! # }
//! ```

use super::config::BarConfig;
use super::handle::CopyBar;
use crate::error::Result;
use crate::progress::{BarStyle, IndicatifRenderer, Renderer};

use indicatif::ProgressStyle;
use std::fmt;
use std::io::{self, Write};
use tracing::warn;

/// A builder used to create a [`CopyBar`].
///
/// The actor is spawned by [`CopyBarBuilder::build`], which therefore needs
/// to run inside a tokio runtime.
#[derive(Default)]
pub struct CopyBarBuilder {
    config: BarConfig,
    console: Option<Box<dyn Write + Send>>,
    renderer: Option<Box<dyn Renderer>>,
}

impl fmt::Debug for CopyBarBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyBarBuilder")
            .field("config", &self.config)
            .field("console", &self.console.is_some())
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

impl CopyBarBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        CopyBarBuilder::default()
    }

    /// Convenience function to hide the progress bar.
    pub fn hidden() -> Self {
        CopyBarBuilder::default().style(BarStyle::hidden())
    }

    /// Set the progress bar style options.
    pub fn style(mut self, style: BarStyle) -> Self {
        self.config.style = style;
        self
    }

    /// Set the maximum number of redraws per second.
    pub fn refresh_rate(mut self, refresh_rate: u8) -> Self {
        self.config.refresh_rate = refresh_rate;
        self
    }

    /// Set how many commands may be queued before producers wait.
    ///
    /// A capacity of zero is raised to one.
    pub fn channel_capacity(mut self, channel_capacity: usize) -> Self {
        self.config.channel_capacity = channel_capacity;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: BarConfig) -> Self {
        self.config = config;
        self
    }

    /// Write the bar to `console` instead of stderr.
    pub fn console(mut self, console: Box<dyn Write + Send>) -> Self {
        self.console = Some(console);
        self
    }

    /// Use a custom renderer. The style options are ignored then.
    pub fn renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Create the [`CopyBar`], falling back to the default bar style when the
    /// configured template is invalid.
    pub fn build(self) -> CopyBar {
        let renderer = match self.renderer {
            Some(renderer) => renderer,
            None => {
                let style = self.config.style.to_progress_style().unwrap_or_else(|e| {
                    warn!("{}, using the default bar style", e);
                    ProgressStyle::default_bar()
                });
                Box::new(IndicatifRenderer::with_progress_style(
                    style,
                    self.config.style.is_enabled(),
                    self.config.refresh_rate,
                ))
            }
        };
        CopyBar::spawn(renderer, console_or_stderr(self.console), &self.config)
    }

    /// Create the [`CopyBar`], failing on an invalid template.
    pub fn try_build(self) -> Result<CopyBar> {
        let renderer = match self.renderer {
            Some(renderer) => renderer,
            None => Box::new(IndicatifRenderer::new(
                &self.config.style,
                self.config.refresh_rate,
            )?),
        };
        Ok(CopyBar::spawn(
            renderer,
            console_or_stderr(self.console),
            &self.config,
        ))
    }
}

fn console_or_stderr(console: Option<Box<dyn Write + Send>>) -> Box<dyn Write + Send> {
    console.unwrap_or_else(|| Box::new(io::stderr()))
}
