//! Progress module containing the rendering side of the copy bar.
//!
//! # Overview
//!
//! The progress module is organized into two main components:
//!
//! - `style` - Progress bar styling options and templates
//! - `display` - The [`Renderer`] seam and its indicatif implementation
//!
//! # Examples
//!
//! ## Custom Progress Bar Styling
//!
//! ```rust
//! use copybar::progress::BarStyle;
//! use copybar::CopyBarBuilder;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), copybar::Error> {
//! let bar = CopyBarBuilder::new()
//!     .style(BarStyle::new(
//!         Some("{bytes}/{total_bytes} {wide_bar} {bytes_per_sec}".to_string()),
//!         Some(BarStyle::CHARS_ROUGH.to_string()),
//!         true,
//!     ))
//!     .try_build()?;
//! bar.finish().await?;
//! # Ok(())
//! # }
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::{IndicatifRenderer, Renderer};
pub use style::BarStyle;
