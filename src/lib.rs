//! copybar turns the progress of many concurrent transfers into a single
//! terminal progress bar.
//!
//! Copy workers hold a cheap [`CopyBar`] handle and report what they do:
//! bytes to expect, bytes transferred, failed transfers and the file being
//! processed. A single actor task owns the progress state and is the only
//! writer to the terminal, so reports from any number of workers never
//! garble the output.
//!
//! # Quick Start
//!
//! ```rust
//! use copybar::{Caption, CopyBarBuilder, Error};
//! use tokio::io::AsyncReadExt;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let bar = CopyBarBuilder::new().build();
//!
//! let source = vec![0u8; 64 * 1024];
//! bar.extend(source.len() as u64).await;
//! bar.set_caption(Caption::new("/srv/data/archive.tar", '/')).await;
//!
//! let mut reader = bar.proxy_reader(&source[..]);
//! let mut sink = Vec::new();
//! reader.read_to_end(&mut sink).await?;
//!
//! let summary = bar.finish().await?;
//! assert_eq!(summary.position(), summary.total());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`bar`] - The [`CopyBar`] handle, its builder, configuration and the progress actor
//! - [`caption`] - Captions and the trimming that fits them on screen
//! - [`reader`] - The [`ProgressReader`] adapter
//! - [`progress`] - Bar styling and the [`Renderer`] seam
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod bar;
pub mod caption;
pub mod error;
pub mod progress;
pub mod reader;

pub use bar::{BarConfig, BarSummary, Command, CopyBar, CopyBarBuilder};
pub use caption::{trim_caption, Caption};
pub use error::{Error, Result};
pub use progress::{BarStyle, IndicatifRenderer, Renderer};
pub use reader::ProgressReader;
