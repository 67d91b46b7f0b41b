//! Bar module containing the progress actor and the handle producers use.
//!
//! # Overview
//!
//! - `handle` - [`CopyBar`], the cloneable handle given to copy workers
//! - `builder` - [`CopyBarBuilder`] to configure and spawn the actor
//! - `config` - Configuration structure and defaults
//! - `command` - The commands sent from handles to the actor
//! - `summary` - Final numbers returned by [`CopyBar::finish`]
//!
//! The actor itself is private: it owns the progress state and the console
//! and is only reachable through the handle.
//!
//! # Examples
//!
//! ```rust
//! use copybar::{Caption, CopyBarBuilder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), copybar::Error> {
//! let bar = CopyBarBuilder::hidden().build();
//! bar.extend(4096).await;
//! bar.set_caption(Caption::new("/backup/photos/2024/img_0001.jpg", '/')).await;
//! bar.progress(4096).await;
//! bar.finish().await?;
//! # Ok(())
//! # }
//! ```

pub(crate) mod actor;
pub mod builder;
pub mod command;
pub mod config;
pub mod handle;
pub mod summary;

pub use builder::CopyBarBuilder;
pub use command::Command;
pub use config::BarConfig;
pub use handle::CopyBar;
pub use summary::BarSummary;
