//! The producer side of the progress bar.
//!
//! # Examples
//!
//! ```rust
//! use copybar::{Caption, CopyBarBuilder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), copybar::Error> {
//! let bar = CopyBarBuilder::hidden().build();
//!
//! let workers: Vec<_> = (0..4)
//!     .map(|i| {
//!         let bar = bar.clone();
//!         tokio::spawn(async move {
//!             bar.extend(100).await;
//!             bar.set_caption(Caption::new(format!("/data/file-{i}"), '/')).await;
//!             bar.progress(100).await;
//!         })
//!     })
//!     .collect();
//! for worker in workers {
//!     worker.await.unwrap();
//! }
//!
//! let summary = bar.finish().await?;
//! assert_eq!(summary.position(), 400);
//! # Ok(())
//! # }
//! ```

use super::actor::ProgressActor;
use super::command::Command;
use super::config::BarConfig;
use super::summary::BarSummary;
use crate::caption::Caption;
use crate::error::{Error, Result};
use crate::progress::Renderer;
use crate::reader::ProgressReader;

use std::io::Write;
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::PollSender;
use tracing::warn;

/// Handle used by copy workers to report progress.
///
/// Cloning is cheap; every clone feeds the same actor. Commands go through a
/// bounded channel, so reporting waits while the actor is behind: producers
/// never run more than [`BarConfig::channel_capacity`] commands ahead of the
/// display.
#[derive(Debug, Clone)]
pub struct CopyBar {
    sender: mpsc::Sender<Command>,
}

impl CopyBar {
    /// Spawn the actor on the current tokio runtime and return its handle.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a tokio runtime.
    pub(crate) fn spawn(
        renderer: Box<dyn Renderer>,
        console: Box<dyn Write + Send>,
        config: &BarConfig,
    ) -> Self {
        let (sender, receiver) = mpsc::channel(config.channel_capacity.max(1));
        let actor = ProgressActor::new(receiver, renderer, console, config.refresh_interval());
        tokio::spawn(actor.run());
        Self { sender }
    }

    /// Add `total` bytes to the amount expected by the bar.
    pub async fn extend(&self, total: u64) {
        self.send(Command::Extend(total)).await;
    }

    /// Report `delta` transferred bytes.
    ///
    /// The first report received once the total is known starts the bar.
    pub async fn progress(&self, delta: u64) {
        self.send(Command::Progress(delta)).await;
    }

    /// Report that writing `size` already counted bytes failed.
    ///
    /// The bar moves back by `size`, unless less than that was transferred.
    pub async fn error_on_write(&self, size: u64) {
        self.send(Command::ErrorOnWrite(size)).await;
    }

    /// Report that reading was abandoned with `size` bytes left.
    ///
    /// The bar moves forward by `size` so the total stays reachable.
    pub async fn error_on_read(&self, size: u64) {
        self.send(Command::ErrorOnRead(size)).await;
    }

    /// Show `caption` above the bar, trimmed to the terminal width.
    pub async fn set_caption(&self, caption: impl Into<Caption>) {
        self.send(Command::SetCaption(caption.into())).await;
    }

    /// Wrap `reader` so that every read is reported to this bar.
    pub fn proxy_reader<R>(&self, reader: R) -> ProgressReader<R> {
        ProgressReader::new(reader, self.clone())
    }

    /// Stop the actor and wait until it has drawn the final state.
    ///
    /// Call it once, after every producer is done. Returns [`Error::Closed`]
    /// if the bar was already finished.
    pub async fn finish(self) -> Result<BarSummary> {
        let (done_tx, done_rx) = oneshot::channel();
        self.sender
            .send(Command::Finish(done_tx))
            .await
            .map_err(|_| Error::Closed)?;
        done_rx.await.map_err(|_| Error::Closed)
    }

    /// Blocking variant of [`CopyBar::finish`] for synchronous callers.
    ///
    /// # Panics
    ///
    /// Panics when called from within an asynchronous execution context.
    pub fn blocking_finish(self) -> Result<BarSummary> {
        let (done_tx, done_rx) = oneshot::channel();
        self.sender
            .blocking_send(Command::Finish(done_tx))
            .map_err(|_| Error::Closed)?;
        done_rx.blocking_recv().map_err(|_| Error::Closed)
    }

    /// Return `true` once the actor has stopped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Report progress from a synchronous caller, waiting for a free slot.
    ///
    /// # Panics
    ///
    /// Panics when called from within an asynchronous execution context.
    pub(crate) fn blocking_progress(&self, delta: u64) {
        if let Err(e) = self.sender.blocking_send(Command::Progress(delta)) {
            warn!(command = ?e.0, "Progress bar is closed, dropping command");
        }
    }

    /// Sender usable from `poll` functions.
    pub(crate) fn poll_sender(&self) -> PollSender<Command> {
        PollSender::new(self.sender.clone())
    }

    async fn send(&self, command: Command) {
        if let Err(e) = self.sender.send(command).await {
            warn!(command = ?e.0, "Progress bar is closed, dropping command");
        }
    }
}
