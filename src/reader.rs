//! Reader adapter reporting every read to a [`CopyBar`].
//!
//! The adapter does not buffer, retry or translate errors: each read is
//! delegated to the wrapped reader, the number of bytes it produced is sent
//! as progress, and its result is returned untouched. It works with blocking
//! [`std::io::Read`] sources as well as tokio [`AsyncRead`] ones.
//!
//! Reporting shares the bar's bounded channel, so a reader slows down to the
//! pace of the display. The async side reserves a channel slot before reading
//! and gives it back when the inner read is pending. The blocking side waits
//! for the slot after the read and must therefore run outside of the async
//! runtime, e.g. in [`tokio::task::spawn_blocking`].
//!
//! # Examples
//!
//! ```rust
//! use copybar::CopyBarBuilder;
//! use tokio::io::AsyncReadExt;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), copybar::Error> {
//! let bar = CopyBarBuilder::hidden().build();
//! let data = vec![7u8; 10_000];
//! bar.extend(data.len() as u64).await;
//!
//! let mut reader = bar.proxy_reader(&data[..]);
//! let mut copy = Vec::new();
//! reader.read_to_end(&mut copy).await?;
//!
//! assert_eq!(bar.finish().await?.position(), 10_000);
//! # Ok(())
//! # }
//! ```

use crate::bar::{Command, CopyBar};

use std::fmt;
use std::io::{self, Read};
use std::pin::Pin;
use std::task::{ready, Context, Poll};
use tokio::io::{AsyncRead, ReadBuf};
use tokio_util::sync::PollSender;

/// A reader that reports the size of each read to a progress bar.
pub struct ProgressReader<R> {
    inner: R,
    bar: CopyBar,
    sender: PollSender<Command>,
}

impl<R: fmt::Debug> fmt::Debug for ProgressReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressReader")
            .field("inner", &self.inner)
            .field("bar", &self.bar)
            .finish_non_exhaustive()
    }
}

impl<R> ProgressReader<R> {
    /// Wrap `inner`, reporting to `bar`.
    pub fn new(inner: R, bar: CopyBar) -> Self {
        let sender = bar.poll_sender();
        Self { inner, bar, sender }
    }

    /// Gets a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Gets a mutable reference to the underlying reader.
    ///
    /// Bytes read directly through it are not reported.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Consumes the adapter, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// # Panics
///
/// Reads panic when called from within an asynchronous execution context.
impl<R: Read> Read for ProgressReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let result = self.inner.read(buf);
        let read = result.as_ref().map_or(0, |n| *n);
        self.bar.blocking_progress(read as u64);
        result
    }
}

impl<R: AsyncRead + Unpin> AsyncRead for ProgressReader<R> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        // A closed bar only disables reporting.
        let reserved = ready!(this.sender.poll_reserve(cx)).is_ok();

        let before = buf.filled().len();
        let result = match Pin::new(&mut this.inner).poll_read(cx, buf) {
            Poll::Ready(result) => result,
            Poll::Pending => {
                this.sender.abort_send();
                return Poll::Pending;
            }
        };
        // Failed reads are reported as empty ones.
        let read = if result.is_ok() {
            buf.filled().len() - before
        } else {
            0
        };
        if reserved {
            // The slot was reserved above.
            let _ = this.sender.send_item(Command::Progress(read as u64));
        }
        Poll::Ready(result)
    }
}
