//! Commands understood by the progress actor.

use super::summary::BarSummary;
use crate::caption::Caption;

use tokio::sync::oneshot;

/// One state change requested from the progress actor.
///
/// Commands are built by [`CopyBar`](crate::CopyBar) and moved into the actor
/// channel; the actor handles them strictly in arrival order.
#[derive(Debug)]
pub enum Command {
    /// Add bytes to the expected total.
    Extend(u64),
    /// Bytes were transferred.
    Progress(u64),
    /// Stop the actor. The final summary is sent back once rendering is over.
    Finish(oneshot::Sender<BarSummary>),
    /// An upload of this many already counted bytes failed.
    ErrorOnWrite(u64),
    /// A download was abandoned with this many bytes left unread.
    ErrorOnRead(u64),
    /// Replace the caption shown above the bar.
    SetCaption(Caption),
}
