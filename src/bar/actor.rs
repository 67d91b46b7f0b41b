//! The progress actor: sole owner of the progress state and of the terminal.
//!
//! Producers never touch the state. They send [`Command`]s, and the actor
//! applies them one at a time on its own task, so no lock guards the state
//! however many transfers run in parallel.

use super::command::Command;
use super::summary::BarSummary;
use crate::caption::trim_caption;
use crate::progress::Renderer;

use std::io::Write;
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, trace, warn};

/// Moves the cursor one line up.
const CURSOR_UP: &str = "\x1b[1A";

/// Mutable progress state, local to the actor task.
#[derive(Debug, Default)]
struct ProgressState {
    /// Sum of all extensions.
    total: u64,
    /// Displayed position.
    current: u64,
    /// Raw sum of progress deltas.
    bytes_read: u64,
    started: bool,
    /// The next paint must repaint from a fresh line.
    redraw: bool,
    caption: String,
}

impl ProgressState {
    fn summary(&self) -> BarSummary {
        BarSummary::new(self.total, self.current, self.bytes_read, self.started)
    }
}

pub(crate) struct ProgressActor {
    receiver: mpsc::Receiver<Command>,
    renderer: Box<dyn Renderer>,
    console: Box<dyn Write + Send>,
    refresh_interval: Duration,
    state: ProgressState,
}

impl ProgressActor {
    pub(crate) fn new(
        receiver: mpsc::Receiver<Command>,
        renderer: Box<dyn Renderer>,
        console: Box<dyn Write + Send>,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            receiver,
            renderer,
            console,
            refresh_interval,
            state: ProgressState::default(),
        }
    }

    /// Process commands until `Finish` arrives or every handle is dropped.
    ///
    /// Between commands, a started bar is redrawn every refresh interval.
    pub(crate) async fn run(mut self) {
        debug!("Progress actor started");
        let mut refresh = time::interval(self.refresh_interval);
        refresh.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;

                command = self.receiver.recv() => match command {
                    Some(command) => {
                        if self.handle(command).is_break() {
                            debug!("Progress actor finished");
                            return;
                        }
                    }
                    None => break,
                },
                _ = refresh.tick(), if self.state.started => {
                    self.renderer.tick();
                    self.paint_frames();
                }
            }
        }

        debug!("All progress handles dropped, stopping the actor");
        self.finish();
    }

    fn handle(&mut self, command: Command) -> ControlFlow<()> {
        trace!(?command, "Processing command");
        match command {
            Command::Extend(total) => self.extend(total),
            Command::Progress(delta) => self.progress(delta),
            Command::ErrorOnWrite(size) => self.error_on_write(size),
            Command::ErrorOnRead(size) => self.error_on_read(size),
            Command::SetCaption(caption) => {
                self.state.caption = trim_caption(&caption, self.renderer.width());
            }
            Command::Finish(done) => {
                self.finish();
                // The caller may have stopped waiting, nothing left to do then.
                let _ = done.send(self.state.summary());
                return ControlFlow::Break(());
            }
        }
        self.paint_frames();
        ControlFlow::Continue(())
    }

    fn extend(&mut self, total: u64) {
        self.state.total = self.state.total.saturating_add(total);
        self.renderer.set_total(self.state.total);
    }

    fn progress(&mut self, delta: u64) {
        if self.state.total > 0 && !self.state.started {
            debug!(total = self.state.total, "Starting progress bar");
            self.state.started = true;
            self.state.redraw = true;
            self.renderer.start();
        }
        if delta > 0 {
            self.state.current = self.state.current.saturating_add(delta);
            self.state.bytes_read = self.state.bytes_read.saturating_add(delta);
            self.renderer.add(delta);
        }
    }

    /// Roll back bytes that were counted before their upload failed.
    fn error_on_write(&mut self, size: u64) {
        self.state.redraw = true;
        if self.state.current > size {
            self.state.current -= size;
            self.renderer.set_position(self.state.current);
        }
    }

    /// Count bytes that will never be read as done.
    fn error_on_read(&mut self, size: u64) {
        self.state.redraw = true;
        if size > 0 {
            self.state.current = self.state.current.saturating_add(size);
            self.renderer.add(size);
        }
    }

    fn finish(&mut self) {
        if self.state.started {
            self.renderer.finish();
            self.paint_frames();
        }
        if let Err(e) = self.console.flush() {
            warn!("Failed to flush the console: {}", e);
        }
    }

    fn paint_frames(&mut self) {
        let frames = self.renderer.take_frames();
        // Nothing reaches the terminal before the bar starts.
        if !self.state.started {
            return;
        }
        for frame in frames {
            self.paint(&frame);
        }
    }

    /// Redraw callback: repaint the caption line and the bar below it.
    fn paint(&mut self, frame: &str) {
        let mut out = String::new();
        if self.state.redraw {
            out.push('\n');
        }
        // Clear the caption line.
        out.push('\r');
        out.push_str(CURSOR_UP);
        out.push_str(&" ".repeat(console::measure_text_width(frame)));
        out.push('\r');
        // Print the caption and the progress bar.
        out.push_str(&self.state.caption);
        out.push('\n');
        out.push_str(frame);

        if let Err(e) = self
            .console
            .write_all(out.as_bytes())
            .and_then(|_| self.console.flush())
        {
            warn!("Failed to write the progress bar: {}", e);
        }
        self.state.redraw = false;
    }
}
