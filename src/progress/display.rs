//! Terminal rendering of the copy progress bar.
//!
//! The actor does not talk to indicatif directly. It drives a [`Renderer`],
//! which formats the bar and hands every line it draws back as a frame. The
//! actor then paints frames itself, with the caption on top, so that a single
//! routine owns the terminal.
//!
//! # Examples
//!
//! ```rust
//! use copybar::progress::{BarStyle, IndicatifRenderer, Renderer};
//!
//! let mut renderer = IndicatifRenderer::new(&BarStyle::hidden(), 20).unwrap();
//! renderer.set_total(1024);
//! renderer.start();
//! renderer.add(512);
//! assert_eq!(renderer.position(), 512);
//! // A hidden bar never draws.
//! assert!(renderer.take_frames().is_empty());
//! ```

use crate::error::Result;
use crate::progress::BarStyle;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle, TermLike};
use std::fmt;
use std::io;
use std::sync::{Arc, Mutex, PoisonError};

/// Byte-oriented bar renderer driven by the progress actor.
///
/// Every method is called from the actor task only. Lines drawn while
/// handling a call are collected and returned by [`Renderer::take_frames`]
/// right after it, which is where the actor's redraw callback runs.
pub trait Renderer: Send {
    /// Set the total number of bytes.
    fn set_total(&mut self, total: u64);
    /// Advance the bar by `delta` bytes.
    fn add(&mut self, delta: u64);
    /// Move the bar to an absolute byte position.
    fn set_position(&mut self, position: u64);
    /// Start drawing.
    fn start(&mut self);
    /// Draw the final state and stop.
    fn finish(&mut self);
    /// Redraw without a state change, so rates and elapsed time stay current.
    fn tick(&mut self);
    /// Current display width in columns.
    fn width(&self) -> usize;
    /// Drain the lines drawn since the last call.
    fn take_frames(&mut self) -> Vec<String>;
}

/// [`Renderer`] backed by an indicatif [`ProgressBar`].
///
/// The bar stays hidden until [`Renderer::start`]. From then on it draws into
/// a capturing terminal at most `refresh_rate` times per second.
pub struct IndicatifRenderer {
    bar: ProgressBar,
    buffer: Arc<Mutex<FrameBuffer>>,
    refresh_rate: u8,
    enabled: bool,
}

impl fmt::Debug for IndicatifRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndicatifRenderer")
            .field("position", &self.bar.position())
            .field("length", &self.bar.length())
            .field("refresh_rate", &self.refresh_rate)
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl IndicatifRenderer {
    /// Create a renderer from the style options.
    pub fn new(style: &BarStyle, refresh_rate: u8) -> Result<Self> {
        Ok(Self::with_progress_style(
            style.to_progress_style()?,
            style.is_enabled(),
            refresh_rate,
        ))
    }

    /// Create a renderer from an already built indicatif style.
    pub fn with_progress_style(style: ProgressStyle, enabled: bool, refresh_rate: u8) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::hidden())
            .with_style(style);
        Self {
            bar,
            buffer: Arc::new(Mutex::new(FrameBuffer::default())),
            refresh_rate: refresh_rate.max(1),
            enabled,
        }
    }

    /// Current byte position of the bar.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total byte count of the bar.
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }
}

impl Renderer for IndicatifRenderer {
    fn set_total(&mut self, total: u64) {
        self.bar.set_length(total);
    }

    fn add(&mut self, delta: u64) {
        self.bar.inc(delta);
    }

    fn set_position(&mut self, position: u64) {
        self.bar.set_position(position);
    }

    fn start(&mut self) {
        if !self.enabled {
            return;
        }
        let term = FrameTerm::new(self.buffer.clone());
        self.bar.set_draw_target(ProgressDrawTarget::term_like_with_hz(
            Box::new(term),
            self.refresh_rate,
        ));
        self.bar.reset_elapsed();
        self.bar.reset_eta();
        self.bar.tick();
    }

    fn finish(&mut self) {
        self.bar.finish();
    }

    fn tick(&mut self) {
        self.bar.tick();
    }

    fn width(&self) -> usize {
        terminal_width()
    }

    fn take_frames(&mut self) -> Vec<String> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

/// Width of the terminal behind stderr, in columns.
fn terminal_width() -> usize {
    usize::from(console::Term::stderr().size().1)
}

/// Text drawn by indicatif, split into frames.
#[derive(Debug, Default)]
struct FrameBuffer {
    pending: String,
    frames: Vec<String>,
}

impl FrameBuffer {
    fn commit(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        // indicatif pads the last line with spaces up to the terminal width.
        let frame = pending.trim_end();
        if !frame.is_empty() {
            self.frames.push(frame.to_string());
        }
    }

    fn take(&mut self) -> Vec<String> {
        self.commit();
        std::mem::take(&mut self.frames)
    }
}

/// Terminal stand-in that records what indicatif draws instead of printing it.
///
/// Cursor movements are dropped: the actor does its own positioning. Text is
/// buffered until indicatif flushes or clears a line, then stored as a frame.
#[derive(Debug)]
struct FrameTerm {
    buffer: Arc<Mutex<FrameBuffer>>,
}

impl FrameTerm {
    fn new(buffer: Arc<Mutex<FrameBuffer>>) -> Self {
        Self { buffer }
    }

    fn with_buffer<T>(&self, f: impl FnOnce(&mut FrameBuffer) -> T) -> T {
        f(&mut self.buffer.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn push(&self, s: &str) {
        self.with_buffer(|buffer| buffer.pending.push_str(s));
    }

    fn commit(&self) {
        self.with_buffer(FrameBuffer::commit);
    }
}

impl TermLike for FrameTerm {
    fn width(&self) -> u16 {
        u16::try_from(terminal_width()).unwrap_or(u16::MAX)
    }

    fn height(&self) -> u16 {
        console::Term::stderr().size().0
    }

    fn move_cursor_up(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn move_cursor_down(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn move_cursor_right(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn move_cursor_left(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn write_line(&self, s: &str) -> io::Result<()> {
        self.push(s);
        self.commit();
        Ok(())
    }

    fn write_str(&self, s: &str) -> io::Result<()> {
        self.push(s);
        Ok(())
    }

    fn clear_line(&self) -> io::Result<()> {
        self.commit();
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        self.commit();
        Ok(())
    }
}
