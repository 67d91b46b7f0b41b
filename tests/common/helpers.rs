use std::io::{self, Write};
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

use copybar::{CopyBar, CopyBarBuilder, Renderer};

// Common test constants
pub const TEST_WIDTH: usize = 80;
pub const CURSOR_UP: &str = "\x1b[1A";

/// Everything a [`RecordingRenderer`] was asked to do.
#[derive(Debug, Default, Clone)]
pub struct RenderLog {
    pub total: u64,
    pub position: u64,
    pub starts: usize,
    pub finished: bool,
    pub width: usize,
    pub ticks: usize,
    pending: Vec<String>,
}

/// Renderer drawing a `position/total` frame on every change, unthrottled.
///
/// Ticks are only counted, unless the renderer was built with
/// [`RecordingRenderer::ticking`].
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    log: Arc<Mutex<RenderLog>>,
    draw_on_tick: bool,
}

impl RecordingRenderer {
    pub fn new(width: usize) -> Self {
        let log = RenderLog {
            width,
            ..RenderLog::default()
        };
        Self {
            log: Arc::new(Mutex::new(log)),
            draw_on_tick: false,
        }
    }

    /// Recording renderer that also draws a frame on every tick.
    pub fn ticking(width: usize) -> Self {
        Self {
            draw_on_tick: true,
            ..Self::new(width)
        }
    }

    /// Snapshot of the log.
    pub fn log(&self) -> RenderLog {
        self.log.lock().unwrap().clone()
    }

    fn draw(log: &mut RenderLog) {
        let frame = format!("{}/{}", log.position, log.total);
        log.pending.push(frame);
    }
}

impl Renderer for RecordingRenderer {
    fn set_total(&mut self, total: u64) {
        self.log.lock().unwrap().total = total;
    }

    fn add(&mut self, delta: u64) {
        let mut log = self.log.lock().unwrap();
        log.position += delta;
        Self::draw(&mut log);
    }

    fn set_position(&mut self, position: u64) {
        let mut log = self.log.lock().unwrap();
        log.position = position;
        Self::draw(&mut log);
    }

    fn start(&mut self) {
        let mut log = self.log.lock().unwrap();
        log.starts += 1;
        Self::draw(&mut log);
    }

    fn finish(&mut self) {
        let mut log = self.log.lock().unwrap();
        log.finished = true;
        Self::draw(&mut log);
    }

    fn tick(&mut self) {
        let mut log = self.log.lock().unwrap();
        log.ticks += 1;
        if self.draw_on_tick {
            Self::draw(&mut log);
        }
    }

    fn width(&self) -> usize {
        self.log.lock().unwrap().width
    }

    fn take_frames(&mut self) -> Vec<String> {
        std::mem::take(&mut self.log.lock().unwrap().pending)
    }
}

/// In-memory console shared between the test and the actor.
#[derive(Debug, Clone, Default)]
pub struct SharedConsole {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedConsole {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl Write for SharedConsole {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Console whose writes block until [`GatedConsole::open`] is called.
#[derive(Debug, Clone, Default)]
pub struct GatedConsole {
    gate: Arc<(Mutex<GateState>, Condvar)>,
}

#[derive(Debug, Default)]
struct GateState {
    open: bool,
    blocked: bool,
    buffer: Vec<u8>,
}

impl GatedConsole {
    /// Returns `true` while a write is waiting for the gate.
    pub fn is_blocked(&self) -> bool {
        self.gate.0.lock().unwrap().blocked
    }

    /// Let every pending and future write through.
    pub fn open(&self) {
        let (state, opened) = &*self.gate;
        state.lock().unwrap().open = true;
        opened.notify_all();
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.gate.0.lock().unwrap().buffer).into_owned()
    }
}

impl Write for GatedConsole {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let (state, opened) = &*self.gate;
        let mut state = state.lock().unwrap();
        while !state.open {
            state.blocked = true;
            state = opened.wait(state).unwrap();
        }
        state.blocked = false;
        state.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Console whose writes always fail.
#[derive(Debug, Default)]
pub struct BrokenConsole;

impl Write for BrokenConsole {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed"))
    }
}

/// Spawns a bar with a recording renderer and an in-memory console.
pub fn create_recording_bar(width: usize) -> (CopyBar, RecordingRenderer, SharedConsole) {
    let renderer = RecordingRenderer::new(width);
    let console = SharedConsole::default();
    let bar = CopyBarBuilder::new()
        .renderer(Box::new(renderer.clone()))
        .console(Box::new(console.clone()))
        .build();
    (bar, renderer, console)
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Waits until `condition` holds, giving up after about a second.
pub async fn wait_for(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
