//! `tracing` output routed to the browser devtools console.

use std::io;

use tracing::{Level, Metadata, debug};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Module filter applied when the page loads.
const LOG_FILTER: &str = "screen_recorder_web=debug,screen_recorder_core=debug";

/// Installs the global subscriber. A second call keeps the first one.
pub(crate) fn init() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(LOG_FILTER)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .try_init();

    if let Err(e) = installed {
        debug!(error = %e, "Tracing subscriber already installed");
    }
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop with the console
/// method matching its level.
struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let message = JsValue::from_str(line.trim_end());

        if self.level == Level::ERROR {
            console::error_1(&message);
        } else if self.level == Level::WARN {
            console::warn_1(&message);
        } else if self.level == Level::INFO {
            console::info_1(&message);
        } else {
            console::debug_1(&message);
        }
    }
}
