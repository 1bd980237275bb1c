//! Tracing setup for the binary: every event goes to a daily log file and,
//! line by line, to the terminal panel.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "ide-shell.log";
const DEFAULT_FILTER: &str = "ide_shell=info";

/// Keeps the file writer flushing; dropping it loses buffered lines.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
    panel_rx: Option<Receiver<String>>,
}

impl LoggingGuard {
    /// Receiving end for the terminal panel. Only the first call gets it.
    pub fn take_log_rx(&mut self) -> Option<Receiver<String>> {
        self.panel_rx.take()
    }
}

/// Collects one formatted event and sends its lines when dropped, so the
/// panel never sees half an event.
struct PanelWriter {
    pending: Vec<u8>,
    tx: Sender<String>,
}

impl Write for PanelWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for PanelWriter {
    fn drop(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        for line in String::from_utf8_lossy(&self.pending).lines() {
            // The panel may already be gone during shutdown.
            let _ = self.tx.send(line.to_owned());
        }
    }
}

#[derive(Clone)]
struct TeeMakeWriter {
    file: NonBlocking,
    panel_tx: Sender<String>,
}

struct TeeWriter {
    file: NonBlocking,
    panel: PanelWriter,
}

impl<'a> MakeWriter<'a> for TeeMakeWriter {
    type Writer = TeeWriter;

    fn make_writer(&'a self) -> Self::Writer {
        TeeWriter {
            file: self.file.make_writer(),
            panel: PanelWriter {
                pending: Vec::with_capacity(256),
                tx: self.panel_tx.clone(),
            },
        }
    }
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.file.write(buf)?;
        let _ = self.panel.write_all(&buf[..written]);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        self.panel.flush()
    }
}

fn resolve_log_dir() -> io::Result<PathBuf> {
    ide_shell::services::ensure_log_dir().or_else(|_| -> io::Result<PathBuf> {
        let dir = std::env::temp_dir().join("ide-shell").join("logs");
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    })
}

/// Installs the global subscriber. `None` when no log dir is writable or a
/// subscriber is already set; the shell then runs without logs.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = resolve_log_dir().ok()?;

    let (file, file_guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&log_dir, LOG_FILE));
    let (panel_tx, panel_rx) = mpsc::channel::<String>();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(TeeMakeWriter { file, panel_tx })
        .with_ansi(false)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .ok()?;

    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "logging started");

    Some(LoggingGuard {
        _file_guard: file_guard,
        panel_rx: Some(panel_rx),
    })
}
