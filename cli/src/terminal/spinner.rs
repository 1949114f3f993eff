use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// The spinner of the run in progress, if any.
static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

fn new_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS);

    pb.set_style(style);
    pb.enable_steady_tick(TICK_INTERVAL);
    pb
}

/// Shows a spinner until [`stop`] is called. Starting twice keeps the first one.
pub fn start(message: &str) {
    let Ok(mut active) = ACTIVE.lock() else {
        return;
    };
    if active.is_none() {
        let pb = new_spinner();
        pb.set_message(format!("{} {}", message, "(Ctrl-C to cancel)".italic().white()));
        *active = Some(pb);
    }
}

pub fn stop() {
    if let Ok(mut active) = ACTIVE.lock() {
        if let Some(pb) = active.take() {
            pb.finish_and_clear();
        }
    }
}

/// Runs `f` with the spinner line hidden.
fn suspended(f: impl FnOnce()) {
    match ACTIVE.lock() {
        Ok(active) => match active.as_ref() {
            Some(pb) => pb.suspend(f),
            None => f(),
        },
        Err(_) => f(),
    }
}

/// Prints one line to stdout without tearing the spinner.
pub fn println(msg: &str) {
    suspended(|| {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{msg}");
    });
}

/// Log sink for `tracing`, writing to stderr around the spinner.
pub struct SpinnerWriter;

impl std::io::Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        let msg = msg.trim_end();
        suspended(|| {
            let mut err = std::io::stderr().lock();
            let _ = writeln!(err, "{msg}");
        });
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stderr().flush()
    }
}
