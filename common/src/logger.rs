use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Where log lines go. The game owns the terminal, so there is no stdout sink.
pub enum LogSink {
    File(Mutex<File>),
    Disabled,
}

impl LogSink {
    pub fn file(path: &Path) -> Result<Self, String> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(|file| LogSink::File(Mutex::new(file)))
            .map_err(|e| format!("Failed to open log file {}: {}", path.display(), e))
    }
}

pub struct Logger {
    prefix: Option<String>,
    sink: LogSink,
}

impl Logger {
    fn new(prefix: Option<String>, sink: LogSink) -> Self {
        Self { prefix, sink }
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
        } else {
            format!("[{}][{}:{}] {}", timestamp, file_name, line, message)
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let LogSink::File(ref target) = self.sink else {
            return;
        };
        let text = self.format_line(file, line, message);
        if let Ok(mut target) = target.lock() {
            let _ = writeln!(target, "{}", text);
        }
    }
}

pub fn init_logger(prefix: Option<String>, sink: LogSink) {
    LOGGER.get_or_init(|| Logger::new(prefix, sink));
}

/// Logging before `init_logger` is a no-op.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
