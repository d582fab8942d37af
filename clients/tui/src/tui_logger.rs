use log::{LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

/// Messages kept for the log pane
pub const LOG_CAPACITY: usize = 100;

/// Collects log records into a shared buffer the UI drains each frame
pub struct TuiLogger {
    log_buffer: Arc<Mutex<Vec<String>>>,
    level: LevelFilter,
}

impl TuiLogger {
    pub fn new(level: LevelFilter) -> (Self, Arc<Mutex<Vec<String>>>) {
        let log_buffer = Arc::new(Mutex::new(Vec::new()));
        (
            TuiLogger {
                log_buffer: log_buffer.clone(),
                level,
            },
            log_buffer,
        )
    }

    /// Install as the global logger and hand back the buffer
    pub fn init(level: LevelFilter) -> Result<Arc<Mutex<Vec<String>>>, log::SetLoggerError> {
        let (logger, log_buffer) = Self::new(level);
        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(level);
        Ok(log_buffer)
    }
}

impl Log for TuiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let msg = format!("{}", record.args());
            if let Ok(mut buffer) = self.log_buffer.lock() {
                buffer.push(msg);
                if buffer.len() > LOG_CAPACITY {
                    buffer.remove(0);
                }
            }
        }
    }

    fn flush(&self) {}
}
