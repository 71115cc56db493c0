use log::{Level, LevelFilter, Log, Metadata, Record};
use worker::*;

/// Forwards the `log` facade to the Workers console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Error => console_error!("[ERROR] {}", record.args()),
            Level::Warn => console_warn!("[WARN] {}", record.args()),
            level => console_log!("[{}] {}", level, record.args()),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger once per isolate; later calls only adjust the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

pub fn log_request(req: &Request, request_id: &str) {
    log::info!("{} {:?} {}", request_id, req.method(), req.path());
}

pub fn log_response(request_id: &str, status: u16, elapsed_ms: u64) {
    log::info!("{} -> {} ({} ms)", request_id, status, elapsed_ms);
}
