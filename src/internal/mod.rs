//! patlog's own diagnostic logger. Problems patlog notices about itself are rendered through
//! the same pipeline as everything else.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if multiple entry points
//! (CLI, library consumers, tests) race to call `init`. Silent until then.

use crate::config::Config;
use crate::level::Level;
use crate::logger::Logger;
use crate::pattern::Profile;
use crate::store::Destination;
use std::sync::{Mutex, OnceLock, TryLockError};

static INTERNAL_LOGGER: OnceLock<Mutex<Logger<'static>>> = OnceLock::new();

/// Enables diagnostics on stderr at `level`. Only the first call takes effect.
pub fn init(level: Level) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| Mutex::new(build_internal_logger(level)));
    if !was_init {
        debug("INTERNAL", "Internal logger ready");
    }
}

/// Enables diagnostics if the config's `[internal]` section asks for them.
pub fn init_with_config(config: &Config) {
    if !config.internal.enabled {
        return;
    }
    let level = config.internal.level.parse().unwrap_or(Level::Warning);
    init(level);
}

fn build_internal_logger(level: Level) -> Logger<'static> {
    Logger::builder()
        .level(level)
        .profile(Profile::Minimal)
        .prefix("patlog: ")
        .destination(Destination::Stderr)
        .build()
}

/// Pre-init calls vanish rather than crashing. A call made while the internal logger is busy
/// (a diagnostic raised from inside its own write) is dropped instead of deadlocking. A poisoned
/// lock is recovered.
fn log(level: Level, scope: &str, msg: &str) {
    let Some(logger) = INTERNAL_LOGGER.get() else {
        return;
    };
    write_to(logger, level, scope, msg);
}

fn write_to(slot: &Mutex<Logger<'static>>, level: Level, scope: &str, msg: &str) {
    let mut logger = match slot.try_lock() {
        Ok(logger) => logger,
        Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        Err(TryLockError::WouldBlock) => return,
    };
    logger.log(level, &format!("[{scope}] {msg}"));
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemoryOutput;
    use std::thread;

    fn capture() -> (Mutex<Logger<'static>>, MemoryOutput) {
        let out = MemoryOutput::new();
        let logger = Logger::builder()
            .pattern("&lev&sep&msg")
            .output(out.clone())
            .build();
        (Mutex::new(logger), out)
    }

    #[test]
    fn writes_scoped_message() {
        let (slot, out) = capture();
        write_to(&slot, Level::Warning, "CONFIG", "bad level");
        assert_eq!(out.lines(), ["Warning | [CONFIG] bad level"]);
    }

    #[test]
    fn busy_logger_drops_the_message() {
        let (slot, out) = capture();
        let guard = slot.lock().unwrap();
        write_to(&slot, Level::Warning, "FILE", "dropped");
        drop(guard);
        assert!(out.lines().is_empty());
    }

    #[test]
    fn poisoned_logger_keeps_writing() {
        let (slot, out) = capture();
        thread::scope(|s| {
            let _ = s
                .spawn(|| {
                    let _guard = slot.lock().unwrap();
                    panic!("poison the lock");
                })
                .join();
        });
        assert!(slot.is_poisoned());

        write_to(&slot, Level::Warning, "FILE", "still here");
        assert_eq!(out.lines(), ["Warning | [FILE] still here"]);
    }
}
