//! Run logger
//!
//! Records human-readable progress lines to both the console and a
//! timestamped file, so a long-running job leaves an audit trail behind.
//!
//! The file is only open while a [`LogScope`] is alive:
//!
//! ```no_run
//! use experiment_kit::run_log::Logger;
//!
//! let mut logger = Logger::new("training");
//! logger.scope(|log| {
//!     log.log("epoch 1 done")?;
//!     log.log("epoch 2 done")
//! })?;
//! # Ok::<(), experiment_kit::error::KitError>(())
//! ```

use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{KitError, Result};

/// Timestamp appended to the base name, e.g. `20260117093005`
const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Writes lines to the console and to `<base><timestamp>.log`
pub struct Logger {
    name: PathBuf,
    file: Option<File>,
    console: Box<dyn Write + Send>,
}

impl Logger {
    /// Create a logger that echoes to stdout.
    /// The log file name is fixed now but the file is not opened until [`Logger::enter`].
    pub fn new(name: impl AsRef<Path>) -> Self {
        Self::with_console(name, Box::new(io::stdout()))
    }

    /// Create a logger that echoes to the given console writer instead of stdout
    pub fn with_console(name: impl AsRef<Path>, console: Box<dyn Write + Send>) -> Self {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();

        let mut file_name = OsString::from(name.as_ref().as_os_str());
        file_name.push(timestamp);
        file_name.push(".log");

        Self {
            name: PathBuf::from(file_name),
            file: None,
            console,
        }
    }

    /// Path of the log file this logger writes to
    pub fn name(&self) -> &Path {
        &self.name
    }

    /// True while a scope is open
    pub fn is_active(&self) -> bool {
        self.file.is_some()
    }

    /// Open the log file (truncating any existing content) and return the active scope.
    ///
    /// The file is closed when the returned guard is dropped, including
    /// when the enclosing code returns early or panics.
    pub fn enter(&mut self) -> Result<LogScope<'_>> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.name)
            .map_err(|e| KitError::io(&self.name, e))?;

        debug!("Opened log file {:?}", self.name);
        self.file = Some(file);

        Ok(LogScope { logger: self })
    }

    /// Run `body` inside a scope, closing the file before returning its result
    pub fn scope<T, F>(&mut self, body: F) -> Result<T>
    where
        F: FnOnce(&mut Logger) -> Result<T>,
    {
        let mut scope = self.enter()?;
        body(&mut *scope)
    }

    /// Output one line of text to console and file, flushing both.
    ///
    /// Fails with [`KitError::InvalidState`] when no scope is open; nothing is written in that case.
    pub fn log(&mut self, line: &str) -> Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Err(KitError::InvalidState(format!(
                "log called outside an active scope for {:?}",
                self.name
            )));
        };

        writeln!(self.console, "{}", line)
            .and_then(|_| self.console.flush())
            .map_err(KitError::Console)?;

        writeln!(file, "{}", line)
            .and_then(|_| file.flush())
            .map_err(|e| KitError::io(&self.name, e))?;

        Ok(())
    }

    fn close(&mut self) {
        if let Some(file) = self.file.take() {
            drop(file);
            debug!("Closed log file {:?}", self.name);
        }
    }
}

/// An open logging scope. Dereferences to the [`Logger`]; dropping it closes the file.
pub struct LogScope<'a> {
    logger: &'a mut Logger,
}

impl Deref for LogScope<'_> {
    type Target = Logger;

    fn deref(&self) -> &Logger {
        self.logger
    }
}

impl DerefMut for LogScope<'_> {
    fn deref_mut(&mut self) -> &mut Logger {
        self.logger
    }
}

impl Drop for LogScope<'_> {
    fn drop(&mut self) {
        self.logger.close();
    }
}
