//! Centralized match logger
//!
//! Presentation reads engine-emitted narration from here; tests assert on
//! the in-memory buffer instead of scraping stdout.

use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};

/// Verbosity level for match output
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during the match
    Silent = 0,
    /// Minimal - only the match outcome
    Minimal = 1,
    /// Normal - turns and key actions (default)
    #[default]
    Normal = 2,
    /// Verbose - all actions and state changes
    Verbose = 3,
}

/// Output destination for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Output only to stdout (default)
    #[default]
    Stdout,
    /// Capture only to the in-memory buffer (no stdout)
    Memory,
    /// Both stdout and the in-memory buffer
    Both,
}

/// A captured log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Verbosity level of this entry
    pub level: VerbosityLevel,
    /// Log message
    pub message: String,
    /// Optional category (e.g. "turn", "effect", "settlement")
    pub category: Option<String>,
}

/// Guard type providing read-only access to captured log entries
pub struct LogGuard<'a> {
    guard: Ref<'a, Vec<LogEntry>>,
}

impl<'a> LogGuard<'a> {
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.guard.iter()
    }

    pub fn len(&self) -> usize {
        self.guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard.is_empty()
    }
}

impl<'a> std::ops::Deref for LogGuard<'a> {
    type Target = [LogEntry];

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

/// Match logger with verbosity filtering and optional in-memory capture
#[derive(Debug)]
pub struct MatchLogger {
    verbosity: VerbosityLevel,
    output_mode: OutputMode,
    log_buffer: RefCell<Vec<LogEntry>>,
}

impl MatchLogger {
    /// Create a logger with default verbosity (Normal), stdout only
    pub fn new() -> Self {
        MatchLogger {
            verbosity: VerbosityLevel::default(),
            output_mode: OutputMode::default(),
            log_buffer: RefCell::new(Vec::new()),
        }
    }

    /// Create a logger with the given verbosity
    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        MatchLogger {
            verbosity,
            ..MatchLogger::new()
        }
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    /// Log a message at the given level with an optional category
    pub fn log(&self, level: VerbosityLevel, message: &str, category: Option<&str>) {
        if level > self.verbosity {
            return;
        }
        match self.output_mode {
            OutputMode::Stdout => println!("{}", message),
            OutputMode::Memory => self.capture(level, message, category),
            OutputMode::Both => {
                println!("{}", message);
                self.capture(level, message, category);
            }
        }
    }

    /// Log at Minimal level (match outcome)
    pub fn minimal(&self, message: &str) {
        self.log(VerbosityLevel::Minimal, message, None);
    }

    /// Log at Normal level (turn narration)
    pub fn normal(&self, message: &str) {
        self.log(VerbosityLevel::Normal, message, Some("turn"));
    }

    /// Log at Verbose level
    pub fn verbose(&self, message: &str) {
        self.log(VerbosityLevel::Verbose, message, None);
    }

    /// Report an effect-rule event (fired rule, isolated failure)
    pub fn effect(&self, message: &str) {
        self.log(VerbosityLevel::Normal, message, Some("effect"));
    }

    /// Read-only access to the captured entries (Memory or Both mode)
    pub fn entries(&self) -> LogGuard<'_> {
        LogGuard {
            guard: self.log_buffer.borrow(),
        }
    }

    fn capture(&self, level: VerbosityLevel, message: &str, category: Option<&str>) {
        self.log_buffer.borrow_mut().push(LogEntry {
            level,
            message: message.to_string(),
            category: category.map(|c| c.to_string()),
        });
    }
}

impl Default for MatchLogger {
    fn default() -> Self {
        Self::new()
    }
}
