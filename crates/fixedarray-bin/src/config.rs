//! Process configuration read from the environment.
//!
//! The executable takes no arguments; everything tunable is an environment
//! variable read once on first access.

use std::{env, process, str::FromStr, sync::LazyLock};

use tracing::Level;

const LOG_VAR: &str = "FIXEDARRAY_LOG";
const LOG_JSON_VAR: &str = "FIXEDARRAY_LOG_JSON";

/// Exit status code used for invalid configuration.
pub const EXIT_FAILURE: i32 = 2;

#[derive(Default)]
pub struct Flags {
    /// Maximum level of emitted log events, or `None` to disable logging. Defaults to `off`.
    pub log_level: Option<LogLevel>,
    /// Emit log events as JSON lines instead of the human-readable format.
    pub log_json: bool,
}

pub(crate) static FLAGS: LazyLock<Flags> = LazyLock::new(|| {
    match Flags::from_lookup(|key| env::var(key).ok()) {
        Ok(flags) => flags,
        Err((key, reason)) => {
            eprintln!("error: incorrect value for `{key}` - `{reason}`");
            process::exit(EXIT_FAILURE);
        }
    }
});

impl Flags {
    /// Build flags from a variable lookup, reporting the first bad variable.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, (&'static str, &'static str)> {
        let mut flags = Flags::default();
        if let Some(value) = lookup(LOG_VAR) {
            parse_log_level(&mut flags.log_level, &value).map_err(|reason| (LOG_VAR, reason))?;
        }
        if let Some(value) = lookup(LOG_JSON_VAR) {
            parse_bool(&mut flags.log_json, &value).map_err(|reason| (LOG_JSON_VAR, reason))?;
        }
        Ok(flags)
    }
}

pub fn log_level() -> Option<Level> {
    FLAGS.log_level.map(Level::from)
}

pub fn log_json() -> bool {
    FLAGS.log_json
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    const ERROR: &'static str = "one of `off`, `error`, `warn`, `info`, `debug`, or `trace`";
}

impl FromStr for LogLevel {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(Self::ERROR),
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

fn parse_log_level(slot: &mut Option<LogLevel>, v: &str) -> Result<(), &'static str> {
    if v.eq_ignore_ascii_case("off") || v.is_empty() {
        *slot = None;
        return Ok(());
    }
    *slot = Some(v.parse()?);
    Ok(())
}

fn parse_bool(slot: &mut bool, v: &str) -> Result<(), &'static str> {
    match v {
        "y" | "yes" | "on" | "true" | "" => {
            *slot = true;
            Ok(())
        }
        "n" | "no" | "off" | "false" => {
            *slot = false;
            Ok(())
        }
        _ => {
            Err(
                "expected no value or one of `y`, `yes`, `on`, `true`, `n`, `no`, `off`, or `false`",
            )
        }
    }
}
