use std::io::Write;

use env_logger::{fmt::Color, Builder, Env};
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use log::{Level, LevelFilter};
use once_cell::sync::OnceCell;
use thiserror::Error;

static INSTANCE: OnceCell<Logger> = OnceCell::new();

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Logger may only be initialized once per process")]
    AlreadyInitialized,

    #[error("Failed to register the global log implementation")]
    SetLogger(#[from] log::SetLoggerError),
}

/// Process-wide logging frontend.
///
/// Wraps an `env_logger` backend with an `indicatif::MultiProgress`, so that
/// progress bars and log lines may coexist without clobbering one another.
/// Verbosity is set from the number of `-v` occurrences on the command line,
/// and may be overriden at runtime through the `PEDPROB_LOG` environment
/// variable.
#[derive(Debug)]
pub struct Logger {
    multi_pg: MultiProgress,
}

impl Logger {
    /// Build and register the global logger.
    ///
    /// # Errors
    /// - if a global logger was already registered for this process.
    pub fn init(verbosity: u8) -> Result<(), LoggerError> {
        let env = Env::default().filter("PEDPROB_LOG");

        let logger = Builder::new()
            .filter_level(Self::level_filter(verbosity))
            .format(|buf, record| {
                // ---- Errors carry a file:line traceback.
                let traceback = match record.level() {
                    Level::Error => format!(
                        "(@ {}:{}) ",
                        record.file().unwrap_or("unknown"),
                        record.line().unwrap_or(0)
                    ),
                    _ => String::new(),
                };

                let mut level_style = buf.style();
                level_style.set_color(Self::level_color(record.level())).set_bold(true);

                writeln!(
                    buf,
                    "[{} {: <5} {}] {traceback}{}",
                    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                    level_style.value(record.level()),
                    record.target(),
                    record.args()
                )
            })
            .parse_env(env)
            .build();

        // ---- Progress bar support.
        let multi_pg = MultiProgress::new();
        LogWrapper::new(multi_pg.clone(), logger).try_init()?;
        INSTANCE.set(Self { multi_pg }).map_err(|_| LoggerError::AlreadyInitialized)
    }

    /// Reset the maximum log level after initialization.
    pub fn set_level(verbosity: u8) {
        log::set_max_level(Self::level_filter(verbosity));
    }

    /// Return the registered `MultiProgress`, or `None` when `init` was never
    /// called (e.g. within unit tests).
    pub fn try_multi() -> Option<&'static MultiProgress> {
        INSTANCE.get().map(|logger| &logger.multi_pg)
    }

    fn level_filter(verbosity: u8) -> LevelFilter {
        match verbosity {
            0           => LevelFilter::Error,
            1           => LevelFilter::Warn,
            2           => LevelFilter::Info,
            3           => LevelFilter::Debug,
            4..=u8::MAX => LevelFilter::Trace,
        }
    }

    fn level_color(level: Level) -> Color {
        match level {
            Level::Error => Color::Red,
            Level::Warn  => Color::Yellow,
            Level::Info  => Color::Green,
            Level::Debug => Color::Blue,
            Level::Trace => Color::Cyan,
        }
    }
}
