/*
    ABSTRACT: Process-wide logging facility for the engine core and for client code built on it.
    Producers raise events only after `Log::init`, and the returned handle is dropped after the last
    event is handled.
*/
use crate::{Error, Result};
use std::ffi::OsString;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use tracing_subscriber::{layer::SubscriberExt, reload, EnvFilter, Layer, Registry};

/// Target of records emitted by the event core itself (see `core_info!` and friends).
pub const CORE_TARGET: &str = "hzevent";

/// Target of records emitted by client code (see `app_info!` and friends).
pub const CLIENT_TARGET: &str = "app";

const DEFAULT_FILTER: &str = "info";

type OutputLayer = Box<dyn Layer<Registry> + Send + Sync>;
type OutputHandle = reload::Handle<Option<OutputLayer>, Registry>;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

// The global subscriber can only be set once per process. It is installed on the first `init`
// with an empty output slot, and each `Log` handle fills the slot and empties it again on drop.
static OUTPUT: OnceLock<OutputHandle> = OnceLock::new();

/// Configuration for `Log::init`.
///
/// # Examples
///
/// ```rust
/// use hzevent::LogConfig;
///
/// let config = LogConfig::default()
///     .with_filter("hzevent=trace,app=info")
///     .with_ansi(false);
/// assert_eq!(config.filter(), Some("hzevent=trace,app=info"));
/// assert!(config.show_target());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogConfig {
    /// `EnvFilter` directives. When unset, `RUST_LOG` is used, falling back to `info` only if
    /// `RUST_LOG` is absent.
    filter: Option<String>,

    /// Colorize output.
    /// Default: true
    ansi: bool,

    /// Print each record's target (`hzevent` or `app`) so core and client output can be told apart.
    /// Default: true
    show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: None,
            ansi: true,
            show_target: true,
        }
    }
}

impl LogConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn ansi(&self) -> bool {
        self.ansi
    }

    pub fn with_target(mut self, show_target: bool) -> Self {
        self.show_target = show_target;
        self
    }

    pub fn show_target(&self) -> bool {
        self.show_target
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        self.resolve_filter(std::env::var_os(EnvFilter::DEFAULT_ENV))
    }

    /// Picks the configured filter, then `from_env`, then the default. A malformed filter is an
    /// error wherever it came from.
    fn resolve_filter(&self, from_env: Option<OsString>) -> Result<EnvFilter> {
        let filter = match (&self.filter, from_env) {
            (Some(filter), _) => filter.clone(),
            (None, Some(from_env)) => from_env.to_string_lossy().into_owned(),
            (None, None) => return Ok(EnvFilter::new(DEFAULT_FILTER)),
        };
        EnvFilter::try_new(&filter).map_err(|source| Error::InvalidLogFilter { filter, source })
    }

    fn output_layer(&self, filter: EnvFilter) -> OutputLayer {
        let output = tracing_subscriber::fmt::layer()
            .with_ansi(self.ansi)
            .with_target(self.show_target);
        Box::new(Layer::<Registry>::and_then(filter, output))
    }
}

/// Handle to the initialized logging facility.
///
/// There is at most one live handle per process. While it is alive, records from every thread go
/// through the configured filter and output. Dropping the handle tears logging down; `Log::init`
/// may then be called again, with the same or a different configuration.
///
/// ### Example
///
/// ```rust
/// use hzevent::{Log, LogConfig};
///
/// let log = Log::init(LogConfig::default().with_ansi(false)).unwrap();
/// hzevent::core_info!("engine starting");
/// hzevent::app_warn!(frame = 1, "slow frame");
/// drop(log);
/// assert!(!Log::is_initialized());
/// ```
#[derive(Debug)]
pub struct Log {
    config: LogConfig,
}

impl Log {
    /// Initializes logging from `config`.
    ///
    /// ### Errors
    /// - `Error::InvalidLogFilter` if the configured filter, or `RUST_LOG` when no filter is
    ///   configured, does not parse.
    /// - `Error::LoggerAlreadyInitialized` if another `Log` handle is still alive.
    /// - `Error::GlobalSubscriber` if something other than `Log` already set the global subscriber.
    pub fn init(config: LogConfig) -> Result<Log> {
        let filter = config.env_filter()?;
        if INITIALIZED
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::LoggerAlreadyInitialized);
        }

        if let Err(e) = install_output(config.output_layer(filter)) {
            INITIALIZED.store(false, Ordering::Release);
            return Err(e);
        }
        tracing::debug!(target: CORE_TARGET, ?config, "logging initialized");

        Ok(Log { config })
    }

    pub fn is_initialized() -> bool {
        INITIALIZED.load(Ordering::Acquire)
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }
}

impl Drop for Log {
    fn drop(&mut self) {
        tracing::debug!(target: CORE_TARGET, "logging shut down");
        if let Some(handle) = OUTPUT.get() {
            // Only fails if the global subscriber is gone, in which case there is nothing to empty.
            let _ = handle.reload(None);
        }
        INITIALIZED.store(false, Ordering::Release);
    }
}

fn install_output(layer: OutputLayer) -> Result<()> {
    if let Some(handle) = OUTPUT.get() {
        return Ok(handle.reload(Some(layer))?);
    }

    let (slot, handle) = reload::Layer::new(Some(layer));
    tracing::subscriber::set_global_default(Registry::default().with(slot))?;
    // Callers are serialized by `INITIALIZED`, so the slot is still empty here.
    let _ = OUTPUT.set(handle);
    Ok(())
}

#[macro_export]
macro_rules! core_trace {
    ($($arg:tt)+) => { $crate::__tracing::trace!(target: $crate::log::CORE_TARGET, $($arg)+) };
}

#[macro_export]
macro_rules! core_debug {
    ($($arg:tt)+) => { $crate::__tracing::debug!(target: $crate::log::CORE_TARGET, $($arg)+) };
}

#[macro_export]
macro_rules! core_info {
    ($($arg:tt)+) => { $crate::__tracing::info!(target: $crate::log::CORE_TARGET, $($arg)+) };
}

#[macro_export]
macro_rules! core_warn {
    ($($arg:tt)+) => { $crate::__tracing::warn!(target: $crate::log::CORE_TARGET, $($arg)+) };
}

#[macro_export]
macro_rules! core_error {
    ($($arg:tt)+) => { $crate::__tracing::error!(target: $crate::log::CORE_TARGET, $($arg)+) };
}

/// `tracing` has no level above error; critical records are errors tagged `critical = true`.
#[macro_export]
macro_rules! core_critical {
    ($($arg:tt)+) => {
        $crate::__tracing::error!(target: $crate::log::CORE_TARGET, critical = true, $($arg)+)
    };
}

#[macro_export]
macro_rules! app_trace {
    ($($arg:tt)+) => { $crate::__tracing::trace!(target: $crate::log::CLIENT_TARGET, $($arg)+) };
}

#[macro_export]
macro_rules! app_debug {
    ($($arg:tt)+) => { $crate::__tracing::debug!(target: $crate::log::CLIENT_TARGET, $($arg)+) };
}

#[macro_export]
macro_rules! app_info {
    ($($arg:tt)+) => { $crate::__tracing::info!(target: $crate::log::CLIENT_TARGET, $($arg)+) };
}

#[macro_export]
macro_rules! app_warn {
    ($($arg:tt)+) => { $crate::__tracing::warn!(target: $crate::log::CLIENT_TARGET, $($arg)+) };
}

#[macro_export]
macro_rules! app_error {
    ($($arg:tt)+) => { $crate::__tracing::error!(target: $crate::log::CLIENT_TARGET, $($arg)+) };
}

#[macro_export]
macro_rules! app_critical {
    ($($arg:tt)+) => {
        $crate::__tracing::error!(target: $crate::log::CLIENT_TARGET, critical = true, $($arg)+)
    };
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let config = LogConfig::default()
            .with_filter("hzevent=trace")
            .with_ansi(false)
            .with_target(false);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<LogConfig>(&json).unwrap(), config);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: LogConfig = serde_json::from_str(r#"{"filter":"debug"}"#).unwrap();
        assert_eq!(config, LogConfig::default().with_filter("debug"));
    }
}
