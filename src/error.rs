/// Errors raised by the crate's fallible setup paths.
///
/// Event dispatch itself never fails: a dispatch against a non-matching type is a normal
/// `false`, not an error. Only the logging facility (see `Log`) has failure modes.
///
/// ### Notes
/// - `Error::GlobalSubscriber` means the application installed its own global `tracing`
///   subscriber before `Log::init`; in that case keep using it and skip `Log` altogether.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid log filter '{filter}': {source}")]
    InvalidLogFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Logger has already been initialized.")]
    LoggerAlreadyInitialized,

    #[error("Global subscriber was already set elsewhere: {0}")]
    GlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("Failed to swap log output: {0}")]
    Reload(#[from] tracing_subscriber::reload::Error),
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidLogFilter { filter: a, .. }, Self::InvalidLogFilter { filter: b, .. }) => {
                a == b
            }
            (Self::LoggerAlreadyInitialized, Self::LoggerAlreadyInitialized) => true,
            (Self::GlobalSubscriber(_), Self::GlobalSubscriber(_)) => true,
            (Self::Reload(a), Self::Reload(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
