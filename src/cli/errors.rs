use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Live point count must be greater than 0")]
    ZeroLivePoints,

    #[cfg(not(feature = "native-engine"))]
    #[error("This binary was built without the native-engine feature")]
    NoEngineSupport,
}
