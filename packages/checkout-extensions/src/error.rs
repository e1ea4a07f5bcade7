use thiserror::Error;

/// Errors raised while exchanging payloads with the checkout host.
///
/// The rules themselves never fail; only the payload boundary can.
#[derive(Error, Debug)]
pub enum ExtensionError {
    #[error("Invalid extension input: {0}")]
    InvalidInput(#[source] serde_json::Error),

    #[error("Failed to encode extension output: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExtensionError>;
